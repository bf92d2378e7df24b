//! Configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DAILY_TARGET_HOURS, DEFAULT_LOG_LEVEL, DEFAULT_MIN_NOTE_CHARS,
    DEFAULT_WEEKLY_OVERTIME_THRESHOLD_HOURS, DISPLAY_DECIMALS,
};

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub policy: PolicyConfig,
    pub aggregation: AggregationConfig,
    pub logging: LoggingConfig,
}

/// Approval policy thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Weekly hours above which a timesheet carries overtime
    pub overtime_threshold_hours: f64,
    /// Minimum trimmed length of a line note before it counts as detailed
    pub min_note_chars: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            overtime_threshold_hours: DEFAULT_WEEKLY_OVERTIME_THRESHOLD_HOURS,
            min_note_chars: DEFAULT_MIN_NOTE_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub daily_target_hours: f64,
    pub display_decimals: u32,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self { daily_target_hours: DEFAULT_DAILY_TARGET_HOURS, display_decimals: DISPLAY_DECIMALS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"policy": {"overtime_threshold_hours": 37.5}}"#).unwrap();
        assert_eq!(config.policy.overtime_threshold_hours, 37.5);
        assert_eq!(config.policy.min_note_chars, 8);
        assert_eq!(config.aggregation.daily_target_hours, 8.0);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }
}
