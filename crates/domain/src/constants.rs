//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! engine.

// Hours policy
pub const DEFAULT_WEEKLY_OVERTIME_THRESHOLD_HOURS: f64 = 40.0;
pub const DEFAULT_DAILY_TARGET_HOURS: f64 = 8.0;
pub const MAX_ENTRY_HOURS: f64 = 24.0;

// Notes shorter than this are flagged as insufficient detail ("Work", "Coding")
pub const DEFAULT_MIN_NOTE_CHARS: usize = 8;

// Rounding
pub const DISPLAY_DECIMALS: u32 = 1;
pub const COMPUTED_HOURS_DECIMALS: u32 = 2;

pub const DEFAULT_LOG_LEVEL: &str = "info";
