//! Tracing subscriber setup

use timekeep_common::error::{CommonError, ErrorClassification, ErrorSeverity};
use timekeep_domain::{LoggingConfig, Result, TimekeepError};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `config.level` when set. Output is JSON
/// lines when `config.json` is true, human-readable otherwise.
///
/// Returns `Ok(false)` when a global subscriber was already installed, which
/// is the normal case for test binaries that call this more than once.
///
/// # Errors
/// Returns `TimekeepError::Config` if the configured level is not a valid
/// filter directive.
pub fn init_logging(config: &LoggingConfig) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            TimekeepError::Config(format!("Invalid log level '{}': {}", config.level, e))
        })?,
    };

    let installed = if config.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().with_target(true).try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init()
    };

    match installed {
        Ok(()) => {
            tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

/// Log a plumbing error at the level its severity calls for
pub fn log_common_error(err: &CommonError) {
    let kind = err.kind();
    let retryable = err.is_retryable();

    match err.severity() {
        ErrorSeverity::Info => tracing::info!(kind, retryable, error = %err, "operation failed"),
        ErrorSeverity::Warning => tracing::warn!(kind, retryable, error = %err, "operation failed"),
        ErrorSeverity::Error => tracing::error!(kind, retryable, error = %err, "operation failed"),
        ErrorSeverity::Critical => {
            tracing::error!(kind, retryable, critical = true, error = %err, "operation failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_level_directive() {
        // Only reachable when RUST_LOG is absent; skip otherwise.
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig { level: "timekeep=notalevel".to_string(), json: false };
        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, TimekeepError::Config(_)));
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config).unwrap();
        assert!(!init_logging(&config).unwrap());
    }

    #[test]
    fn logs_loader_failures_without_panicking() {
        let interrupted = std::io::Error::from(std::io::ErrorKind::Interrupted);
        log_common_error(&CommonError::from(interrupted));
        log_common_error(&CommonError::config("bad"));
        log_common_error(&CommonError::persistence_op("open", "Config file not found"));
    }
}
