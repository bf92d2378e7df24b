//! Observability infrastructure
//!
//! Installs the global `tracing` subscriber and routes plumbing errors to
//! the log level their severity calls for.

pub mod logging;

pub use logging::{init_logging, log_common_error};
