//! Observability for the canteen ordering core.
//!
//! Call sites log through the `tracing` macros; this crate only decides where
//! those events go:
//! - `LogConfig` - level, format and per-target directives
//! - `init_logging` - installs the process-wide subscriber

mod logging;

pub use logging::*;
