//! Console logging via `tracing`.
//!
//! The generator has no persistent log file or summary collection — every
//! run is a single forward pass whose outcome is the generated file plus
//! the process exit status.  Messages go to stderr through a
//! [`tracing_subscriber`] fmt layer; [`Logger`] is the thin façade the
//! command layer logs through.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The default level is `info`, lowered to `debug` when `verbose` is set.
/// `RUST_LOG` overrides both.  Calling this more than once (e.g. from
/// tests) is a no-op.
pub fn init_subscriber(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

/// Thin logging façade passed into the command layer.
#[derive(Debug, Default)]
pub struct Logger;

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Log a stage header (major pipeline step).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "whim_rules::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (visible with `--verbose`).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_subscriber_is_idempotent() {
        init_subscriber(false);
        init_subscriber(true);
    }

    #[test]
    fn logger_methods_do_not_panic_without_subscriber() {
        let log = Logger::new();
        log.stage("stage");
        log.info("info");
        log.debug("debug");
        log.warn("warn");
        log.error("error");
    }
}
