//! Logging capability injected at profile construction.
//!
//! The structural check narrates findings while it accumulates them.
//! Callers decide where that narration goes; the library never installs a
//! global sink.

/// Leveled logging operations consumed by the profile pipeline.
pub trait Log {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards each level to the matching `tracing` macro.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl Log for TracingLog {
    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
