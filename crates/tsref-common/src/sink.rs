//! Injected diagnostics sink.
//!
//! Resolution and the symbol table builder report recoverable conditions
//! through a sink handed in by the caller rather than through ambient
//! global state. The default sink forwards to `tracing`.

use std::sync::Mutex;

/// Receiver for non-fatal diagnostics emitted during a run.
pub trait DiagnosticsSink {
    /// A recoverable external-resolution failure (e.g. an import that
    /// could not be traced to its module). The run continues degraded.
    fn warn(&self, message: &str);

    /// Progress information (per-file parsing notices and the like).
    fn info(&self, message: &str);

    /// High-volume detail useful only when debugging resolution.
    fn verbose(&self, message: &str);
}

/// Forwards diagnostics to the `tracing` ecosystem.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn verbose(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

/// Discards everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn warn(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn verbose(&self, _message: &str) {}
}

/// Buffers diagnostics for later inspection. Used by tests that assert on
/// warning counts.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<String>>,
    infos: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> CollectingSink {
        CollectingSink::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }
}

impl DiagnosticsSink for CollectingSink {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn verbose(&self, _message: &str) {}
}
