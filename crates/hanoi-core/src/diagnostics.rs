//! Diagnostic messages for developers watching a game.
//!
//! Components that report what they are doing take an
//! `Rc<dyn Diagnostics>` at construction instead of reaching for a global.

use std::cell::RefCell;

/// Sink for human-readable diagnostic lines.
pub trait Diagnostics {
    /// Appends a line.
    fn message(&self, message: &str);

    /// Discards previously appended lines, where the sink supports it.
    fn clear(&self) {}
}

/// Forwards messages to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn message(&self, message: &str) {
        tracing::debug!(target: "hanoi::diagnostics", "{message}");
    }
}

/// Drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn message(&self, _message: &str) {}
}

/// Keeps messages in memory, like an on-page debug panel.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    lines: RefCell<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the lines currently shown.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn message(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }

    fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}
