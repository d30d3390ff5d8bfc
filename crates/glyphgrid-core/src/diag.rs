#![forbid(unsafe_code)]

//! Diagnostic sink: where boundary-violation reports go.
//!
//! Out-of-range coordinates are non-fatal: they are clamped and reported,
//! and execution continues. The sink is an injected collaborator so hosts
//! decide what "reported" means; a missing or no-op sink never affects
//! correctness.

use std::cell::RefCell;

/// Receives human-readable diagnostics for invalid (but recoverable) input.
pub trait DiagnosticSink {
    /// Report one diagnostic message.
    fn report(&self, message: &str);
}

/// Production sink: forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, message: &str) {
        tracing::warn!(target: "glyphgrid", "{message}");
    }
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _message: &str) {}
}

/// Captures diagnostics in memory for assertion in tests, or for hosts that
/// surface them in their own UI.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: RefCell<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages reported so far, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Number of messages reported so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Whether nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Drop all captured messages.
    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
