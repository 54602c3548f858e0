//! Diagnostic reporting for variable resolution.
//!
//! Resolution failures are reported to the caller as a plain absence of a
//! result; the reason a value could not be resolved is only observable
//! through a [`DiagnosticSink`]. The sink is injected by the caller, so the
//! resolver stays free of any direct logging dependency and tests can
//! inspect the messages without capturing process output.

use std::sync::{Mutex, PoisonError};

/// Receives human-readable messages describing resolution events.
///
/// The resolver reports cycle detection, missing or unresolvable variable
/// values, and successful substitutions. Messages are advisory only and
/// never influence the resolution outcome.
pub trait DiagnosticSink {
    /// Report a debug-level message.
    fn debug(&self, message: &str);
}

/// Forwards messages to the `log` crate at debug level.
///
/// This is the sink to use in binaries where `env_logger` (or another
/// `log` backend) is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }
}

/// Discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn debug(&self, _message: &str) {}
}

/// Collects messages in memory so they can be inspected afterwards.
///
/// Mostly useful in tests to assert why a resolution failed.
#[derive(Debug, Default)]
pub struct BufferSink {
    messages: Mutex<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticSink for BufferSink {
    fn debug(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
