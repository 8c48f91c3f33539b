// Diagnostic sink for non-surfaced failures.
// Search errors land here instead of in the UI; the sink is pluggable so
// tests can assert on emitted events.

use chrono::{DateTime, Utc};

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Info,
    Error,
}

/// A single diagnostic event.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Capability interface for receiving diagnostics.
pub trait DiagnosticSink {
    fn record(&mut self, event: Diagnostic);
}

/// In-memory sink holding events in arrival order.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    events: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Diagnostic] {
        &self.events
    }

    pub fn error_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.level == DiagnosticLevel::Error)
            .count()
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn record(&mut self, event: Diagnostic) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_order() {
        let mut log = DiagnosticLog::new();
        log.record(Diagnostic::info("started"));
        log.record(Diagnostic::error("search failed: boom"));

        assert_eq!(log.events().len(), 2);
        assert_eq!(log.events()[0].message, "started");
        assert_eq!(log.events()[1].level, DiagnosticLevel::Error);
        assert_eq!(log.error_count(), 1);
    }
}
