//! Constraint event sinks
//!
//! The engine and the batch orchestration push every rejection through a
//! `ConstraintSink` instead of printing. The binary installs
//! [`LogReporter`], which forwards events to the `log` facade; tests use
//! [`MemoryReporter`] and assert on the structured events directly.

use crate::types::ConstraintEvent;

/// Destination for structured rejection events
pub trait ConstraintSink {
    fn report(&mut self, event: ConstraintEvent);
}

/// Sink that forwards each event to the process logger at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ConstraintSink for LogReporter {
    fn report(&mut self, event: ConstraintEvent) {
        log::error!("{}: {}", event.kind, event.message);
    }
}

/// Sink that collects events in memory for inspection
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Vec<ConstraintEvent>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        MemoryReporter::default()
    }

    pub fn events(&self) -> &[ConstraintEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn take(&mut self) -> Vec<ConstraintEvent> {
        std::mem::take(&mut self.events)
    }
}

impl ConstraintSink for MemoryReporter {
    fn report(&mut self, event: ConstraintEvent) {
        self.events.push(event);
    }
}
