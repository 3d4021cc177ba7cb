use std::sync::{Arc, Mutex};

use shared::protocol::LogEvent;
use tracing::info;

/// Line-oriented, write-only log output.
pub trait LogSink: Send + Sync {
    fn emit(&self, event: LogEvent);
}

impl<T> LogSink for &T
where
    T: LogSink + ?Sized,
{
    fn emit(&self, event: LogEvent) {
        (**self).emit(event);
    }
}

impl<T> LogSink for Arc<T>
where
    T: LogSink + ?Sized,
{
    fn emit(&self, event: LogEvent) {
        (**self).emit(event);
    }
}

/// Forwards every event to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, event: LogEvent) {
        let line = event.line();
        match &event {
            LogEvent::ActorState { style, .. } => info!(style = %style, "{line}"),
            LogEvent::Field { name, .. } => info!(field = %name, "{line}"),
            LogEvent::Rendered { target, .. } => info!(display = %target, "{line}"),
        }
    }
}

/// Keeps every event in order. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(LogEvent::line).collect()
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn emit(&self, event: LogEvent) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event);
    }
}

/// Sends each event to both sinks, left first.
#[derive(Debug, Default, Clone)]
pub struct Tee<A, B>(pub A, pub B);

impl<A, B> LogSink for Tee<A, B>
where
    A: LogSink,
    B: LogSink,
{
    fn emit(&self, event: LogEvent) {
        self.0.emit(event.clone());
        self.1.emit(event);
    }
}

#[cfg(test)]
#[path = "tests/sink_tests.rs"]
mod tests;
