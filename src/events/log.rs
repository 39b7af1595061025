use std::sync::{Arc, Mutex};

use tracing::info;

use super::event::{EntryEvent, EventSink, ExitEvent, SinkError, EVENT_ENTERED, EVENT_EXITED};

/// A sink that logs events through `tracing` or into a buffer.
pub struct LogSink {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink {
    pub fn new() -> Self {
        LogSink { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogSink {
            buffer: Some(buffer),
        }
    }

    fn write(&self, line: String) -> Result<(), SinkError> {
        if let Some(buffer) = &self.buffer {
            let mut buffer = buffer.lock().map_err(|_| SinkError::BufferPoisoned)?;
            buffer.push(line);
        } else {
            info!(target: "parking_engine::events", "{}", line);
        }
        Ok(())
    }
}

impl EventSink for LogSink {
    fn on_entry(&self, event: &EntryEvent) -> Result<(), SinkError> {
        self.write(format!(
            "[PARKING] {} {} slot={} ticket={} type={}",
            EVENT_ENTERED,
            event.ticket.plate,
            event.ticket.slot,
            event.ticket.id,
            event.vehicle.category().label()
        ))
    }

    fn on_exit(&self, event: &ExitEvent) -> Result<(), SinkError> {
        let record = &event.record;
        self.write(format!(
            "[PARKING] {} {} slot={} record={} minutes={} charge={}",
            EVENT_EXITED,
            record.plate,
            record.slot,
            record.id,
            record.duration_minutes,
            record.charge
        ))
    }
}
