use std::sync::Mutex;

use event_emitter_rs::EventEmitter;

use super::event::{EntryEvent, EventSink, ExitEvent, SinkError, EVENT_ENTERED, EVENT_EXITED};

/// A sink that emits events as JSON strings on an `EventEmitter` for
/// in-process subscribers.
pub struct EmitterSink {
    emitter: Mutex<EventEmitter>,
}

impl EmitterSink {
    pub fn new(emitter: EventEmitter) -> Self {
        EmitterSink {
            emitter: Mutex::new(emitter),
        }
    }

    fn emit<T: serde::Serialize>(&self, event_type: &str, event: &T) -> Result<(), SinkError> {
        let payload = serde_json::to_string(event).map_err(|e| SinkError::Encode(e.to_string()))?;
        let mut emitter = self.emitter.lock().map_err(|_| SinkError::BufferPoisoned)?;
        emitter.emit(event_type, payload);
        Ok(())
    }
}

impl EventSink for EmitterSink {
    fn on_entry(&self, event: &EntryEvent) -> Result<(), SinkError> {
        self.emit(EVENT_ENTERED, event)
    }

    fn on_exit(&self, event: &ExitEvent) -> Result<(), SinkError> {
        self.emit(EVENT_EXITED, event)
    }
}
