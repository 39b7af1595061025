use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ledger::HistoryRecord;
use crate::session::Ticket;
use crate::vehicle::Vehicle;

pub const EVENT_ENTERED: &str = "parking.entered";
pub const EVENT_EXITED: &str = "parking.exited";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryEvent {
    pub vehicle: Vehicle,
    pub ticket: Ticket,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitEvent {
    pub record: HistoryRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParkingEvent {
    Entered(EntryEvent),
    Exited(ExitEvent),
}

impl ParkingEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ParkingEvent::Entered(_) => EVENT_ENTERED,
            ParkingEvent::Exited(_) => EVENT_EXITED,
        }
    }

    pub fn plate(&self) -> &str {
        match self {
            ParkingEvent::Entered(event) => event.vehicle.plate(),
            ParkingEvent::Exited(event) => &event.record.plate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    BufferPoisoned,
    Encode(String),
    Decode(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::BufferPoisoned => write!(f, "event sink buffer poisoned"),
            SinkError::Encode(message) => write!(f, "event encode failed: {}", message),
            SinkError::Decode(message) => write!(f, "event decode failed: {}", message),
        }
    }
}

impl std::error::Error for SinkError {}

/// Observer of committed entries and exits.
pub trait EventSink: Send + Sync {
    fn on_entry(&self, event: &EntryEvent) -> Result<(), SinkError>;

    fn on_exit(&self, event: &ExitEvent) -> Result<(), SinkError>;

    /// Route a `ParkingEvent` to the matching callback.
    fn deliver(&self, event: &ParkingEvent) -> Result<(), SinkError> {
        match event {
            ParkingEvent::Entered(entry) => self.on_entry(entry),
            ParkingEvent::Exited(exit) => self.on_exit(exit),
        }
    }
}
