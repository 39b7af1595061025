mod clock;
mod config;
mod engine;
mod error;
pub mod events;
#[cfg(feature = "http")]
pub mod http;
mod ledger;
mod policy;
mod session;
mod slots;
mod vehicle;

pub use clock::{elapsed_minutes, Clock, ManualClock, SystemClock};
pub use config::{Capacity, LotConfig};
pub use engine::{ParkRequest, ParkingEngine, Receipt, Statistics, VehicleInfo};
pub use error::ParkingError;
pub use events::{EntryEvent, EventSink, ExitEvent, LogSink, OutboxSink, ParkingEvent, SinkError};
pub use ledger::{HistoryLedger, HistoryRecord, HISTORY_HEADER};
pub use policy::{billed_hours, required_slots, Amount, Tariff, Tariffs, TIERED_HOURS};
pub use session::{ParkingSession, SessionRegistry, Ticket, TicketIssuer};
pub use slots::{Availability, ParkingSlot, SlotPool};
pub use vehicle::{normalize_plate, CategoryInput, SlotCategory, Vehicle, VehicleCategory};

#[cfg(feature = "emitter")]
pub use events::EmitterSink;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;

/// Timestamp layout used by the text renderings (tickets, receipts).
pub const DISPLAY_TIME_FORMAT: &str = "%d-%b-%Y %H:%M:%S";
