//! Entry and exit notifications for collaborators outside the engine.
//!
//! After a `park` or `exit` commits, the engine hands the event to every
//! registered `EventSink`. Sinks are observers: a failing sink is logged
//! and ignored, it never undoes or fails the core operation.
//!
//! - `LogSink` writes one line per event through `tracing`, or to a buffer.
//! - `OutboxSink` keeps a record per visit (parked, then completed) and an
//!   append-only log of bitcode-encoded events for shipping elsewhere.
//! - `EmitterSink` (feature `emitter`) re-emits events as JSON on an
//!   in-process `EventEmitter`.

#[cfg(feature = "emitter")]
mod emitter;
mod event;
mod log;
mod outbox;

#[cfg(feature = "emitter")]
pub use emitter::EmitterSink;
pub use event::{EntryEvent, EventSink, ExitEvent, ParkingEvent, SinkError};
pub use log::LogSink;
pub use outbox::{EntryStatus, OutboxRecord, OutboxSink, VisitRecord};
