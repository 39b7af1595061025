use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::{EntryEvent, EventSink, ExitEvent, ParkingEvent, SinkError};
use crate::policy::Amount;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum EntryStatus {
    Parked,
    Completed,
}

/// One visit as a storage collaborator would persist it: inserted on entry,
/// completed in place on exit.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct VisitRecord {
    pub plate: String,
    pub owner: String,
    pub phone: String,
    pub vehicle_type: String,
    pub slot: u32,
    pub entered_at: DateTime<Utc>,
    pub exited_at: Option<DateTime<Utc>>,
    pub charge: Option<Amount>,
    pub status: EntryStatus,
}

/// An encoded event waiting to be shipped to external storage.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct OutboxRecord {
    pub id: u64,
    pub event_type: String,
    pub plate: String,
    pub payload: Vec<u8>,
    pub occurred_at: DateTime<Utc>,
}

impl OutboxRecord {
    pub fn decode(&self) -> Result<ParkingEvent, SinkError> {
        bitcode::deserialize(&self.payload).map_err(|e| SinkError::Decode(e.to_string()))
    }
}

/// In-memory persistence side-channel.
pub struct OutboxSink {
    visits: Mutex<Vec<VisitRecord>>,
    outbox: Mutex<Vec<OutboxRecord>>,
    outbox_seq: AtomicU64,
}

impl Default for OutboxSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutboxSink {
    pub fn new() -> Self {
        OutboxSink {
            visits: Mutex::new(Vec::new()),
            outbox: Mutex::new(Vec::new()),
            outbox_seq: AtomicU64::new(1),
        }
    }

    pub fn visits(&self) -> Result<Vec<VisitRecord>, SinkError> {
        let visits = self.visits.lock().map_err(|_| SinkError::BufferPoisoned)?;
        Ok(visits.clone())
    }

    /// The `limit` most recent visits by entry time, newest first.
    pub fn recent_visits(&self, limit: usize) -> Result<Vec<VisitRecord>, SinkError> {
        let mut visits = self.visits()?;
        visits.sort_by(|a, b| b.entered_at.cmp(&a.entered_at));
        visits.truncate(limit);
        Ok(visits)
    }

    pub fn peek_outbox(&self) -> Result<Vec<OutboxRecord>, SinkError> {
        let outbox = self.outbox.lock().map_err(|_| SinkError::BufferPoisoned)?;
        Ok(outbox.clone())
    }

    /// Remove and return every pending outbox record, oldest first.
    pub fn take_outbox(&self) -> Result<Vec<OutboxRecord>, SinkError> {
        let mut outbox = self.outbox.lock().map_err(|_| SinkError::BufferPoisoned)?;
        Ok(std::mem::take(&mut *outbox))
    }

    fn append_outbox(&self, event: &ParkingEvent, occurred_at: DateTime<Utc>) -> Result<(), SinkError> {
        let payload = bitcode::serialize(event).map_err(|e| SinkError::Encode(e.to_string()))?;
        let mut outbox = self.outbox.lock().map_err(|_| SinkError::BufferPoisoned)?;
        outbox.push(OutboxRecord {
            id: self.outbox_seq.fetch_add(1, Ordering::Relaxed),
            event_type: event.event_type().to_string(),
            plate: event.plate().to_string(),
            payload,
            occurred_at,
        });
        Ok(())
    }
}

impl EventSink for OutboxSink {
    fn on_entry(&self, event: &EntryEvent) -> Result<(), SinkError> {
        {
            let mut visits = self.visits.lock().map_err(|_| SinkError::BufferPoisoned)?;
            visits.push(VisitRecord {
                plate: event.vehicle.plate().to_string(),
                owner: event.vehicle.owner().to_string(),
                phone: event.vehicle.phone().to_string(),
                vehicle_type: event.vehicle.category().label(),
                slot: event.ticket.slot,
                entered_at: event.ticket.issued_at,
                exited_at: None,
                charge: None,
                status: EntryStatus::Parked,
            });
        }
        self.append_outbox(&ParkingEvent::Entered(event.clone()), event.ticket.issued_at)
    }

    fn on_exit(&self, event: &ExitEvent) -> Result<(), SinkError> {
        let record = &event.record;
        {
            let mut visits = self.visits.lock().map_err(|_| SinkError::BufferPoisoned)?;
            if let Some(visit) = visits
                .iter_mut()
                .find(|visit| visit.plate == record.plate && visit.status == EntryStatus::Parked)
            {
                visit.exited_at = Some(record.exited_at);
                visit.charge = Some(record.charge);
                visit.status = EntryStatus::Completed;
            }
        }
        self.append_outbox(&ParkingEvent::Exited(event.clone()), record.exited_at)
    }
}
