//! Open parking sessions and the tickets that identify them.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParkingError;
use crate::vehicle::{SlotCategory, Vehicle};

/// Ticket numbers start after this value.
pub const FIRST_TICKET_SEED: u64 = 1000;

/// Caller-facing proof of a successful park.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub plate: String,
    pub slot: u32,
    pub category: SlotCategory,
    pub issued_at: DateTime<Utc>,
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PARKING TICKET")?;
        writeln!(f, "Ticket ID:  {}", self.id)?;
        writeln!(f, "Vehicle:    {}", self.plate)?;
        writeln!(f, "Slot:       {} [{}]", self.slot, self.category)?;
        write!(
            f,
            "Entry Time: {}",
            self.issued_at.format(crate::DISPLAY_TIME_FORMAT)
        )
    }
}

/// Monotonic ticket id source, owned by the engine state.
#[derive(Debug, Clone)]
pub struct TicketIssuer {
    last: u64,
}

impl TicketIssuer {
    pub fn new() -> Self {
        TicketIssuer {
            last: FIRST_TICKET_SEED,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.last += 1;
        format!("TICKET{}", self.last)
    }
}

impl Default for TicketIssuer {
    fn default() -> Self {
        Self::new()
    }
}

/// A vehicle bound to one slot between entry and exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSession {
    pub vehicle: Vehicle,
    pub ticket: Ticket,
}

impl ParkingSession {
    pub fn slot(&self) -> u32 {
        self.ticket.slot
    }

    pub fn entered_at(&self) -> DateTime<Utc> {
        self.ticket.issued_at
    }
}

/// Open sessions keyed by normalized plate.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, ParkingSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, plate: &str) -> bool {
        self.sessions.contains_key(plate)
    }

    /// Register a session. A plate may hold only one open session.
    pub fn insert(&mut self, session: ParkingSession) -> Result<(), ParkingError> {
        let plate = session.vehicle.plate().to_string();
        if self.sessions.contains_key(&plate) {
            return Err(ParkingError::VehicleAlreadyParked(plate));
        }
        self.sessions.insert(plate, session);
        Ok(())
    }

    pub fn remove(&mut self, plate: &str) -> Option<ParkingSession> {
        self.sessions.remove(plate)
    }

    pub fn get(&self, plate: &str) -> Option<&ParkingSession> {
        self.sessions.get(plate)
    }

    pub fn by_ticket(&self, ticket_id: &str) -> Option<&ParkingSession> {
        self.sessions
            .values()
            .find(|session| session.ticket.id.eq_ignore_ascii_case(ticket_id))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParkingSession> {
        self.sessions.values()
    }
}
