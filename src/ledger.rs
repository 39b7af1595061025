//! Append-only history of completed visits and the revenue they produced.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::policy::Amount;
use crate::session::ParkingSession;
use crate::vehicle::SlotCategory;

const ROW_TIME_FORMAT: &str = "%d-%b %H:%M";

/// Column header matching the `Display` rendering of `HistoryRecord`.
pub const HISTORY_HEADER: &str =
    "RECORD     VEHICLE         TYPE                 ENTRY           EXIT            CHARGES";

/// Immutable snapshot of a closed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub plate: String,
    pub category_label: String,
    pub category: SlotCategory,
    pub slot: u32,
    pub ticket_id: String,
    pub entered_at: DateTime<Utc>,
    pub exited_at: DateTime<Utc>,
    pub duration_minutes: u64,
    pub charge: Amount,
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:<15} {:<20} {:<15} {:<15} Rs {}",
            self.id,
            self.plate,
            self.category_label,
            self.entered_at.format(ROW_TIME_FORMAT).to_string(),
            self.exited_at.format(ROW_TIME_FORMAT).to_string(),
            self.charge
        )
    }
}

#[derive(Debug, Default)]
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
    last_record: u64,
    revenue: Amount,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close `session` into a record. Revenue moves only here.
    pub fn append(
        &mut self,
        session: &ParkingSession,
        exited_at: DateTime<Utc>,
        duration_minutes: u64,
        charge: Amount,
    ) -> HistoryRecord {
        self.last_record += 1;
        let record = HistoryRecord {
            id: format!("REC{}", self.last_record),
            plate: session.vehicle.plate().to_string(),
            category_label: session.vehicle.category().label(),
            category: session.vehicle.slot_category(),
            slot: session.slot(),
            ticket_id: session.ticket.id.clone(),
            entered_at: session.entered_at(),
            exited_at,
            duration_minutes,
            charge,
        };
        self.revenue += charge;
        self.records.push(record.clone());
        record
    }

    /// Records in completion order.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// The last `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<HistoryRecord> {
        self.records.iter().rev().take(limit).cloned().collect()
    }

    pub fn total_revenue(&self) -> Amount {
        self.revenue
    }

    /// Revenue folded over the records; always equals `total_revenue`.
    pub fn recomputed_revenue(&self) -> Amount {
        self.records.iter().map(|record| record.charge).sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
