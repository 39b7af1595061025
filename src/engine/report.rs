use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::HistoryRecord;
use crate::policy::{billed_hours, Amount};
use crate::vehicle::{CategoryInput, Vehicle};
use crate::DISPLAY_TIME_FORMAT;

/// Everything needed to park a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkRequest {
    pub plate: String,
    pub owner: String,
    pub phone: String,
    pub category: CategoryInput,
}

impl ParkRequest {
    pub fn new(
        plate: impl Into<String>,
        owner: impl Into<String>,
        phone: impl Into<String>,
        category: CategoryInput,
    ) -> Self {
        ParkRequest {
            plate: plate.into(),
            owner: owner.into(),
            phone: phone.into(),
            category,
        }
    }
}

/// What the driver gets back on exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub record_id: String,
    pub ticket_id: String,
    pub plate: String,
    pub vehicle_type: String,
    pub slot: u32,
    pub entered_at: DateTime<Utc>,
    pub exited_at: DateTime<Utc>,
    pub duration_minutes: u64,
    pub billed_hours: u64,
    pub charge: Amount,
}

impl From<&HistoryRecord> for Receipt {
    fn from(record: &HistoryRecord) -> Self {
        Receipt {
            record_id: record.id.clone(),
            ticket_id: record.ticket_id.clone(),
            plate: record.plate.clone(),
            vehicle_type: record.category_label.clone(),
            slot: record.slot,
            entered_at: record.entered_at,
            exited_at: record.exited_at,
            duration_minutes: record.duration_minutes,
            billed_hours: billed_hours(record.duration_minutes),
            charge: record.charge,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PARKING RECEIPT")?;
        writeln!(f, "Vehicle:  {}", self.plate)?;
        writeln!(f, "Type:     {}", self.vehicle_type)?;
        writeln!(f, "Entry:    {}", self.entered_at.format(DISPLAY_TIME_FORMAT))?;
        writeln!(f, "Exit:     {}", self.exited_at.format(DISPLAY_TIME_FORMAT))?;
        writeln!(f, "Duration: {} minutes", self.duration_minutes)?;
        write!(f, "CHARGES:  Rs {}", self.charge)
    }
}

/// A parked vehicle together with where and since when it is parked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub vehicle: Vehicle,
    pub vehicle_type: String,
    pub required_slots: u32,
    pub slot: u32,
    pub ticket_id: String,
    pub entered_at: DateTime<Utc>,
    pub parked_minutes: u64,
}

impl fmt::Display for VehicleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vehicle Number: {}", self.vehicle.plate())?;
        writeln!(f, "Owner:          {}", self.vehicle.owner())?;
        writeln!(f, "Phone:          {}", self.vehicle.phone())?;
        writeln!(f, "Type:           {}", self.vehicle_type)?;
        writeln!(f, "Slot:           {}", self.slot)?;
        writeln!(
            f,
            "Entry Time:     {}",
            self.entered_at.format(DISPLAY_TIME_FORMAT)
        )?;
        write!(f, "Duration:       {} minutes", self.parked_minutes)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub currently_parked: usize,
    pub total_processed: u64,
    pub total_revenue: Amount,
    pub history_count: usize,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PARKING STATISTICS")?;
        writeln!(f, "Currently Parked: {}", self.currently_parked)?;
        writeln!(f, "Total Processed:  {}", self.total_processed)?;
        writeln!(f, "Total Revenue:    Rs {}", self.total_revenue)?;
        write!(f, "History Records:  {}", self.history_count)
    }
}
