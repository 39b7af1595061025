use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vehicle::SlotCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSlot {
    number: u32,
    category: SlotCategory,
    occupant: Option<String>,
}

impl ParkingSlot {
    pub(crate) fn new(number: u32, category: SlotCategory) -> Self {
        ParkingSlot {
            number,
            category,
            occupant: None,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn category(&self) -> SlotCategory {
        self.category
    }

    /// Plate of the vehicle in the slot, if any.
    pub fn occupant(&self) -> Option<&str> {
        self.occupant.as_deref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub(crate) fn occupy(&mut self, plate: &str) {
        self.occupant = Some(plate.to_string());
    }

    pub(crate) fn vacate(&mut self) {
        self.occupant = None;
    }
}

impl fmt::Display for ParkingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.occupant {
            Some(plate) => write!(
                f,
                "Slot {} [{}] - OCCUPIED by {}",
                self.number, self.category, plate
            ),
            None => write!(f, "Slot {} [{}] - AVAILABLE", self.number, self.category),
        }
    }
}

/// Free and total slot counts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub category: SlotCategory,
    pub free: u32,
    pub total: u32,
}

impl Availability {
    pub fn occupied(&self) -> u32 {
        self.total - self.free
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} slots: {} / {}", self.category, self.free, self.total)
    }
}
