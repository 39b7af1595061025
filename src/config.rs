//! Lot configuration: slot capacity per category and tariffs.
//!
//! Loaded from TOML; every field is optional and falls back to the
//! defaults below.
//!
//! ```toml
//! [capacity]
//! car = 50
//! bike = 100
//! truck = 20
//!
//! [tariffs.truck]
//! base_rate = 50
//! additional_rate = 30
//! surcharge = 100
//! surcharge_above = 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ParkingError;
use crate::policy::Tariffs;
use crate::vehicle::SlotCategory;

/// Number of slots per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capacity {
    pub car: u32,
    pub bike: u32,
    pub truck: u32,
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity {
            car: 50,
            bike: 100,
            truck: 20,
        }
    }
}

impl Capacity {
    pub fn new(car: u32, bike: u32, truck: u32) -> Self {
        Capacity { car, bike, truck }
    }

    pub fn for_category(&self, category: SlotCategory) -> u32 {
        match category {
            SlotCategory::Car => self.car,
            SlotCategory::Bike => self.bike,
            SlotCategory::Truck => self.truck,
        }
    }

    pub fn total(&self) -> u32 {
        self.car
            .saturating_add(self.bike)
            .saturating_add(self.truck)
    }

    /// Slot numbers run from 1 through the sum of all bands, which must fit
    /// in a `u32`.
    pub fn validate(&self) -> Result<(), ParkingError> {
        SlotCategory::ALL
            .iter()
            .try_fold(1u32, |next, &category| {
                next.checked_add(self.for_category(category))
            })
            .map(|_| ())
            .ok_or_else(|| {
                ParkingError::Config(format!(
                    "capacity {} + {} + {} exceeds the slot number range",
                    self.car, self.bike, self.truck
                ))
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    pub capacity: Capacity,
    pub tariffs: Tariffs,
}

impl LotConfig {
    pub fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_tariffs(mut self, tariffs: Tariffs) -> Self {
        self.tariffs = tariffs;
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ParkingError> {
        let config: LotConfig = toml::from_str(source)?;
        config.capacity.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParkingError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ParkingError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }
}
