//! Pricing and space policy per vehicle category.
//!
//! Fees are charged per started hour. The first `TIERED_HOURS` hours are
//! billed at the base rate, every hour after that at the additional rate.
//! Trucks above the load threshold pay a flat surcharge on top.

use serde::{Deserialize, Serialize};

use crate::vehicle::{SlotCategory, VehicleCategory};

/// Whole currency units.
pub type Amount = u64;

/// Hours billed at the base rate before the additional rate applies.
pub const TIERED_HOURS: u64 = 2;

/// Rate constants for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    pub base_rate: Amount,
    pub additional_rate: Amount,
    /// Flat charge for trucks whose load capacity exceeds `surcharge_above`.
    #[serde(default)]
    pub surcharge: Amount,
    #[serde(default)]
    pub surcharge_above: u32,
}

impl Tariff {
    pub const fn hourly(base_rate: Amount, additional_rate: Amount) -> Self {
        Tariff {
            base_rate,
            additional_rate,
            surcharge: 0,
            surcharge_above: 0,
        }
    }

    pub fn with_surcharge(mut self, surcharge: Amount, above: u32) -> Self {
        self.surcharge = surcharge;
        self.surcharge_above = above;
        self
    }

    /// Time-based part of the fee for `hours` billed hours.
    pub fn time_fee(&self, hours: u64) -> Amount {
        if hours <= TIERED_HOURS {
            hours * self.base_rate
        } else {
            TIERED_HOURS * self.base_rate + (hours - TIERED_HOURS) * self.additional_rate
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariffs {
    pub car: Tariff,
    pub bike: Tariff,
    pub truck: Tariff,
}

impl Default for Tariffs {
    fn default() -> Self {
        Tariffs {
            car: Tariff::hourly(20, 10),
            bike: Tariff::hourly(10, 5),
            truck: Tariff::hourly(50, 30).with_surcharge(100, 5),
        }
    }
}

impl Tariffs {
    pub fn for_category(&self, category: SlotCategory) -> &Tariff {
        match category {
            SlotCategory::Car => &self.car,
            SlotCategory::Bike => &self.bike,
            SlotCategory::Truck => &self.truck,
        }
    }

    /// Fee for a session of `minutes` elapsed minutes.
    pub fn fee(&self, category: &VehicleCategory, minutes: u64) -> Amount {
        let hours = billed_hours(minutes);
        match category {
            VehicleCategory::Car { .. } => self.car.time_fee(hours),
            VehicleCategory::Bike { .. } => self.bike.time_fee(hours),
            VehicleCategory::Truck { load_capacity } => {
                let surcharge = if *load_capacity > self.truck.surcharge_above {
                    self.truck.surcharge
                } else {
                    0
                };
                self.truck.time_fee(hours) + surcharge
            }
        }
    }
}

/// Started hours: `ceil(minutes / 60)`.
pub fn billed_hours(minutes: u64) -> u64 {
    minutes.div_ceil(60)
}

/// Physical bays a vehicle of this category takes up.
pub fn required_slots(category: &VehicleCategory) -> u32 {
    match category {
        VehicleCategory::Car { .. } => 1,
        VehicleCategory::Bike { .. } => 1,
        VehicleCategory::Truck { .. } => 2,
    }
}
