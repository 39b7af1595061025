use serde::{Deserialize, Serialize};

use super::category::{SlotCategory, VehicleCategory};
use crate::error::ParkingError;

/// Canonical form of a plate: trimmed and upper-cased.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

/// A vehicle identity. The normalized plate is the unique key.
///
/// Decoding goes through `Vehicle::new`, so a decoded plate is normalized
/// and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VehicleFields")]
pub struct Vehicle {
    plate: String,
    owner: String,
    phone: String,
    category: VehicleCategory,
}

#[derive(Deserialize)]
struct VehicleFields {
    plate: String,
    owner: String,
    phone: String,
    category: VehicleCategory,
}

impl TryFrom<VehicleFields> for Vehicle {
    type Error = ParkingError;

    fn try_from(fields: VehicleFields) -> Result<Self, Self::Error> {
        Vehicle::new(&fields.plate, fields.owner, fields.phone, fields.category)
    }
}

impl Vehicle {
    pub fn new(
        plate: &str,
        owner: impl Into<String>,
        phone: impl Into<String>,
        category: VehicleCategory,
    ) -> Result<Self, ParkingError> {
        let plate = normalize_plate(plate);
        if plate.is_empty() {
            return Err(ParkingError::InvalidVehicle("plate number is empty".into()));
        }
        Ok(Vehicle {
            plate,
            owner: owner.into(),
            phone: phone.into(),
            category,
        })
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn category(&self) -> &VehicleCategory {
        &self.category
    }

    pub fn slot_category(&self) -> SlotCategory {
        self.category.slot_category()
    }
}
