use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParkingError;

const UNKNOWN_MODEL: &str = "Unknown";

/// The slot band a vehicle is parked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotCategory {
    Car,
    Bike,
    Truck,
}

impl SlotCategory {
    /// All categories in band order.
    pub const ALL: [SlotCategory; 3] = [SlotCategory::Car, SlotCategory::Bike, SlotCategory::Truck];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotCategory::Car => "CAR",
            SlotCategory::Bike => "BIKE",
            SlotCategory::Truck => "TRUCK",
        }
    }
}

impl fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotCategory {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(SlotCategory::Car),
            "bike" => Ok(SlotCategory::Bike),
            "truck" => Ok(SlotCategory::Truck),
            _ => Err(ParkingError::InvalidCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car { model: String },
    Bike { model: String },
    /// Load capacity in tons.
    Truck { load_capacity: u32 },
}

impl VehicleCategory {
    pub fn car(model: impl Into<String>) -> Self {
        VehicleCategory::Car {
            model: model.into(),
        }
    }

    pub fn bike(model: impl Into<String>) -> Self {
        VehicleCategory::Bike {
            model: model.into(),
        }
    }

    pub fn truck(load_capacity: u32) -> Self {
        VehicleCategory::Truck { load_capacity }
    }

    pub fn slot_category(&self) -> SlotCategory {
        match self {
            VehicleCategory::Car { .. } => SlotCategory::Car,
            VehicleCategory::Bike { .. } => SlotCategory::Bike,
            VehicleCategory::Truck { .. } => SlotCategory::Truck,
        }
    }

    /// Human-readable label, e.g. `Car (Swift)` or `Truck (8 tons)`.
    pub fn label(&self) -> String {
        match self {
            VehicleCategory::Car { model } => format!("Car ({})", model),
            VehicleCategory::Bike { model } => format!("Bike ({})", model),
            VehicleCategory::Truck { load_capacity } => format!("Truck ({} tons)", load_capacity),
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Loosely-typed category as it arrives from a caller (form, JSON body).
///
/// Converted into a `VehicleCategory` with `TryFrom`; an unknown `kind` or a
/// truck without a load capacity is an `InvalidCategory` error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub kind: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub load_capacity: Option<u32>,
}

impl CategoryInput {
    pub fn car(model: impl Into<String>) -> Self {
        CategoryInput {
            kind: "car".into(),
            model: Some(model.into()),
            load_capacity: None,
        }
    }

    pub fn bike(model: impl Into<String>) -> Self {
        CategoryInput {
            kind: "bike".into(),
            model: Some(model.into()),
            load_capacity: None,
        }
    }

    pub fn truck(load_capacity: u32) -> Self {
        CategoryInput {
            kind: "truck".into(),
            model: None,
            load_capacity: Some(load_capacity),
        }
    }
}

impl TryFrom<CategoryInput> for VehicleCategory {
    type Error = ParkingError;

    fn try_from(input: CategoryInput) -> Result<Self, Self::Error> {
        let model = input
            .model
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_MODEL.to_string());

        match input.kind.parse::<SlotCategory>()? {
            SlotCategory::Car => Ok(VehicleCategory::Car { model }),
            SlotCategory::Bike => Ok(VehicleCategory::Bike { model }),
            SlotCategory::Truck => match input.load_capacity {
                Some(load_capacity) => Ok(VehicleCategory::Truck { load_capacity }),
                None => Err(ParkingError::InvalidCategory(
                    "truck requires a load capacity".into(),
                )),
            },
        }
    }
}
