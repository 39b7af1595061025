use std::fmt;

use crate::vehicle::SlotCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    /// The category input did not name a known vehicle category.
    InvalidCategory(String),
    /// The vehicle details were rejected (blank plate).
    InvalidVehicle(String),
    /// No free slot left in the category band.
    CapacityExhausted(SlotCategory),
    /// No open session for the plate.
    VehicleNotFound(String),
    /// The plate already holds an open session.
    VehicleAlreadyParked(String),
    /// No open session carries the ticket id.
    TicketNotFound(String),
    /// The slot is outside the category band or already free.
    InvalidSlot { category: SlotCategory, slot: u32 },
    LockPoisoned(&'static str),
    Config(String),
}

impl fmt::Display for ParkingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkingError::InvalidCategory(input) => {
                write!(f, "invalid vehicle category: {}", input)
            }
            ParkingError::InvalidVehicle(reason) => write!(f, "invalid vehicle: {}", reason),
            ParkingError::CapacityExhausted(category) => {
                write!(f, "no available slots for {}", category)
            }
            ParkingError::VehicleNotFound(plate) => write!(f, "vehicle not found: {}", plate),
            ParkingError::VehicleAlreadyParked(plate) => {
                write!(f, "vehicle already parked: {}", plate)
            }
            ParkingError::TicketNotFound(id) => write!(f, "ticket not found: {}", id),
            ParkingError::InvalidSlot { category, slot } => {
                write!(f, "slot {} is not an occupied {} slot", slot, category)
            }
            ParkingError::LockPoisoned(operation) => {
                write!(f, "parking state lock poisoned during {}", operation)
            }
            ParkingError::Config(message) => write!(f, "configuration error: {}", message),
        }
    }
}

impl std::error::Error for ParkingError {}

impl From<toml::de::Error> for ParkingError {
    fn from(err: toml::de::Error) -> Self {
        ParkingError::Config(err.to_string())
    }
}

impl ParkingError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ParkingError::InvalidCategory(_) => 400,
            ParkingError::InvalidVehicle(_) => 400,
            ParkingError::CapacityExhausted(_) => 409,
            ParkingError::VehicleNotFound(_) => 404,
            ParkingError::VehicleAlreadyParked(_) => 409,
            ParkingError::TicketNotFound(_) => 404,
            ParkingError::InvalidSlot { .. } => 500,
            ParkingError::LockPoisoned(_) => 500,
            ParkingError::Config(_) => 500,
        }
    }
}
