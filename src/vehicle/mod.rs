//! Vehicles and their categories.
//!
//! `VehicleCategory` is a closed sum type: each variant carries the
//! category-specific details (model string or truck load capacity).
//! `SlotCategory` is the payload-free kind used to pick a slot band.

mod category;
mod vehicle;

pub use category::{CategoryInput, SlotCategory, VehicleCategory};
pub use vehicle::{normalize_plate, Vehicle};
