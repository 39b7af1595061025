//! The parking engine: the single owner of slots, sessions and history.
//!
//! ## Example
//!
//! ```
//! use parking_engine::{CategoryInput, LotConfig, ParkRequest, ParkingEngine};
//!
//! let engine = ParkingEngine::new(LotConfig::default());
//! let ticket = engine
//!     .park(ParkRequest::new("ka01ab1234", "Asha", "555-0101", CategoryInput::car("Swift")))
//!     .unwrap();
//! assert_eq!(ticket.slot, 1);
//!
//! let receipt = engine.exit("KA01AB1234").unwrap();
//! assert_eq!(receipt.plate, "KA01AB1234");
//! assert_eq!(engine.statistics().unwrap().history_count, 1);
//! ```

mod engine;
mod report;

pub use engine::ParkingEngine;
pub use report::{ParkRequest, Receipt, Statistics, VehicleInfo};
