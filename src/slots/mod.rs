//! Numbered parking slots grouped into per-category bands.
//!
//! Bands are contiguous and disjoint: car slots come first, then bike,
//! then truck. Each band keeps its free slot numbers in a min-heap so the
//! lowest-numbered free slot is always handed out first.

mod pool;
mod slot;

pub use pool::SlotPool;
pub use slot::{Availability, ParkingSlot};
