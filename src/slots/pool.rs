use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::Range;

use tracing::debug;

use super::slot::{Availability, ParkingSlot};
use crate::config::Capacity;
use crate::error::ParkingError;
use crate::vehicle::SlotCategory;

/// One category's contiguous run of slot numbers.
#[derive(Debug)]
struct SlotBand {
    category: SlotCategory,
    first: u32,
    slots: Vec<ParkingSlot>,
    free: BinaryHeap<Reverse<u32>>,
}

impl SlotBand {
    fn new(category: SlotCategory, first: u32, count: u32) -> Self {
        let numbers = first..first.saturating_add(count);
        SlotBand {
            category,
            first,
            slots: numbers
                .clone()
                .map(|number| ParkingSlot::new(number, category))
                .collect(),
            free: numbers.map(Reverse).collect(),
        }
    }

    fn numbers(&self) -> Range<u32> {
        self.first..self.first.saturating_add(self.slots.len() as u32)
    }

    fn slot_mut(&mut self, number: u32) -> Option<&mut ParkingSlot> {
        if !self.numbers().contains(&number) {
            return None;
        }
        self.slots.get_mut((number - self.first) as usize)
    }
}

/// Every slot in the lot, with O(log n) acquire/release per category.
#[derive(Debug)]
pub struct SlotPool {
    bands: Vec<SlotBand>,
}

impl SlotPool {
    /// Lay out the bands contiguously from slot 1. Capacities should have
    /// passed `Capacity::validate`; bands past `u32::MAX` are cut short.
    pub fn new(capacity: &Capacity) -> Self {
        let mut next: u32 = 1;
        let bands = SlotCategory::ALL
            .iter()
            .map(|&category| {
                let count = capacity.for_category(category);
                let band = SlotBand::new(category, next, count);
                next = next.saturating_add(count);
                band
            })
            .collect();
        SlotPool { bands }
    }

    fn band(&self, category: SlotCategory) -> &SlotBand {
        &self.bands[band_index(category)]
    }

    fn band_mut(&mut self, category: SlotCategory) -> &mut SlotBand {
        &mut self.bands[band_index(category)]
    }

    /// Take the lowest-numbered free slot of `category` for `plate`.
    pub fn acquire(&mut self, category: SlotCategory, plate: &str) -> Result<u32, ParkingError> {
        let band = self.band_mut(category);
        let Reverse(number) = band
            .free
            .pop()
            .ok_or(ParkingError::CapacityExhausted(category))?;
        if let Some(slot) = band.slot_mut(number) {
            slot.occupy(plate);
        }
        debug!(slot = number, %category, plate, "slot acquired");
        Ok(number)
    }

    /// Return an occupied slot to the free set.
    ///
    /// Fails with `InvalidSlot` when the number is outside the band or the
    /// slot is already free; the pool is left untouched in that case.
    pub fn release(&mut self, category: SlotCategory, number: u32) -> Result<(), ParkingError> {
        let band = self.band_mut(category);
        let slot = band
            .slot_mut(number)
            .filter(|slot| slot.is_occupied())
            .ok_or(ParkingError::InvalidSlot {
                category,
                slot: number,
            })?;
        slot.vacate();
        band.free.push(Reverse(number));
        debug!(slot = number, %category, "slot released");
        Ok(())
    }

    pub fn availability(&self, category: SlotCategory) -> Availability {
        let band = self.band(category);
        Availability {
            category,
            free: band.free.len() as u32,
            total: band.slots.len() as u32,
        }
    }

    /// Slot numbers reserved for `category`.
    pub fn band_range(&self, category: SlotCategory) -> Range<u32> {
        self.band(category).numbers()
    }

    pub fn slots(&self, category: SlotCategory) -> &[ParkingSlot] {
        &self.band(category).slots
    }

    pub fn slot(&self, number: u32) -> Option<&ParkingSlot> {
        self.bands
            .iter()
            .find(|band| band.numbers().contains(&number))
            .and_then(|band| band.slots.get((number - band.first) as usize))
    }

    pub fn occupied(&self) -> u32 {
        self.bands
            .iter()
            .map(|band| (band.slots.len() - band.free.len()) as u32)
            .sum()
    }
}

fn band_index(category: SlotCategory) -> usize {
    match category {
        SlotCategory::Car => 0,
        SlotCategory::Bike => 1,
        SlotCategory::Truck => 2,
    }
}
