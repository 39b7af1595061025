//! Slot allocation: lowest-free-first, band separation, capacity.

use parking_engine::{ParkingError, SlotCategory};

use crate::support::{bike, car, engine, truck};

// ============================================================================
// Lowest-numbered free slot is always chosen
// ============================================================================

#[test]
fn slots_are_assigned_lowest_first_per_band() {
    let (engine, _clock) = engine(3, 2, 2);

    assert_eq!(engine.park(car("C1")).unwrap().slot, 1);
    assert_eq!(engine.park(bike("B1")).unwrap().slot, 4);
    assert_eq!(engine.park(car("C2")).unwrap().slot, 2);
    assert_eq!(engine.park(truck("T1", 3)).unwrap().slot, 6);
    assert_eq!(engine.park(bike("B2")).unwrap().slot, 5);
}

// ============================================================================
// Capacity exhaustion and reuse of the freed slot
// ============================================================================

#[test]
fn full_band_rejects_then_reuses_lowest_freed_slot() {
    let (engine, _clock) = engine(3, 1, 1);
    for plate in ["C1", "C2", "C3"] {
        engine.park(car(plate)).unwrap();
    }

    let err = engine.park(car("C4")).unwrap_err();
    assert_eq!(err, ParkingError::CapacityExhausted(SlotCategory::Car));
    assert!(engine.search("C4").is_err());

    engine.exit("C3").unwrap();
    engine.exit("C2").unwrap();

    // Slot 2 is lower than 3, so it goes first.
    assert_eq!(engine.park(car("C4")).unwrap().slot, 2);
    assert_eq!(engine.park(car("C5")).unwrap().slot, 3);
    assert!(matches!(
        engine.park(car("C6")),
        Err(ParkingError::CapacityExhausted(SlotCategory::Car))
    ));
}

#[test]
fn exhausting_one_band_leaves_others_available() {
    let (engine, _clock) = engine(1, 1, 1);
    engine.park(car("C1")).unwrap();
    assert!(engine.park(car("C2")).is_err());

    assert_eq!(engine.park(bike("B1")).unwrap().slot, 2);
    assert_eq!(engine.park(truck("T1", 10)).unwrap().slot, 3);
}

#[test]
fn freed_slot_can_go_to_a_different_vehicle() {
    let (engine, _clock) = engine(1, 0, 0);
    engine.park(car("FIRST")).unwrap();
    engine.exit("first").unwrap();

    let ticket = engine.park(car("SECOND")).unwrap();
    assert_eq!(ticket.slot, 1);

    let slots = engine.slots(SlotCategory::Car).unwrap();
    assert_eq!(slots[0].occupant(), Some("SECOND"));
}

// ============================================================================
// Availability and slot listings
// ============================================================================

#[test]
fn availability_tracks_park_and_exit() {
    let (engine, _clock) = engine(2, 3, 1);
    assert_eq!(engine.capacity().bike, 3);
    assert_eq!(engine.capacity().total(), 6);
    engine.park(bike("B1")).unwrap();
    engine.park(bike("B2")).unwrap();

    let bikes = engine.availability(SlotCategory::Bike).unwrap();
    assert_eq!((bikes.free, bikes.total), (1, 3));

    engine.exit("B1").unwrap();
    let bikes = engine.availability(SlotCategory::Bike).unwrap();
    assert_eq!((bikes.free, bikes.total), (2, 3));

    let all = engine.availability_all().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].category, SlotCategory::Car);
    assert_eq!(all[0].free, 2);
    assert_eq!(all[2].total, 1);
}

#[test]
fn slot_listing_shows_occupants() {
    let (engine, _clock) = engine(2, 1, 1);
    engine.park(car("ka01ab1234")).unwrap();

    let slots = engine.slots(SlotCategory::Car).unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].to_string(), "Slot 1 [CAR] - OCCUPIED by KA01AB1234");
    assert_eq!(slots[1].to_string(), "Slot 2 [CAR] - AVAILABLE");
}

#[test]
fn parked_vehicles_are_ordered_by_slot() {
    let (engine, _clock) = engine(3, 2, 1);
    engine.park(truck("T1", 4)).unwrap();
    engine.park(car("C1")).unwrap();
    engine.park(bike("B1")).unwrap();

    let slots: Vec<u32> = engine
        .parked_vehicles()
        .unwrap()
        .iter()
        .map(|info| info.slot)
        .collect();
    assert_eq!(slots, vec![1, 4, 6]);
}

// ============================================================================
// Double park and unknown plates
// ============================================================================

#[test]
fn double_park_keeps_the_first_session() {
    let (engine, _clock) = engine(2, 1, 1);
    let first = engine.park(car("KA01")).unwrap();

    assert_eq!(
        engine.park(car(" ka01 ")),
        Err(ParkingError::VehicleAlreadyParked("KA01".into()))
    );

    let info = engine.search("KA01").unwrap();
    assert_eq!(info.ticket_id, first.id);
    assert_eq!(engine.availability(SlotCategory::Car).unwrap().free, 1);
}

#[test]
fn blank_plate_is_rejected() {
    let (engine, _clock) = engine(1, 1, 1);
    assert!(matches!(
        engine.park(car("   ")),
        Err(ParkingError::InvalidVehicle(_))
    ));
    assert_eq!(engine.availability(SlotCategory::Car).unwrap().free, 1);
}
