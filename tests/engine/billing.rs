//! Billing through park/exit with a manual clock.

use chrono::Duration;
use parking_engine::{LotConfig, ManualClock, ParkingEngine, Tariff, Tariffs};

use crate::support::{bike, car, engine, opening_time, truck};

#[test]
fn car_for_45_minutes_pays_one_hour() {
    let (engine, clock) = engine(1, 1, 1);
    engine.park(car("C1")).unwrap();
    clock.advance_minutes(45);

    let receipt = engine.exit("C1").unwrap();
    assert_eq!(receipt.duration_minutes, 45);
    assert_eq!(receipt.billed_hours, 1);
    assert_eq!(receipt.charge, 20);
}

#[test]
fn car_for_150_minutes_pays_additional_rate_for_third_hour() {
    let (engine, clock) = engine(1, 1, 1);
    engine.park(car("C1")).unwrap();
    clock.advance_minutes(150);

    assert_eq!(engine.exit("C1").unwrap().charge, 2 * 20 + 10);
}

#[test]
fn heavy_truck_pays_surcharge() {
    let (engine, clock) = engine(1, 1, 2);
    engine.park(truck("T1", 8)).unwrap();
    engine.park(truck("T2", 5)).unwrap();
    clock.advance_minutes(30);

    assert_eq!(engine.exit("T1").unwrap().charge, 50 + 100);
    assert_eq!(engine.exit("T2").unwrap().charge, 50);
}

#[test]
fn one_minute_costs_a_full_hour() {
    let (engine, clock) = engine(1, 1, 1);
    engine.park(bike("B1")).unwrap();
    clock.advance_minutes(1);
    assert_eq!(engine.exit("B1").unwrap().charge, 10);
}

#[test]
fn seconds_past_the_hour_are_not_billed() {
    let (engine, clock) = engine(1, 1, 1);
    engine.park(car("C1")).unwrap();
    clock.advance(Duration::seconds(60 * 60 + 30));

    let receipt = engine.exit("C1").unwrap();
    assert_eq!(receipt.duration_minutes, 60);
    assert_eq!(receipt.charge, 20);
}

#[test]
fn receipt_carries_entry_and_exit_times() {
    let (engine, clock) = engine(1, 1, 1);
    let ticket = engine.park(car("C1")).unwrap();
    clock.advance_minutes(125);

    let receipt = engine.exit("c1").unwrap();
    assert_eq!(receipt.entered_at, opening_time());
    assert_eq!(receipt.exited_at, opening_time() + Duration::minutes(125));
    assert_eq!(receipt.ticket_id, ticket.id);
    assert_eq!(receipt.vehicle_type, "Car (Swift)");

    let rendered = receipt.to_string();
    assert!(rendered.contains("Entry:    01-Mar-2024 09:00:00"));
    assert!(rendered.contains("Exit:     01-Mar-2024 11:05:00"));
    assert!(rendered.contains("CHARGES:  Rs 50"));
}

#[test]
fn configured_tariffs_are_used() {
    let clock = ManualClock::new(opening_time());
    let tariffs = Tariffs {
        car: Tariff::hourly(30, 15),
        ..Tariffs::default()
    };
    let engine = ParkingEngine::new(LotConfig::default().with_tariffs(tariffs))
        .with_clock(clock.clone());

    assert_eq!(engine.tariffs().car, Tariff::hourly(30, 15));
    assert_eq!(engine.tariffs().bike, Tariffs::default().bike);

    engine.park(car("C1")).unwrap();
    clock.advance_minutes(4 * 60);
    assert_eq!(engine.exit("C1").unwrap().charge, 2 * 30 + 2 * 15);
}

#[test]
fn clock_set_before_entry_bills_nothing() {
    let (engine, clock) = engine(1, 1, 1);
    engine.park(car("C1")).unwrap();
    clock.set(opening_time() - Duration::minutes(30));

    let receipt = engine.exit("C1").unwrap();
    assert_eq!(receipt.duration_minutes, 0);
    assert_eq!(receipt.charge, 0);
}

#[test]
fn clock_set_forward_counts_from_entry() {
    let (engine, clock) = engine(1, 1, 1);
    engine.park(bike("B1")).unwrap();
    clock.set(opening_time() + Duration::minutes(181));

    let receipt = engine.exit("B1").unwrap();
    assert_eq!(receipt.duration_minutes, 181);
    assert_eq!(receipt.charge, 2 * 10 + 2 * 5);
}
