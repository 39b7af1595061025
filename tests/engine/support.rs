use chrono::{DateTime, TimeZone, Utc};
use parking_engine::{Capacity, CategoryInput, LotConfig, ManualClock, ParkRequest, ParkingEngine};

pub fn opening_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

/// Engine with the given capacity, default tariffs and a manual clock.
pub fn engine(car: u32, bike: u32, truck: u32) -> (ParkingEngine, ManualClock) {
    let clock = ManualClock::new(opening_time());
    let config = LotConfig::default().with_capacity(Capacity::new(car, bike, truck));
    let engine = ParkingEngine::new(config).with_clock(clock.clone());
    (engine, clock)
}

pub fn car(plate: &str) -> ParkRequest {
    ParkRequest::new(plate, "Asha Rao", "555-0101", CategoryInput::car("Swift"))
}

pub fn bike(plate: &str) -> ParkRequest {
    ParkRequest::new(plate, "Vikram Das", "555-0102", CategoryInput::bike("Pulsar"))
}

pub fn truck(plate: &str, load_capacity: u32) -> ParkRequest {
    ParkRequest::new(plate, "Ravi Kumar", "555-0103", CategoryInput::truck(load_capacity))
}
