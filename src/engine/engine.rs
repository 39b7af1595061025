use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use super::report::{ParkRequest, Receipt, Statistics, VehicleInfo};
use crate::clock::{elapsed_minutes, Clock, SystemClock};
use crate::config::{Capacity, LotConfig};
use crate::error::ParkingError;
use crate::events::{EntryEvent, EventSink, ExitEvent, ParkingEvent};
use crate::ledger::{HistoryLedger, HistoryRecord};
use crate::policy::{required_slots, Tariffs};
use crate::session::{ParkingSession, SessionRegistry, Ticket, TicketIssuer};
use crate::slots::{Availability, ParkingSlot, SlotPool};
use crate::vehicle::{normalize_plate, SlotCategory, Vehicle, VehicleCategory};

/// Everything `park` and `exit` mutate. Guarded by one mutex so each
/// operation is a single critical section.
struct LotState {
    slots: SlotPool,
    sessions: SessionRegistry,
    ledger: HistoryLedger,
    tickets: TicketIssuer,
    total_processed: u64,
}

/// Orchestrates slot allocation, ticketing, billing and history.
///
/// Callers interact only through the operations below. Events are queued
/// in commit order while the state lock is held and delivered to the
/// registered sinks after it is released, one publisher at a time. Sinks
/// may query the engine but must not call `park` or `exit`.
pub struct ParkingEngine {
    state: Mutex<LotState>,
    pending: Mutex<VecDeque<ParkingEvent>>,
    publishing: Mutex<()>,
    capacity: Capacity,
    tariffs: Tariffs,
    clock: Arc<dyn Clock>,
    sinks: Vec<Arc<dyn EventSink>>,
}

impl ParkingEngine {
    pub fn new(config: LotConfig) -> Self {
        ParkingEngine {
            state: Mutex::new(LotState {
                slots: SlotPool::new(&config.capacity),
                sessions: SessionRegistry::new(),
                ledger: HistoryLedger::new(),
                tickets: TicketIssuer::new(),
                total_processed: 0,
            }),
            pending: Mutex::new(VecDeque::new()),
            publishing: Mutex::new(()),
            capacity: config.capacity,
            tariffs: config.tariffs,
            clock: Arc::new(SystemClock),
            sinks: Vec::new(),
        }
    }

    /// Use `clock` for entry and exit timestamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Register an observer for committed entries and exits.
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn capacity(&self) -> &Capacity {
        &self.capacity
    }

    pub fn tariffs(&self) -> &Tariffs {
        &self.tariffs
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, LotState>, ParkingError> {
        self.state
            .lock()
            .map_err(|_| ParkingError::LockPoisoned(operation))
    }

    /// Park a vehicle in the lowest-numbered free slot of its category.
    ///
    /// Either the slot and the session are both recorded or nothing is:
    /// a full band, a duplicate plate or invalid input leaves the lot as it was.
    pub fn park(&self, request: ParkRequest) -> Result<Ticket, ParkingError> {
        let category = VehicleCategory::try_from(request.category)?;
        let vehicle = Vehicle::new(&request.plate, request.owner, request.phone, category)?;
        let now = self.clock.now();

        let ticket = {
            let mut state = self.lock("park")?;
            if state.sessions.contains(vehicle.plate()) {
                return Err(ParkingError::VehicleAlreadyParked(
                    vehicle.plate().to_string(),
                ));
            }

            let slot_category = vehicle.slot_category();
            let slot = state.slots.acquire(slot_category, vehicle.plate())?;
            let ticket = Ticket {
                id: state.tickets.next_id(),
                plate: vehicle.plate().to_string(),
                slot,
                category: slot_category,
                issued_at: now,
            };
            let session = ParkingSession {
                vehicle: vehicle.clone(),
                ticket: ticket.clone(),
            };
            if let Err(err) = state.sessions.insert(session) {
                state.slots.release(slot_category, slot)?;
                return Err(err);
            }
            state.total_processed += 1;
            self.enqueue(ParkingEvent::Entered(EntryEvent {
                vehicle,
                ticket: ticket.clone(),
            }));
            ticket
        };

        info!(
            plate = %ticket.plate,
            slot = ticket.slot,
            ticket = %ticket.id,
            category = %ticket.category,
            "vehicle parked"
        );
        self.flush_events();
        Ok(ticket)
    }

    /// Close the open session for `plate`, bill it and free its slot.
    pub fn exit(&self, plate: &str) -> Result<Receipt, ParkingError> {
        let plate = normalize_plate(plate);
        let now = self.clock.now();

        let record = {
            let mut state = self.lock("exit")?;
            let session = state
                .sessions
                .get(&plate)
                .cloned()
                .ok_or_else(|| ParkingError::VehicleNotFound(plate.clone()))?;

            let minutes = elapsed_minutes(session.entered_at(), now);
            let charge = self.tariffs.fee(session.vehicle.category(), minutes);
            state
                .slots
                .release(session.vehicle.slot_category(), session.slot())?;
            state.sessions.remove(&plate);
            let record = state.ledger.append(&session, now, minutes, charge);
            self.enqueue(ParkingEvent::Exited(ExitEvent {
                record: record.clone(),
            }));
            record
        };

        info!(
            plate = %record.plate,
            slot = record.slot,
            record = %record.id,
            minutes = record.duration_minutes,
            charge = record.charge,
            "vehicle exited"
        );
        self.flush_events();
        Ok(Receipt::from(&record))
    }

    /// Look up a parked vehicle by plate (case-insensitive).
    pub fn search(&self, plate: &str) -> Result<VehicleInfo, ParkingError> {
        let plate = normalize_plate(plate);
        let now = self.clock.now();
        let state = self.lock("search")?;
        state
            .sessions
            .get(&plate)
            .map(|session| vehicle_info(session, now))
            .ok_or(ParkingError::VehicleNotFound(plate))
    }

    /// Every parked vehicle, ordered by slot number.
    pub fn parked_vehicles(&self) -> Result<Vec<VehicleInfo>, ParkingError> {
        let now = self.clock.now();
        let state = self.lock("parked_vehicles")?;
        let mut parked: Vec<VehicleInfo> = state
            .sessions
            .iter()
            .map(|session| vehicle_info(session, now))
            .collect();
        parked.sort_by_key(|info| info.slot);
        Ok(parked)
    }

    /// The open ticket with id `ticket_id` (case-insensitive).
    pub fn ticket(&self, ticket_id: &str) -> Result<Ticket, ParkingError> {
        let state = self.lock("ticket")?;
        state
            .sessions
            .by_ticket(ticket_id.trim())
            .map(|session| session.ticket.clone())
            .ok_or_else(|| ParkingError::TicketNotFound(ticket_id.to_string()))
    }

    pub fn availability(&self, category: SlotCategory) -> Result<Availability, ParkingError> {
        let state = self.lock("availability")?;
        Ok(state.slots.availability(category))
    }

    pub fn availability_all(&self) -> Result<Vec<Availability>, ParkingError> {
        let state = self.lock("availability")?;
        Ok(SlotCategory::ALL
            .iter()
            .map(|&category| state.slots.availability(category))
            .collect())
    }

    /// Occupancy of every slot in the category band.
    pub fn slots(&self, category: SlotCategory) -> Result<Vec<ParkingSlot>, ParkingError> {
        let state = self.lock("slots")?;
        Ok(state.slots.slots(category).to_vec())
    }

    /// Completed visits in completion order.
    pub fn history(&self) -> Result<Vec<HistoryRecord>, ParkingError> {
        let state = self.lock("history")?;
        Ok(state.ledger.records().to_vec())
    }

    /// The `limit` most recently completed visits, newest first.
    pub fn recent_history(&self, limit: usize) -> Result<Vec<HistoryRecord>, ParkingError> {
        let state = self.lock("history")?;
        Ok(state.ledger.recent(limit))
    }

    pub fn statistics(&self) -> Result<Statistics, ParkingError> {
        let state = self.lock("statistics")?;
        Ok(Statistics {
            currently_parked: state.sessions.len(),
            total_processed: state.total_processed,
            total_revenue: state.ledger.total_revenue(),
            history_count: state.ledger.len(),
        })
    }

    /// Called with the state lock held, so queue order is commit order.
    fn enqueue(&self, event: ParkingEvent) {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(event);
    }

    /// Deliver every queued event. Whoever holds `publishing` drains the
    /// queue, so an event committed later is never delivered first.
    fn flush_events(&self) {
        let _publishing = self.publishing.lock().unwrap_or_else(|e| e.into_inner());
        let events: Vec<ParkingEvent> = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect();
        for event in &events {
            self.publish(event);
        }
    }

    fn publish(&self, event: &ParkingEvent) {
        for sink in &self.sinks {
            if let Err(err) = sink.deliver(event) {
                warn!(
                    event = event.event_type(),
                    plate = event.plate(),
                    error = %err,
                    "event sink failed"
                );
            }
        }
    }
}

fn vehicle_info(session: &ParkingSession, now: chrono::DateTime<chrono::Utc>) -> VehicleInfo {
    VehicleInfo {
        vehicle: session.vehicle.clone(),
        vehicle_type: session.vehicle.category().label(),
        required_slots: required_slots(session.vehicle.category()),
        slot: session.slot(),
        ticket_id: session.ticket.id.clone(),
        entered_at: session.entered_at(),
        parked_minutes: elapsed_minutes(session.entered_at(), now),
    }
}
