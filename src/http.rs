//! HTTP transport for the parking engine.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /park`: body = `ParkRequest`, returns the `Ticket`.
//! - `POST /exit/:plate`: returns the `Receipt`.
//! - `GET /vehicles`, `GET /vehicles/:plate`: parked vehicles.
//! - `GET /tickets/:id`: an open ticket.
//! - `GET /availability`, `GET /availability/:category`: free/total slots.
//! - `GET /slots/:category`: per-slot occupancy.
//! - `GET /history`: completed visits in completion order.
//! - `GET /history?limit=N`: the `N` most recent visits, newest first.
//! - `GET /statistics`: aggregate counters.
//! - `GET /health`: `{ "ok": true }`.
//!
//! Errors are returned as `{ "error": "<message>" }` with the status from
//! `ParkingError::status_code`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use parking_engine::{http, LotConfig, ParkingEngine};
//!
//! let engine = Arc::new(ParkingEngine::new(LotConfig::default()));
//! http::serve(engine, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::engine::{ParkRequest, ParkingEngine};
use crate::error::ParkingError;
use crate::vehicle::SlotCategory;

/// Build an axum `Router` serving the given engine.
pub fn router(engine: Arc<ParkingEngine>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/park", post(park_handler))
        .route("/exit/:plate", post(exit_handler))
        .route("/vehicles", get(vehicles_handler))
        .route("/vehicles/:plate", get(search_handler))
        .route("/tickets/:id", get(ticket_handler))
        .route("/availability", get(availability_all_handler))
        .route("/availability/:category", get(availability_handler))
        .route("/slots/:category", get(slots_handler))
        .route("/history", get(history_handler))
        .route("/statistics", get(statistics_handler))
        .with_state(engine)
}

/// Serve the engine over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve(engine: Arc<ParkingEngine>, addr: &str) -> Result<(), std::io::Error> {
    let app = router(engine);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

impl IntoResponse for ParkingError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn respond<T: Serialize>(result: Result<T, ParkingError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

async fn park_handler(
    State(engine): State<Arc<ParkingEngine>>,
    Json(request): Json<ParkRequest>,
) -> Response {
    respond(engine.park(request))
}

async fn exit_handler(
    State(engine): State<Arc<ParkingEngine>>,
    Path(plate): Path<String>,
) -> Response {
    respond(engine.exit(&plate))
}

async fn vehicles_handler(State(engine): State<Arc<ParkingEngine>>) -> Response {
    respond(engine.parked_vehicles())
}

async fn search_handler(
    State(engine): State<Arc<ParkingEngine>>,
    Path(plate): Path<String>,
) -> Response {
    respond(engine.search(&plate))
}

async fn ticket_handler(
    State(engine): State<Arc<ParkingEngine>>,
    Path(id): Path<String>,
) -> Response {
    respond(engine.ticket(&id))
}

async fn availability_all_handler(State(engine): State<Arc<ParkingEngine>>) -> Response {
    respond(engine.availability_all())
}

async fn availability_handler(
    State(engine): State<Arc<ParkingEngine>>,
    Path(category): Path<String>,
) -> Response {
    respond(
        category
            .parse::<SlotCategory>()
            .and_then(|category| engine.availability(category)),
    )
}

async fn slots_handler(
    State(engine): State<Arc<ParkingEngine>>,
    Path(category): Path<String>,
) -> Response {
    respond(
        category
            .parse::<SlotCategory>()
            .and_then(|category| engine.slots(category)),
    )
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    limit: Option<usize>,
}

async fn history_handler(
    State(engine): State<Arc<ParkingEngine>>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    match query.limit {
        Some(limit) => respond(engine.recent_history(limit)),
        None => respond(engine.history()),
    }
}

async fn statistics_handler(State(engine): State<Arc<ParkingEngine>>) -> Response {
    respond(engine.statistics())
}
