//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use parking_engine::{http, ParkingEngine};
use serde_json::json;

use crate::support::{car, engine};

/// Bind to port 0 and return the actual address.
async fn start_server(engine: Arc<ParkingEngine>) -> String {
    let app = http::router(engine);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn park_body(plate: &str, kind: &str) -> serde_json::Value {
    json!({
        "plate": plate,
        "owner": "Asha Rao",
        "phone": "555-0101",
        "category": { "kind": kind, "model": "Swift" }
    })
}

#[tokio::test]
async fn health_check() {
    let (engine, _clock) = engine(1, 1, 1);
    let base = start_server(Arc::new(engine)).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn park_search_and_exit() {
    let (engine, clock) = engine(2, 1, 1);
    let base = start_server(Arc::new(engine)).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/park"))
        .json(&park_body("ka01ab1234", "car"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let ticket: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(ticket["id"], "TICKET1001");
    assert_eq!(ticket["plate"], "KA01AB1234");
    assert_eq!(ticket["slot"], 1);

    let resp = client
        .get(format!("{base}/vehicles/KA01AB1234"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let info: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(info["vehicle_type"], "Car (Swift)");

    clock.advance_minutes(150);
    let resp = client
        .post(format!("{base}/exit/ka01ab1234"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let receipt: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(receipt["charge"], 50);
    assert_eq!(receipt["record_id"], "REC1");

    let stats: serde_json::Value = client
        .get(format!("{base}/statistics"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["total_revenue"], 50);
    assert_eq!(stats["history_count"], 1);
}

#[tokio::test]
async fn history_limit_returns_newest_first() {
    let (engine, clock) = engine(3, 1, 1);
    let engine = Arc::new(engine);
    for plate in ["C1", "C2", "C3"] {
        engine.park(car(plate)).unwrap();
    }
    for plate in ["C1", "C2", "C3"] {
        clock.advance_minutes(5);
        engine.exit(plate).unwrap();
    }
    let base = start_server(engine).await;
    let client = reqwest::Client::new();

    let recent: serde_json::Value = client
        .get(format!("{base}/history?limit=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let plates: Vec<&str> = recent
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["plate"].as_str().unwrap())
        .collect();
    assert_eq!(plates, vec!["C3", "C2"]);

    let all: serde_json::Value = client
        .get(format!("{base}/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 3);
    assert_eq!(all[0]["plate"], "C1");
}

#[tokio::test]
async fn errors_map_to_status_codes() {
    let (engine, _clock) = engine(1, 1, 1);
    let base = start_server(Arc::new(engine)).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/exit/GHOST"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "vehicle not found: GHOST");

    let resp = client
        .post(format!("{base}/park"))
        .json(&park_body("B1", "boat"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    for (plate, expected) in [("C1", 200), ("C2", 409), ("C1", 409)] {
        let resp = client
            .post(format!("{base}/park"))
            .json(&park_body(plate, "car"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), expected, "parking {}", plate);
    }

    let resp = client
        .get(format!("{base}/availability/plane"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn availability_and_slots() {
    let (engine, _clock) = engine(2, 3, 1);
    let engine = Arc::new(engine);
    let base = start_server(engine.clone()).await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/park"))
        .json(&park_body("BK1", "bike"))
        .send()
        .await
        .unwrap();

    let bikes: serde_json::Value = client
        .get(format!("{base}/availability/BIKE"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(bikes, json!({ "category": "bike", "free": 2, "total": 3 }));

    let all: serde_json::Value = client
        .get(format!("{base}/availability"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 3);

    let slots: serde_json::Value = client
        .get(format!("{base}/slots/bike"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["number"], 3);
    assert_eq!(slots[0]["occupant"], "BK1");
    assert!(slots[1]["occupant"].is_null());

    let resp = client
        .get(format!("{base}/tickets/TICKET1001"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(engine.statistics().unwrap().currently_parked, 1);
}
