//! Router-level tests for the production plan endpoint.
//!
//! The three reference payloads share one fleet and differ in load and wind.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use production_planner::{
    api::{self, error::ErrorResponse, health::HealthResponse, AppState},
    config::Config,
    domain::ProductionPlan,
};
use rstest::rstest;
use serde_json::json;
use tower::ServiceExt;

const PAYLOAD1: &str = include_str!("fixtures/payload1.json");
const PAYLOAD2: &str = include_str!("fixtures/payload2.json");
const PAYLOAD3: &str = include_str!("fixtures/payload3.json");

fn app() -> Router {
    let cfg = Config::default();
    api::router(AppState::new(&cfg), &cfg)
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[rstest]
#[case::wind_sixty_percent(PAYLOAD1, 480.0, [142.4, 0.0, 210.0, 16.0, 90.0, 21.6])]
#[case::no_wind(PAYLOAD2, 480.0, [380.0, 100.0, 0.0, 0.0, 0.0, 0.0])]
#[case::high_load(PAYLOAD3, 910.0, [460.0, 112.4, 210.0, 16.0, 90.0, 21.6])]
#[tokio::test]
async fn test_reference_payloads(#[case] payload: &str, #[case] load: f64, #[case] expected: [f64; 6]) {
    let (status, body) = send(post("/productionplan", payload.to_owned())).await;
    assert_eq!(status, StatusCode::OK);

    let plan: ProductionPlan = serde_json::from_slice(&body).unwrap();
    let names: Vec<_> = plan.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        ["gasfiredbig1", "gasfiredbig2", "gasfiredsomewhatsmaller", "tj1", "windpark1", "windpark2"]
    );
    for (entry, expected) in plan.entries.iter().zip(expected) {
        assert!((entry.p - expected).abs() < 1e-9, "{}: got {}, expected {expected}", entry.name, entry.p);
    }
    assert!((plan.total_power() - load).abs() < 1e-6);
}

#[tokio::test]
async fn test_unknown_path_is_bad_request() {
    let (status, body) = send(post("/plan", PAYLOAD1)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "BadRequest");
    assert!(error.message.contains("/plan"));
}

#[tokio::test]
async fn test_body_that_is_not_json_is_bad_request() {
    let (status, _) = send(post("/productionplan", "{\"load\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_fuel_prices_is_service_unavailable() {
    let mut payload: serde_json::Value = serde_json::from_str(PAYLOAD1).unwrap();
    payload["fuels"].as_object_mut().unwrap().remove("kerosine(euro/MWh)");

    let (status, body) = send(post("/productionplan", payload.to_string())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "ServiceUnavailable");
    assert!(error.message.contains("kerosine"), "{}", error.message);
}

#[tokio::test]
async fn test_unknown_plant_type_is_service_unavailable() {
    let mut payload: serde_json::Value = serde_json::from_str(PAYLOAD1).unwrap();
    payload["powerplants"][0]["type"] = json!("nuclear");

    let (status, _) = send(post("/productionplan", payload.to_string())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_fleet_beyond_exhaustive_limit_is_service_unavailable() {
    let powerplants: Vec<_> = (0..21)
        .map(|i| json!({"name": format!("g{i}"), "type": "gasfired", "efficiency": 0.5, "pmin": 10, "pmax": 20}))
        .collect();
    let payload = json!({
        "load": 5,
        "fuels": {"gas(euro/MWh)": 10, "kerosine(euro/MWh)": 50, "wind(%)": 0},
        "powerplants": powerplants
    });

    let (status, body) = send(post("/productionplan", payload.to_string())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert!(error.message.contains("21 units"), "{}", error.message);
}

#[tokio::test]
async fn test_infeasible_load_still_answers_with_a_plan() {
    let payload = json!({
        "load": 5,
        "fuels": {"gas(euro/MWh)": 10, "kerosine(euro/MWh)": 50, "wind(%)": 0},
        "powerplants": [
            {"name": "g", "type": "gasfired", "efficiency": 0.5, "pmin": 10, "pmax": 20}
        ]
    });

    let (status, body) = send(post("/productionplan", payload.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
        json!([{"name": "g", "p": 20.0}])
    );
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);

    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.max_exhaustive_units, 20);
}
