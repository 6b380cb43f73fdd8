use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use itinerary_planner::{AppState, ItineraryPlanner};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

fn setup_test_app() -> axum::Router {
    let state = Arc::new(AppState {
        planner: ItineraryPlanner::new(common::get_test_config()),
    });

    itinerary_planner::routes::create_router(state)
}

fn post_itinerary(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/itineraries")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn catalog_json() -> serde_json::Value {
    serde_json::to_value(common::create_test_catalog()).unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = setup_test_app();

    let request = Request::builder()
        .uri("/debug/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["planner"]["travel_model"], "fixed");
    assert_eq!(json["checks"]["planner"]["selection_policy"], "stop");
}

#[tokio::test]
async fn test_presets_endpoint_lists_all_bundles() {
    let app = setup_test_app();

    let request = Request::builder()
        .uri("/presets")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let presets = json.as_array().unwrap();
    assert_eq!(presets.len(), 8);
    assert_eq!(presets[0]["name"], "3h");
    assert_eq!(presets[0]["display_name"], "3 часа");
    assert_eq!(presets[0]["parameters"]["max_duration_minutes"], 180);
}

#[tokio::test]
async fn test_plan_itinerary_with_parameters() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_itinerary(json!({
            "pois": catalog_json(),
            "parameters": {"max_duration_minutes": 120}
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let stops = json["itinerary"]["stops"].as_array().unwrap();
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0]["poi_id"], "museum");
    assert_eq!(json["itinerary"]["total_duration_minutes"], 85);
    assert_eq!(json["summary"]["poi_count"], 2);
    assert!(json["notices"].as_array().unwrap().is_empty());

    assert_eq!(json["path"]["type"], "Feature");
    assert_eq!(json["path"]["geometry"]["type"], "LineString");
    assert_eq!(
        json["path"]["geometry"]["coordinates"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn test_plan_itinerary_reports_notices() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_itinerary(json!({
            "pois": catalog_json(),
            "parameters": {"max_duration_minutes": 120, "interests": ["космос"]}
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert!(json["itinerary"]["stops"].as_array().unwrap().is_empty());
    assert_eq!(json["notices"][0]["kind"], "empty_candidate_pool");
}

#[tokio::test]
async fn test_plan_itinerary_with_preset() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_itinerary(json!({
            "pois": catalog_json(),
            "preset": "shopping"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["itinerary"]["stops"][0]["poi_id"], "market");
}

#[tokio::test]
async fn test_plan_itinerary_validation() {
    let app = setup_test_app();

    // Neither parameters nor preset
    let response = app
        .clone()
        .oneshot(post_itinerary(json!({"pois": []})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Bad Request");

    // Negative distance limit
    let response = app
        .oneshot(post_itinerary(json!({
            "pois": [],
            "parameters": {"max_duration_minutes": 60, "max_distance_km": -1.0}
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_preset_is_not_found() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_itinerary(json!({"pois": [], "preset": "marathon"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["message"], "marathon");
}
