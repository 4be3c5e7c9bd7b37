mod common;

use asset_registry::{config::SpaceState, routes::space_router};
use axum::{http::StatusCode, Router};
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, get, json_request, lazy_pool};

fn app() -> Router {
    space_router(SpaceState::new(lazy_pool(), 10))
}

#[tokio::test]
async fn health_answers_ok() {
    let response = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn rooms_larger_than_the_building_are_rejected() {
    let payload = json!({
        "name": "HQ",
        "area": 1000.0,
        "rooms": [
            { "name": "North wing", "area": 400.0, "floor": 1 },
            { "name": "South wing", "area": 700.0, "floor": 1 }
        ]
    });

    let response = app()
        .oneshot(json_request("POST", "/api/v1/buildings", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "success": false,
            "message": "Building's area is not enough for the rooms",
            "data": null
        })
    );
}

#[tokio::test]
async fn non_positive_area_is_malformed() {
    let payload = json!({ "name": "Shed", "area": 0.0 });

    let response = app()
        .oneshot(json_request("POST", "/api/v1/buildings", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid payload: area: Area must be greater than zero"));
}

#[tokio::test]
async fn inline_room_with_negative_area_is_malformed() {
    let payload = json!({
        "name": "HQ",
        "area": 100.0,
        "rooms": [{ "name": "Closet", "area": -2.0 }]
    });

    let response = app()
        .oneshot(json_request("POST", "/api/v1/buildings", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        json!("Invalid payload: rooms[0].area: Area must be greater than zero")
    );
}

#[tokio::test]
async fn page_zero_is_rejected() {
    let response = app()
        .oneshot(get("/api/v1/buildings?page=0&size=5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Page and size should not be less than 1"));
    assert_eq!(body["data"], json!(null));
}

#[tokio::test]
async fn non_numeric_id_gets_the_envelope() {
    let response = app().oneshot(get("/api/v1/rooms/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], json!(false));
}

#[tokio::test]
async fn malformed_json_gets_the_envelope() {
    let response = app()
        .oneshot(json_request("POST", "/api/v1/rooms", json!({ "name": "Lab" })))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(body_json(response).await["success"], json!(false));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = app().oneshot(get("/api/v1/floors")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], json!("Resource not found"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let response = app().oneshot(get("/api-docs/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/api/v1/buildings"].is_object());
}
