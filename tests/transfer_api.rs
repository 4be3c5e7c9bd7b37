mod common;

use asset_registry::{config::LedgerState, routes::ledger_router};
use axum::{http::StatusCode, Router};
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, get, json_request, lazy_pool};

fn app() -> Router {
    ledger_router(LedgerState::new(lazy_pool(), 10))
}

#[tokio::test]
async fn zero_quantity_line_is_rejected() {
    let payload = json!({
        "fromBuildingId": 1,
        "toBuildingId": 2,
        "description": "Move chairs",
        "inventories": [
            { "inventoryId": 5, "quantity": 3 },
            { "inventoryId": 6, "quantity": 0 }
        ]
    });

    let response = app()
        .oneshot(json_request("POST", "/api/v1/transactions", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "success": false,
            "message": "Invalid payload: inventories[1].quantity: Quantity must be at least 1",
            "data": null
        })
    );
}

#[tokio::test]
async fn standalone_line_needs_a_positive_quantity() {
    let payload = json!({ "transactionHistoryId": 1, "inventoryId": 5, "quantity": -1 });

    let response = app()
        .oneshot(json_request("POST", "/api/v1/transaction-items", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn history_lines_reject_bad_paging() {
    let response = app()
        .oneshot(get("/api/v1/transaction-items/byHistoryId/1?page=-3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn request_id_is_echoed() {
    let id = "6f1c1c9e-2b39-4d8f-9a59-0a5f8f4f4d11";
    let request = axum::http::Request::builder()
        .uri("/api/health")
        .header("x-request-id", id)
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], id);
}
