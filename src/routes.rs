// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    common::error::AppError,
    config::{InventoryState, LedgerState, SpaceState},
    docs::{InventoryApiDoc, LedgerApiDoc, SpaceApiDoc},
    handlers,
    middleware::request_id::request_id,
};

const OPENAPI_JSON: &str = "/api-docs/openapi.json";

async fn health() -> &'static str {
    "OK"
}

async fn unknown_route() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}

// Pieces every service shares: health, swagger, envelope 404, request ids.
fn finish<S>(api: Router<S>, swagger: SwaggerUi, state: S) -> Router
where
    S: Clone + Send + Sync + 'static,
{
    api.route("/api/health", get(health))
        .merge(swagger)
        .fallback(unknown_route)
        .layer(axum_middleware::from_fn(request_id))
        .with_state(state)
}

pub fn space_router(state: SpaceState) -> Router {
    let api = Router::new()
        .route(
            "/api/v1/buildings",
            get(handlers::buildings::list_buildings).post(handlers::buildings::create_building),
        )
        .route(
            "/api/v1/buildings/{id}",
            get(handlers::buildings::get_building)
                .put(handlers::buildings::update_building)
                .delete(handlers::buildings::delete_building),
        )
        .route(
            "/api/v1/buildings/check-if-exist/{id}",
            get(handlers::buildings::check_if_exist),
        )
        .route(
            "/api/v1/rooms",
            get(handlers::rooms::list_rooms).post(handlers::rooms::create_room),
        )
        .route(
            "/api/v1/rooms/{id}",
            get(handlers::rooms::get_room)
                .put(handlers::rooms::update_room)
                .delete(handlers::rooms::delete_room),
        );

    let swagger = SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON, SpaceApiDoc::openapi());
    finish(api, swagger, state)
}

pub fn inventory_router(state: InventoryState) -> Router {
    let api = Router::new()
        .route(
            "/api/v1/inventories",
            get(handlers::inventories::list_inventories)
                .post(handlers::inventories::create_inventory),
        )
        .route(
            "/api/v1/inventories/{id}",
            get(handlers::inventories::get_inventory)
                .put(handlers::inventories::update_inventory)
                .delete(handlers::inventories::delete_inventory),
        )
        .route(
            "/api/v1/inventories/by-room-id/{roomId}",
            get(handlers::inventories::inventories_by_room),
        )
        .route(
            "/api/v1/inventory-items",
            get(handlers::inventory_items::list_items).post(handlers::inventory_items::create_item),
        )
        .route(
            "/api/v1/inventory-items/{id}",
            get(handlers::inventory_items::get_item)
                .put(handlers::inventory_items::update_item)
                .delete(handlers::inventory_items::delete_item),
        )
        .route(
            "/api/v1/inventory-items/search-by-sign-number/{signNumber}",
            get(handlers::inventory_items::search_by_sign_number),
        );

    let swagger = SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON, InventoryApiDoc::openapi());
    finish(api, swagger, state)
}

pub fn ledger_router(state: LedgerState) -> Router {
    let api = Router::new()
        .route(
            "/api/v1/transactions",
            get(handlers::transactions::list_transactions)
                .post(handlers::transactions::record_transfer),
        )
        .route(
            "/api/v1/transactions/{id}",
            get(handlers::transactions::get_transaction)
                .put(handlers::transactions::update_transaction)
                .delete(handlers::transactions::delete_transaction),
        )
        .route(
            "/api/v1/transaction-items",
            get(handlers::transaction_items::list_items)
                .post(handlers::transaction_items::create_item),
        )
        .route(
            "/api/v1/transaction-items/{id}",
            get(handlers::transaction_items::get_item)
                .put(handlers::transaction_items::update_item)
                .delete(handlers::transaction_items::delete_item),
        )
        .route(
            "/api/v1/transaction-items/byHistoryId/{historyId}",
            get(handlers::transaction_items::items_by_history),
        );

    let swagger = SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON, LedgerApiDoc::openapi());
    finish(api, swagger, state)
}
