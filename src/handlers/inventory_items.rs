// src/handlers/inventory_items.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{PathParam, QueryParams, ValidJson},
        pagination::PageQuery,
        response::{ApiResponse, MessageOnly, DELETED, SAVED, UPDATED},
    },
    config::InventoryState,
    models::inventory::{InventoryItem, InventoryItemDetail, InventoryItemWithRoom, NewInventoryItem},
};

#[utoipa::path(
    get,
    path = "/api/v1/inventory-items",
    tag = "Inventory items",
    params(PageQuery),
    responses(
        (status = 200, body = Vec<InventoryItem>),
        (status = 400, body = MessageOnly)
    )
)]
pub async fn list_items(
    State(state): State<InventoryState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.resolve(state.default_page_size)?;
    let items = state.inventory_service.list_items(page).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/v1/inventory-items",
    tag = "Inventory items",
    request_body = NewInventoryItem,
    responses(
        (status = 201, body = ApiResponse<InventoryItem>),
        (status = 400, description = "Duplicate sign/number", body = MessageOnly),
        (status = 404, description = "Inventory not found", body = MessageOnly)
    )
)]
pub async fn create_item(
    State(state): State<InventoryState>,
    ValidJson(payload): ValidJson<NewInventoryItem>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .inventory_service
        .create_item(&state.db_pool, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(SAVED, item))))
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory-items/{id}",
    tag = "Inventory items",
    params(("id" = i32, Path, description = "Inventory item id")),
    responses(
        (status = 200, body = InventoryItemDetail),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn get_item(
    State(state): State<InventoryState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.inventory_service.get_item(id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    put,
    path = "/api/v1/inventory-items/{id}",
    tag = "Inventory items",
    params(("id" = i32, Path, description = "Inventory item id")),
    request_body = NewInventoryItem,
    responses(
        (status = 200, body = ApiResponse<InventoryItem>),
        (status = 400, body = MessageOnly),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn update_item(
    State(state): State<InventoryState>,
    PathParam(id): PathParam<i32>,
    ValidJson(payload): ValidJson<NewInventoryItem>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .inventory_service
        .update_item(&state.db_pool, id, payload)
        .await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(UPDATED, item))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/inventory-items/{id}",
    tag = "Inventory items",
    params(("id" = i32, Path, description = "Inventory item id")),
    responses(
        (status = 200, body = MessageOnly),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn delete_item(
    State(state): State<InventoryState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.inventory_service.delete_item(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(DELETED, ()))))
}

/// Finds placed items by their human identifier (`A23`) and reports the room
/// and building each one is in.
#[utoipa::path(
    get,
    path = "/api/v1/inventory-items/search-by-sign-number/{signNumber}",
    tag = "Inventory items",
    params(("signNumber" = String, Path, description = "Letters then digits, e.g. A23"), PageQuery),
    responses(
        (status = 200, body = Vec<InventoryItemWithRoom>),
        (status = 400, description = "Malformed identifier or page", body = MessageOnly),
        (status = 404, description = "No placed item, or one of the rooms is gone", body = MessageOnly)
    )
)]
pub async fn search_by_sign_number(
    State(state): State<InventoryState>,
    PathParam(sign_number): PathParam<String>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.resolve(state.default_page_size)?;
    let items = state
        .location_service
        .search_by_sign_number(&sign_number, page)
        .await?;
    Ok(Json(items))
}
