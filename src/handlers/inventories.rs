// src/handlers/inventories.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{PathParam, QueryParams, ValidJson},
        pagination::PageQuery,
        response::{ApiResponse, MessageOnly, DELETED, SAVED, UPDATED},
    },
    config::InventoryState,
    models::inventory::{
        CategoryAllocation, CategoryCountInRoom, InventoryCategory, InventoryUpdate, NewInventory,
    },
};

#[utoipa::path(
    get,
    path = "/api/v1/inventories",
    tag = "Inventories",
    params(PageQuery),
    responses(
        (status = 200, body = Vec<InventoryCategory>),
        (status = 400, body = MessageOnly)
    )
)]
pub async fn list_inventories(
    State(state): State<InventoryState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.resolve(state.default_page_size)?;
    let categories = state.inventory_service.list_categories(page).await?;
    Ok(Json(categories))
}

/// Creates a category and, in the same step, its numbered items: either an
/// explicit `inventoryItems` list or a `quantity` / `startNumber..endNumber`
/// range placed in `buildingId`.
#[utoipa::path(
    post,
    path = "/api/v1/inventories",
    tag = "Inventories",
    request_body = NewInventory,
    responses(
        (status = 201, body = ApiResponse<CategoryAllocation>),
        (status = 400, description = "Invalid payload or range, missing information, duplicate sign/number", body = MessageOnly)
    )
)]
pub async fn create_inventory(
    State(state): State<InventoryState>,
    ValidJson(payload): ValidJson<NewInventory>,
) -> Result<impl IntoResponse, AppError> {
    let saved = state
        .inventory_service
        .create_category(&state.db_pool, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(SAVED, saved))))
}

#[utoipa::path(
    get,
    path = "/api/v1/inventories/{id}",
    tag = "Inventories",
    params(("id" = i32, Path, description = "Inventory id")),
    responses(
        (status = 200, body = InventoryCategory),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn get_inventory(
    State(state): State<InventoryState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = state
        .inventory_service
        .get_category(&state.db_pool, id)
        .await?;
    Ok(Json(category))
}

#[utoipa::path(
    put,
    path = "/api/v1/inventories/{id}",
    tag = "Inventories",
    params(("id" = i32, Path, description = "Inventory id")),
    request_body = InventoryUpdate,
    responses(
        (status = 200, body = ApiResponse<InventoryCategory>),
        (status = 400, body = MessageOnly),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn update_inventory(
    State(state): State<InventoryState>,
    PathParam(id): PathParam<i32>,
    ValidJson(payload): ValidJson<InventoryUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let category = state
        .inventory_service
        .update_category(&state.db_pool, id, payload)
        .await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(UPDATED, category))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/inventories/{id}",
    tag = "Inventories",
    params(("id" = i32, Path, description = "Inventory id")),
    responses(
        (status = 200, body = MessageOnly),
        (status = 400, description = "Inventory still has items", body = MessageOnly),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn delete_inventory(
    State(state): State<InventoryState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.inventory_service.delete_category(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(DELETED, ()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/inventories/by-room-id/{roomId}",
    tag = "Inventories",
    params(("roomId" = i32, Path, description = "Room id"), PageQuery),
    responses(
        (status = 200, description = "Item count per inventory in the room", body = Vec<CategoryCountInRoom>),
        (status = 400, body = MessageOnly)
    )
)]
pub async fn inventories_by_room(
    State(state): State<InventoryState>,
    PathParam(room_id): PathParam<i32>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.resolve(state.default_page_size)?;
    let counts = state.inventory_service.counts_by_room(room_id, page).await?;
    Ok(Json(counts))
}
