// src/handlers/rooms.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{PathParam, QueryParams, ValidJson},
        pagination::PageQuery,
        response::{ApiResponse, MessageOnly, DELETED, SAVED, UPDATED},
    },
    config::SpaceState,
    models::space::{NewRoom, Room, RoomDetail},
};

#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    params(PageQuery),
    responses(
        (status = 200, body = Vec<Room>),
        (status = 400, body = MessageOnly)
    )
)]
pub async fn list_rooms(
    State(state): State<SpaceState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.resolve(state.default_page_size)?;
    let rooms = state.space_service.list_rooms(page).await?;
    Ok(Json(rooms))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "Rooms",
    request_body = NewRoom,
    responses(
        (status = 201, body = ApiResponse<Room>),
        (status = 400, description = "Invalid payload, duplicate name or not enough area left", body = MessageOnly),
        (status = 404, description = "Building not found", body = MessageOnly)
    )
)]
pub async fn create_room(
    State(state): State<SpaceState>,
    ValidJson(payload): ValidJson<NewRoom>,
) -> Result<impl IntoResponse, AppError> {
    let room = state.space_service.add_room(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(SAVED, room))))
}

/// The document other services read when they need a room's location.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, body = RoomDetail),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn get_room(
    State(state): State<SpaceState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = state.space_service.get_room(id).await?;
    Ok(Json(room))
}

#[utoipa::path(
    put,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room id")),
    request_body = NewRoom,
    responses(
        (status = 200, body = ApiResponse<Room>),
        (status = 400, body = MessageOnly),
        (status = 404, description = "Room or building not found", body = MessageOnly)
    )
)]
pub async fn update_room(
    State(state): State<SpaceState>,
    PathParam(id): PathParam<i32>,
    ValidJson(payload): ValidJson<NewRoom>,
) -> Result<impl IntoResponse, AppError> {
    let room = state
        .space_service
        .update_room(&state.db_pool, id, payload)
        .await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(UPDATED, room))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, body = MessageOnly),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn delete_room(
    State(state): State<SpaceState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.space_service.delete_room(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(DELETED, ()))))
}
