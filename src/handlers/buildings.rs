// src/handlers/buildings.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{PathParam, QueryParams, ValidJson},
        pagination::PageQuery,
        response::{ApiResponse, MessageOnly, DELETED, SAVED, UPDATED},
    },
    config::SpaceState,
    models::space::{Building, BuildingUpdate, BuildingWithRooms, NewBuilding},
};

#[utoipa::path(
    get,
    path = "/api/v1/buildings",
    tag = "Buildings",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of buildings", body = Vec<Building>),
        (status = 400, description = "Invalid page or size", body = MessageOnly)
    )
)]
pub async fn list_buildings(
    State(state): State<SpaceState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.resolve(state.default_page_size)?;
    let buildings = state.space_service.list_buildings(page).await?;
    Ok(Json(buildings))
}

#[utoipa::path(
    post,
    path = "/api/v1/buildings",
    tag = "Buildings",
    request_body = NewBuilding,
    responses(
        (status = 201, description = "Building and its rooms saved", body = ApiResponse<BuildingWithRooms>),
        (status = 400, description = "Invalid payload, duplicate name or rooms larger than the building", body = MessageOnly)
    )
)]
pub async fn create_building(
    State(state): State<SpaceState>,
    ValidJson(payload): ValidJson<NewBuilding>,
) -> Result<impl IntoResponse, AppError> {
    let saved = state
        .space_service
        .create_building(&state.db_pool, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(SAVED, saved))))
}

#[utoipa::path(
    get,
    path = "/api/v1/buildings/{id}",
    tag = "Buildings",
    params(("id" = i32, Path, description = "Building id")),
    responses(
        (status = 200, body = Building),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn get_building(
    State(state): State<SpaceState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let building = state.space_service.get_building(id).await?;
    Ok(Json(building))
}

#[utoipa::path(
    put,
    path = "/api/v1/buildings/{id}",
    tag = "Buildings",
    params(("id" = i32, Path, description = "Building id")),
    request_body = BuildingUpdate,
    responses(
        (status = 200, body = ApiResponse<Building>),
        (status = 400, description = "Invalid payload, duplicate name or area below the rooms' total", body = MessageOnly),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn update_building(
    State(state): State<SpaceState>,
    PathParam(id): PathParam<i32>,
    ValidJson(payload): ValidJson<BuildingUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let building = state
        .space_service
        .update_building(&state.db_pool, id, payload)
        .await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(UPDATED, building))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/buildings/{id}",
    tag = "Buildings",
    params(("id" = i32, Path, description = "Building id")),
    responses(
        (status = 200, body = MessageOnly),
        (status = 400, description = "Building still has rooms", body = MessageOnly),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn delete_building(
    State(state): State<SpaceState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.space_service.delete_building(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(DELETED, ()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/buildings/check-if-exist/{id}",
    tag = "Buildings",
    params(("id" = i32, Path, description = "Building id")),
    responses(
        (status = 200, description = "The building exists", body = bool),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn check_if_exist(
    State(state): State<SpaceState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let exists = state.space_service.check_if_exist(id).await?;
    Ok(Json(exists))
}
