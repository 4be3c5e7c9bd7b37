// src/handlers/transaction_items.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{PathParam, QueryParams, ValidJson},
        pagination::PageQuery,
        response::{ApiResponse, MessageOnly, DELETED, SAVED, UPDATED},
    },
    config::LedgerState,
    models::transfer::{NewTransactionItem, TransactionItem},
};

#[utoipa::path(
    get,
    path = "/api/v1/transaction-items",
    tag = "Transaction items",
    params(PageQuery),
    responses(
        (status = 200, body = Vec<TransactionItem>),
        (status = 400, body = MessageOnly)
    )
)]
pub async fn list_items(
    State(state): State<LedgerState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.resolve(state.default_page_size)?;
    let items = state.transfer_service.list_items(page).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/v1/transaction-items",
    tag = "Transaction items",
    request_body = NewTransactionItem,
    responses(
        (status = 201, body = ApiResponse<TransactionItem>),
        (status = 400, body = MessageOnly),
        (status = 404, description = "Transaction not found", body = MessageOnly)
    )
)]
pub async fn create_item(
    State(state): State<LedgerState>,
    ValidJson(payload): ValidJson<NewTransactionItem>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .transfer_service
        .create_item(&state.db_pool, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(SAVED, item))))
}

#[utoipa::path(
    get,
    path = "/api/v1/transaction-items/{id}",
    tag = "Transaction items",
    params(("id" = i32, Path, description = "Transaction item id")),
    responses(
        (status = 200, body = TransactionItem),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn get_item(
    State(state): State<LedgerState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.transfer_service.get_item(id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    put,
    path = "/api/v1/transaction-items/{id}",
    tag = "Transaction items",
    params(("id" = i32, Path, description = "Transaction item id")),
    request_body = NewTransactionItem,
    responses(
        (status = 200, body = ApiResponse<TransactionItem>),
        (status = 400, body = MessageOnly),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn update_item(
    State(state): State<LedgerState>,
    PathParam(id): PathParam<i32>,
    ValidJson(payload): ValidJson<NewTransactionItem>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.transfer_service.update_item(id, payload).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(UPDATED, item))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/transaction-items/{id}",
    tag = "Transaction items",
    params(("id" = i32, Path, description = "Transaction item id")),
    responses(
        (status = 200, body = MessageOnly),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn delete_item(
    State(state): State<LedgerState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.transfer_service.delete_item(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(DELETED, ()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/transaction-items/byHistoryId/{historyId}",
    tag = "Transaction items",
    params(("historyId" = i32, Path, description = "Transaction id"), PageQuery),
    responses(
        (status = 200, body = Vec<TransactionItem>),
        (status = 400, body = MessageOnly)
    )
)]
pub async fn items_by_history(
    State(state): State<LedgerState>,
    PathParam(history_id): PathParam<i32>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.resolve(state.default_page_size)?;
    let items = state
        .transfer_service
        .items_of_transaction(&state.db_pool, history_id, page)
        .await?;
    Ok(Json(items))
}
