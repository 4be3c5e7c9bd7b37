// src/handlers/transactions.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{PathParam, QueryParams, ValidJson},
        pagination::PageQuery,
        response::{ApiResponse, MessageOnly, DELETED, UPDATED},
    },
    config::LedgerState,
    models::transfer::{NewTransfer, TransactionHistory, TransactionUpdate, TransferRecord},
};

pub const TRANSACTION_SAVED: &str = "Transaction saved";

#[utoipa::path(
    get,
    path = "/api/v1/transactions",
    tag = "Transactions",
    params(PageQuery),
    responses(
        (status = 200, body = Vec<TransactionHistory>),
        (status = 400, body = MessageOnly)
    )
)]
pub async fn list_transactions(
    State(state): State<LedgerState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.resolve(state.default_page_size)?;
    let transactions = state.transfer_service.list_transactions(page).await?;
    Ok(Json(transactions))
}

/// Records a transfer between two buildings: one header plus one line per
/// entry of `inventories`, written together.
#[utoipa::path(
    post,
    path = "/api/v1/transactions",
    tag = "Transactions",
    request_body = NewTransfer,
    responses(
        (status = 201, body = ApiResponse<TransferRecord>),
        (status = 400, body = MessageOnly)
    )
)]
pub async fn record_transfer(
    State(state): State<LedgerState>,
    ValidJson(payload): ValidJson<NewTransfer>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .transfer_service
        .record_transfer(&state.db_pool, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(TRANSACTION_SAVED, record))))
}

#[utoipa::path(
    get,
    path = "/api/v1/transactions/{id}",
    tag = "Transactions",
    params(("id" = i32, Path, description = "Transaction id")),
    responses(
        (status = 200, body = TransferRecord),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn get_transaction(
    State(state): State<LedgerState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .transfer_service
        .get_transaction(&state.db_pool, id)
        .await?;
    Ok(Json(record))
}

#[utoipa::path(
    put,
    path = "/api/v1/transactions/{id}",
    tag = "Transactions",
    params(("id" = i32, Path, description = "Transaction id")),
    request_body = TransactionUpdate,
    responses(
        (status = 200, body = ApiResponse<TransactionHistory>),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn update_transaction(
    State(state): State<LedgerState>,
    PathParam(id): PathParam<i32>,
    ValidJson(payload): ValidJson<TransactionUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = state
        .transfer_service
        .update_transaction(&state.db_pool, id, payload)
        .await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(UPDATED, transaction))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/transactions/{id}",
    tag = "Transactions",
    params(("id" = i32, Path, description = "Transaction id")),
    responses(
        (status = 200, body = MessageOnly),
        (status = 400, description = "Transaction still has items", body = MessageOnly),
        (status = 404, body = MessageOnly)
    )
)]
pub async fn delete_transaction(
    State(state): State<LedgerState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.transfer_service.delete_transaction(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(DELETED, ()))))
}
