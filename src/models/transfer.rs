// src/models/transfer.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- Header ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistory {
    pub id: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub from_building_id: i32,
    pub to_building_id: i32,
}

// --- Lines ---
// Quantity of one category moved; does not reference individual inventory items.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItem {
    pub id: i32,
    pub transaction_history_id: i32,
    pub inventory_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    #[serde(flatten)]
    pub transaction: TransactionHistory,
    pub items: Vec<TransactionItem>,
}

// --- Payloads ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferLine {
    #[schema(example = 5)]
    pub inventory_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 3)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTransfer {
    pub from_building_id: i32,
    pub to_building_id: i32,
    pub description: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub inventories: Vec<TransferLine>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub from_building_id: i32,
    pub to_building_id: i32,
    pub description: Option<String>,
}

/// Standalone line create.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionItem {
    pub transaction_history_id: i32,
    pub inventory_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}
