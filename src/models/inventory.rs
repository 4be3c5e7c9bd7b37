// src/models/inventory.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- Categories ("Inventory") ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryCategory {
    pub id: i32,
    #[schema(example = "Office chair")]
    pub name: String,
    pub description: Option<String>,
    /// Prefix of the human identifier, e.g. `A` in `A23`.
    #[schema(example = "A")]
    pub inventory_sign: String,
}

// --- Individually numbered items ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: i32,
    pub inventory_id: i32,
    pub inventory_sign: String,
    pub inventory_number: i32,
    pub room_id: Option<i32>,
    pub building_id: Option<i32>,
}

/// Item joined with its category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDetail {
    pub id: i32,
    pub inventory_id: i32,
    pub inventory_number: i32,
    pub room_id: Option<i32>,
    pub building_id: Option<i32>,
    pub inventory_name: String,
}

/// Item plus the room/building it currently sits in, as reported by the Space Registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemWithRoom {
    pub id: i32,
    pub inventory_id: i32,
    pub inventory_number: i32,
    pub inventory_name: String,
    pub room_id: i32,
    pub room_name: String,
    pub area: f64,
    pub floor: Option<i32>,
    pub building_id: i32,
    pub building_name: Option<String>,
}

/// How many items of one category sit in a room.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCountInRoom {
    pub id: i32,
    pub name: String,
    pub inventory_sign: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAllocation {
    #[serde(flatten)]
    pub inventory: InventoryCategory,
    pub items: Vec<InventoryItem>,
}

// --- Payloads ---

/// One entry of an explicit allocation list. Both fields are required; they are
/// optional here so a missing one is reported as "required information missing".
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplicitItem {
    pub inventory_number: Option<i32>,
    pub building_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewInventory {
    #[validate(length(min = 1, message = "Inventory name is required"))]
    #[schema(example = "Office chair")]
    pub name: String,

    pub description: Option<String>,

    #[validate(
        length(min = 1, max = 10, message = "Sign must be 1 to 10 letters"),
        custom(function = "validate_sign")
    )]
    #[schema(example = "A")]
    pub inventory_sign: String,

    /// Mode A: explicit (number, building) pairs.
    #[serde(default)]
    pub inventory_items: Vec<ExplicitItem>,

    /// Mode B: shorthand for `1..=quantity`.
    #[schema(example = 5)]
    pub quantity: Option<i32>,

    #[serde(alias = "startNumberOfInventoryItem")]
    pub start_number: Option<i32>,

    #[serde(alias = "endNumberOfInventoryItem")]
    pub end_number: Option<i32>,

    /// Building every range-generated item is placed in.
    #[schema(example = 1)]
    pub building_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUpdate {
    #[validate(length(min = 1, message = "Inventory name is required"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(
        length(min = 1, max = 10, message = "Sign must be 1 to 10 letters"),
        custom(function = "validate_sign")
    )]
    pub inventory_sign: String,
}

/// Standalone item create, and whole-record item update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub inventory_id: i32,
    pub inventory_number: i32,
    pub room_id: Option<i32>,
    pub building_id: Option<i32>,
}

fn validate_sign(sign: &str) -> Result<(), validator::ValidationError> {
    if sign.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(());
    }
    let mut err = validator::ValidationError::new("alphabetic");
    err.message = Some("Sign must contain letters only".into());
    Err(err)
}
