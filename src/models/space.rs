// src/models/space.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- Buildings ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "HQ")]
    pub name: String,
    #[schema(example = 1000.0)]
    pub area: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildingWithRooms {
    #[serde(flatten)]
    pub building: Building,
    pub rooms: Vec<Room>,
}

// --- Rooms ---
// `building_id` is a reference, not ownership: a room row outlives any in-memory Building.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i32,
    #[schema(example = "Server room")]
    pub name: String,
    #[schema(example = 40.5)]
    pub area: f64,
    #[schema(example = 2)]
    pub floor: Option<i32>,
    pub building_id: i32,
}

/// Room joined with its building's name. This is the document other services
/// fetch from `GET /api/v1/rooms/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetail {
    pub id: i32,
    pub name: String,
    pub area: f64,
    pub floor: Option<i32>,
    pub building_id: i32,
    pub building_name: Option<String>,
}

// --- Payloads ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InlineRoom {
    #[validate(length(min = 1, message = "Room name is required"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Area must be greater than zero"))]
    pub area: f64,

    pub floor: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBuilding {
    #[validate(length(min = 1, message = "Building name is required"))]
    #[schema(example = "HQ")]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Area must be greater than zero"))]
    #[schema(example = 1000.0)]
    pub area: f64,

    /// Rooms created together with the building, checked against its area.
    #[serde(default)]
    #[validate(nested)]
    pub rooms: Vec<InlineRoom>,
}

/// Whole-record replacement of a building's own fields.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildingUpdate {
    #[validate(length(min = 1, message = "Building name is required"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Area must be greater than zero"))]
    pub area: f64,
}

/// Standalone room create, and whole-record room update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    #[validate(length(min = 1, message = "Room name is required"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Area must be greater than zero"))]
    pub area: f64,

    pub floor: Option<i32>,

    pub building_id: i32,
}
