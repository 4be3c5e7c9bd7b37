// src/services/allocation.rs

//! Turns a category-creation request into the list of items to insert.
//!
//! Two mutually exclusive modes:
//! * explicit: the caller lists `(inventoryNumber, buildingId)` pairs;
//! * range: `quantity` (meaning `1..=quantity`) or `startNumber..=endNumber`,
//!   all placed in one `buildingId`.
//!
//! A request carrying neither produces no items. Planning never touches
//! storage, so every rejection here happens before any write. The item count
//! is checked against `max_items` before the plan is materialised.

use crate::{
    common::error::{AppError, QUANTITY_AND_RANGE, REQUIRED_INFO_MISSING},
    models::inventory::{ExplicitItem, NewInventory},
};

pub const LIST_AND_RANGE: &str =
    "You should input either a list of inventory items or a quantity/range, not both";

pub fn too_many_items(max_items: i64) -> String {
    format!("You can't allocate more than {max_items} inventory items at once")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedItem {
    pub inventory_number: i32,
    pub building_id: i32,
}

pub fn plan_allocation(
    request: &NewInventory,
    max_items: i64,
) -> Result<Vec<PlannedItem>, AppError> {
    let wants_range = request.quantity.is_some()
        || request.start_number.is_some()
        || request.end_number.is_some();

    match (request.inventory_items.is_empty(), wants_range) {
        (true, false) => Ok(Vec::new()),
        (false, true) => Err(AppError::Validation(LIST_AND_RANGE.to_string())),
        (false, false) => plan_explicit(&request.inventory_items, max_items),
        (true, true) => plan_range(
            request.quantity,
            request.start_number,
            request.end_number,
            request.building_id,
            max_items,
        ),
    }
}

fn plan_explicit(items: &[ExplicitItem], max_items: i64) -> Result<Vec<PlannedItem>, AppError> {
    if i64::try_from(items.len()).map_or(true, |len| len > max_items) {
        return Err(AppError::Validation(too_many_items(max_items)));
    }

    items
        .iter()
        .map(|item| match (item.inventory_number, item.building_id) {
            (Some(inventory_number), Some(building_id)) => Ok(PlannedItem {
                inventory_number,
                building_id,
            }),
            _ => Err(AppError::Validation(REQUIRED_INFO_MISSING.to_string())),
        })
        .collect()
}

fn plan_range(
    quantity: Option<i32>,
    start_number: Option<i32>,
    end_number: Option<i32>,
    building_id: Option<i32>,
    max_items: i64,
) -> Result<Vec<PlannedItem>, AppError> {
    if quantity.is_some() && (start_number.is_some() || end_number.is_some()) {
        return Err(AppError::Validation(QUANTITY_AND_RANGE.to_string()));
    }

    let start = start_number.unwrap_or(1);
    let end = end_number.or(quantity);

    let (Some(end), Some(building_id)) = (end, building_id) else {
        return Err(AppError::Validation(REQUIRED_INFO_MISSING.to_string()));
    };

    if start > end {
        return Err(AppError::WrongInputRange);
    }

    // Widened so `i32::MIN..=i32::MAX` cannot overflow.
    let count = i64::from(end) - i64::from(start) + 1;
    if count > max_items {
        return Err(AppError::Validation(too_many_items(max_items)));
    }

    Ok((start..=end)
        .map(|inventory_number| PlannedItem {
            inventory_number,
            building_id,
        })
        .collect())
}
