// src/services/capacity.rs

//! Area-capacity invariant: the rooms of a building never add up to more than
//! the building's declared area. Equality is allowed.

use crate::common::error::AppError;

/// Rooms supplied together with a new building.
pub fn rooms_fit<I>(building_area: f64, room_areas: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = f64>,
{
    let total: f64 = room_areas.into_iter().sum();
    if total > building_area {
        tracing::warn!(building_area, total, "rooms exceed building area");
        return Err(AppError::Capacity);
    }
    Ok(())
}

/// One room added to a building that may already hold others. `prior_total`
/// is the stored aggregate, `None` when the building has no rooms yet.
pub fn room_fits(building_area: f64, prior_total: Option<f64>, new_room_area: f64) -> Result<(), AppError> {
    rooms_fit(building_area, [prior_total.unwrap_or(0.0), new_room_area])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_within_area_are_accepted() {
        assert!(rooms_fit(1000.0, [400.0, 500.0]).is_ok());
    }

    #[test]
    fn exact_fill_is_accepted() {
        assert!(rooms_fit(1000.0, [400.0, 600.0]).is_ok());
    }

    #[test]
    fn oversized_rooms_are_rejected() {
        // HQ: 1000 m² cannot hold 400 + 700
        assert!(matches!(rooms_fit(1000.0, [400.0, 700.0]), Err(AppError::Capacity)));
    }

    #[test]
    fn no_rooms_always_fit() {
        assert!(rooms_fit(1.0, std::iter::empty()).is_ok());
    }

    #[test]
    fn absent_aggregate_counts_as_zero() {
        assert!(room_fits(50.0, None, 50.0).is_ok());
        assert!(matches!(room_fits(50.0, None, 50.5), Err(AppError::Capacity)));
    }

    #[test]
    fn existing_load_is_added_to_the_new_room() {
        assert!(room_fits(100.0, Some(60.0), 40.0).is_ok());
        assert!(matches!(room_fits(100.0, Some(60.0), 40.1), Err(AppError::Capacity)));
    }
}
