// src/services/location_service.rs

//! Answers "where is item A23?": local lookup by sign and number, then each
//! hit is completed with the room it sits in, fetched from the Space Registry.

use std::sync::Arc;

use crate::{
    clients::RoomDirectory,
    common::{error::AppError, pagination::Page},
    db::InventoryRepository,
    models::inventory::{InventoryItemDetail, InventoryItemWithRoom},
    services::identifier::SignNumber,
};

pub const NO_LOCATED_ITEM: &str = "Inventory item with room not found";

#[derive(Clone)]
pub struct LocationService {
    repo: InventoryRepository,
    rooms: Arc<dyn RoomDirectory>,
}

impl LocationService {
    pub fn new(repo: InventoryRepository, rooms: Arc<dyn RoomDirectory>) -> Self {
        Self { repo, rooms }
    }

    pub async fn search_by_sign_number(
        &self,
        raw: &str,
        page: Page,
    ) -> Result<Vec<InventoryItemWithRoom>, AppError> {
        let SignNumber { sign, number } = raw.parse()?;

        let items = self.repo.find_located_items(&sign, number, page).await?;
        if items.is_empty() {
            return Err(AppError::NotFound(NO_LOCATED_ITEM.to_string()));
        }

        enrich(self.rooms.as_ref(), items).await
    }
}

/// One lookup per item, in order. The first room that cannot be fetched fails
/// the whole batch.
pub async fn enrich(
    rooms: &dyn RoomDirectory,
    items: Vec<InventoryItemDetail>,
) -> Result<Vec<InventoryItemWithRoom>, AppError> {
    let mut enriched = Vec::with_capacity(items.len());

    for item in items {
        // Unplaced items never reach here; treat one as a missing room anyway.
        let Some(room_id) = item.room_id else {
            return Err(AppError::NotFound(NO_LOCATED_ITEM.to_string()));
        };

        let room = rooms.fetch_room(room_id).await?;

        enriched.push(InventoryItemWithRoom {
            id: item.id,
            inventory_id: item.inventory_id,
            inventory_number: item.inventory_number,
            inventory_name: item.inventory_name,
            room_id: room.id,
            room_name: room.name,
            area: room.area,
            floor: room.floor,
            building_id: room.building_id,
            building_name: room.building_name,
        });
    }

    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::space::RoomDetail;
    use async_trait::async_trait;
    use std::{collections::HashMap, sync::Mutex};

    #[derive(Default)]
    struct StubDirectory {
        rooms: HashMap<i32, RoomDetail>,
        calls: Mutex<Vec<i32>>,
    }

    impl StubDirectory {
        fn with_room(mut self, id: i32, building_id: i32) -> Self {
            self.rooms.insert(
                id,
                RoomDetail {
                    id,
                    name: format!("Room {id}"),
                    area: 20.0,
                    floor: Some(1),
                    building_id,
                    building_name: Some("HQ".into()),
                },
            );
            self
        }
    }

    #[async_trait]
    impl RoomDirectory for StubDirectory {
        async fn fetch_room(&self, room_id: i32) -> Result<RoomDetail, AppError> {
            self.calls.lock().unwrap().push(room_id);
            self.rooms
                .get(&room_id)
                .cloned()
                .ok_or_else(|| AppError::not_found("Room", room_id))
        }
    }

    fn item(id: i32, room_id: Option<i32>) -> InventoryItemDetail {
        InventoryItemDetail {
            id,
            inventory_id: 3,
            inventory_number: 23,
            room_id,
            building_id: Some(1),
            inventory_name: "Chair".into(),
        }
    }

    #[tokio::test]
    async fn items_are_completed_with_their_rooms_in_order() {
        let directory = StubDirectory::default().with_room(10, 1).with_room(11, 2);

        let result = enrich(&directory, vec![item(1, Some(11)), item(2, Some(10))])
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, 1);
        assert_eq!(result[0].room_name, "Room 11");
        assert_eq!(result[0].building_id, 2);
        assert_eq!(result[1].room_id, 10);
        assert_eq!(result[1].building_name.as_deref(), Some("HQ"));
        assert_eq!(result[1].inventory_name, "Chair");
        assert_eq!(*directory.calls.lock().unwrap(), vec![11, 10]);
    }

    #[tokio::test]
    async fn first_missing_room_fails_the_batch() {
        let directory = StubDirectory::default().with_room(10, 1).with_room(12, 1);

        let err = enrich(
            &directory,
            vec![item(1, Some(10)), item(2, Some(99)), item(3, Some(12))],
        )
        .await
        .unwrap_err();

        assert_eq!(err.public_message(), "Room with id: 99 not found!");
        // Lookups stop at the failing row.
        assert_eq!(*directory.calls.lock().unwrap(), vec![10, 99]);
    }

    #[tokio::test]
    async fn nothing_to_enrich_yields_nothing() {
        let directory = StubDirectory::default();
        assert!(enrich(&directory, Vec::new()).await.unwrap().is_empty());
    }
}
