// src/services/space_service.rs

use sqlx::{Acquire, Postgres};

use crate::{
    common::{error::AppError, pagination::Page},
    db::SpaceRepository,
    models::space::{Building, BuildingUpdate, BuildingWithRooms, NewBuilding, NewRoom, Room, RoomDetail},
    services::capacity::{room_fits, rooms_fit},
};

#[derive(Clone)]
pub struct SpaceService {
    repo: SpaceRepository,
}

impl SpaceService {
    pub fn new(repo: SpaceRepository) -> Self {
        Self { repo }
    }

    // --- BUILDINGS ---

    pub async fn list_buildings(&self, page: Page) -> Result<Vec<Building>, AppError> {
        self.repo.list_buildings(page).await
    }

    pub async fn get_building(&self, id: i32) -> Result<Building, AppError> {
        self.repo
            .find_building(id)
            .await?
            .ok_or_else(|| AppError::not_found("Building", id))
    }

    pub async fn check_if_exist(&self, id: i32) -> Result<bool, AppError> {
        if self.repo.building_exists(id).await? {
            Ok(true)
        } else {
            Err(AppError::not_found("Building", id))
        }
    }

    /// Creates the building and its inline rooms as one unit. The rooms are
    /// checked against the declared area before anything is written.
    pub async fn create_building<'e, A>(
        &self,
        db: A,
        payload: NewBuilding,
    ) -> Result<BuildingWithRooms, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        rooms_fit(payload.area, payload.rooms.iter().map(|r| r.area))?;

        let mut tx = db.begin().await?;

        let building = self
            .repo
            .insert_building(&mut *tx, &payload.name, payload.area)
            .await?;

        let mut rooms = Vec::with_capacity(payload.rooms.len());
        for room in &payload.rooms {
            let saved = self
                .repo
                .insert_room(&mut *tx, &room.name, room.area, room.floor, building.id)
                .await?;
            rooms.push(saved);
        }

        tx.commit().await?;

        tracing::info!(building_id = building.id, rooms = rooms.len(), "building saved");
        Ok(BuildingWithRooms { building, rooms })
    }

    /// Whole-record replace. The new area must still hold the rooms already
    /// assigned to the building.
    pub async fn update_building<'e, A>(
        &self,
        db: A,
        id: i32,
        payload: BuildingUpdate,
    ) -> Result<Building, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut tx = db.begin().await?;

        self.repo
            .find_building_for_update(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Building", id))?;

        let assigned = self.repo.total_room_area(&mut *tx, id, None).await?;
        rooms_fit(payload.area, assigned)?;

        let building = self
            .repo
            .update_building(&mut *tx, id, &payload.name, payload.area)
            .await?
            .ok_or_else(|| AppError::not_found("Building", id))?;

        tx.commit().await?;

        tracing::info!(building_id = id, "building updated");
        Ok(building)
    }

    pub async fn delete_building(&self, id: i32) -> Result<(), AppError> {
        if self.repo.delete_building(id).await? == 0 {
            return Err(AppError::not_found("Building", id));
        }
        tracing::info!(building_id = id, "building deleted");
        Ok(())
    }

    // --- ROOMS ---

    pub async fn list_rooms(&self, page: Page) -> Result<Vec<Room>, AppError> {
        self.repo.list_rooms(page).await
    }

    pub async fn get_room(&self, id: i32) -> Result<RoomDetail, AppError> {
        self.repo
            .find_room_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("Room", id))
    }

    /// Adds a room to an existing building. The building row stays locked
    /// until the insert commits, so concurrent additions are checked in turn.
    pub async fn add_room<'e, A>(&self, db: A, payload: NewRoom) -> Result<Room, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut tx = db.begin().await?;

        self.ensure_room_fits(&mut tx, payload.building_id, None, payload.area)
            .await?;

        let room = self
            .repo
            .insert_room(
                &mut *tx,
                &payload.name,
                payload.area,
                payload.floor,
                payload.building_id,
            )
            .await?;

        tx.commit().await?;

        tracing::info!(room_id = room.id, building_id = room.building_id, "room saved");
        Ok(room)
    }

    /// Whole-record replace. The room is re-checked against the target
    /// building's other rooms, whether or not it changes building.
    pub async fn update_room<'e, A>(
        &self,
        db: A,
        id: i32,
        payload: NewRoom,
    ) -> Result<Room, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut tx = db.begin().await?;

        self.repo
            .find_room(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Room", id))?;

        self.ensure_room_fits(&mut tx, payload.building_id, Some(id), payload.area)
            .await?;

        let room = self
            .repo
            .update_room(
                &mut *tx,
                id,
                &payload.name,
                payload.area,
                payload.floor,
                payload.building_id,
            )
            .await?
            .ok_or_else(|| AppError::not_found("Room", id))?;

        tx.commit().await?;

        tracing::info!(room_id = id, building_id = room.building_id, "room updated");
        Ok(room)
    }

    pub async fn delete_room(&self, id: i32) -> Result<(), AppError> {
        if self.repo.delete_room(id).await? == 0 {
            return Err(AppError::not_found("Room", id));
        }
        tracing::info!(room_id = id, "room deleted");
        Ok(())
    }

    // Locks the building, then compares its area with the load it would carry.
    async fn ensure_room_fits(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        building_id: i32,
        excluding_room: Option<i32>,
        area: f64,
    ) -> Result<(), AppError> {
        let building = self
            .repo
            .find_building_for_update(&mut **tx, building_id)
            .await?
            .ok_or_else(|| AppError::not_found("Building", building_id))?;

        let prior_total = self
            .repo
            .total_room_area(&mut **tx, building_id, excluding_room)
            .await?;

        room_fits(building.area, prior_total, area)
    }
}
