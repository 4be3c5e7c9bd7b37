// src/db/space_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{
        db_utils::{is_foreign_key_violation, unique_violation},
        error::AppError,
        pagination::Page,
    },
    models::space::{Building, Room, RoomDetail},
};

const ROOM_DETAIL_QUERY: &str = r#"
    SELECT r.id, r.name, r.area, r.floor, r.building_id, b.name AS building_name
    FROM room r
    LEFT JOIN building b ON b.id = r.building_id
    WHERE r.id = $1
"#;

#[derive(Clone)]
pub struct SpaceRepository {
    pool: PgPool,
}

impl SpaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  BUILDINGS
    // =========================================================================

    pub async fn list_buildings(&self, page: Page) -> Result<Vec<Building>, AppError> {
        let buildings = sqlx::query_as::<_, Building>(
            "SELECT id, name, area FROM building ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(buildings)
    }

    pub async fn find_building(&self, id: i32) -> Result<Option<Building>, AppError> {
        let building = sqlx::query_as::<_, Building>("SELECT id, name, area FROM building WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(building)
    }

    /// Locks the building row until the surrounding transaction ends, so room
    /// writes against the same building are checked one at a time.
    pub async fn find_building_for_update<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Building>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let building = sqlx::query_as::<_, Building>(
            "SELECT id, name, area FROM building WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(building)
    }

    pub async fn building_exists(&self, id: i32) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM building WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    pub async fn insert_building<'e, E>(
        &self,
        executor: E,
        name: &str,
        area: f64,
    ) -> Result<Building, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Building>(
            "INSERT INTO building (name, area) VALUES ($1, $2) RETURNING id, name, area",
        )
        .bind(name)
        .bind(area)
        .fetch_one(executor)
        .await
        .map_err(building_write_error)
    }

    pub async fn update_building<'e, E>(
        &self,
        executor: E,
        id: i32,
        name: &str,
        area: f64,
    ) -> Result<Option<Building>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Building>(
            "UPDATE building SET name = $2, area = $3 WHERE id = $1 RETURNING id, name, area",
        )
        .bind(id)
        .bind(name)
        .bind(area)
        .fetch_optional(executor)
        .await
        .map_err(building_write_error)
    }

    /// Number of rows removed (0 or 1).
    pub async fn delete_building(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM building WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    return AppError::BadRequest(format!("You can't delete a building with id: {id}"));
                }
                e.into()
            })?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  ROOMS
    // =========================================================================

    pub async fn list_rooms(&self, page: Page) -> Result<Vec<Room>, AppError> {
        let rooms = sqlx::query_as::<_, Room>(
            "SELECT id, name, area, floor, building_id FROM room ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }

    pub async fn find_room_detail(&self, id: i32) -> Result<Option<RoomDetail>, AppError> {
        let room = sqlx::query_as::<_, RoomDetail>(ROOM_DETAIL_QUERY)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(room)
    }

    pub async fn find_room<'e, E>(&self, executor: E, id: i32) -> Result<Option<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let room = sqlx::query_as::<_, Room>(
            "SELECT id, name, area, floor, building_id FROM room WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(room)
    }

    /// Sum of room areas in a building, optionally leaving one room out.
    /// `None` when there is nothing to sum.
    pub async fn total_room_area<'e, E>(
        &self,
        executor: E,
        building_id: i32,
        excluding_room: Option<i32>,
    ) -> Result<Option<f64>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let total = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT SUM(area) FROM room WHERE building_id = $1 AND ($2::int IS NULL OR id <> $2)",
        )
        .bind(building_id)
        .bind(excluding_room)
        .fetch_one(executor)
        .await?;
        Ok(total)
    }

    pub async fn insert_room<'e, E>(
        &self,
        executor: E,
        name: &str,
        area: f64,
        floor: Option<i32>,
        building_id: i32,
    ) -> Result<Room, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO room (name, area, floor, building_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, area, floor, building_id
            "#,
        )
        .bind(name)
        .bind(area)
        .bind(floor)
        .bind(building_id)
        .fetch_one(executor)
        .await
        .map_err(|e| room_write_error(e, building_id))
    }

    pub async fn update_room<'e, E>(
        &self,
        executor: E,
        id: i32,
        name: &str,
        area: f64,
        floor: Option<i32>,
        building_id: i32,
    ) -> Result<Option<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Room>(
            r#"
            UPDATE room SET name = $2, area = $3, floor = $4, building_id = $5
            WHERE id = $1
            RETURNING id, name, area, floor, building_id
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(area)
        .bind(floor)
        .bind(building_id)
        .fetch_optional(executor)
        .await
        .map_err(|e| room_write_error(e, building_id))
    }

    pub async fn delete_room(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM room WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn building_write_error(e: sqlx::Error) -> AppError {
    if unique_violation(&e).is_some() {
        return AppError::UniqueKey("Building with the same name already exists.".to_string());
    }
    e.into()
}

fn room_write_error(e: sqlx::Error, building_id: i32) -> AppError {
    if unique_violation(&e).is_some() {
        return AppError::UniqueKey("Room with the same name already exists.".to_string());
    }
    if is_foreign_key_violation(&e) {
        return AppError::not_found("Building", building_id);
    }
    e.into()
}
