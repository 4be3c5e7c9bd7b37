// src/db/inventory_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{
        db_utils::{is_foreign_key_violation, unique_violation},
        error::AppError,
        pagination::Page,
    },
    models::inventory::{CategoryCountInRoom, InventoryCategory, InventoryItem, InventoryItemDetail},
    services::allocation::PlannedItem,
};

const ITEM_COLUMNS: &str = "id, inventory_id, inventory_sign, inventory_number, room_id, building_id";

const ITEM_DETAIL_SELECT: &str = r#"
    SELECT ii.id, ii.inventory_id, ii.inventory_number, ii.room_id, ii.building_id,
           i.name AS inventory_name
    FROM inventory_item ii
    JOIN inventory i ON i.id = ii.inventory_id
"#;

#[derive(Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Categories
    // ---

    pub async fn list_categories(&self, page: Page) -> Result<Vec<InventoryCategory>, AppError> {
        let categories = sqlx::query_as::<_, InventoryCategory>(
            "SELECT id, name, description, inventory_sign FROM inventory ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    pub async fn find_category<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<InventoryCategory>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let category = sqlx::query_as::<_, InventoryCategory>(
            "SELECT id, name, description, inventory_sign FROM inventory WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(category)
    }

    pub async fn insert_category<'e, E>(
        &self,
        executor: E,
        name: &str,
        description: Option<&str>,
        sign: &str,
    ) -> Result<InventoryCategory, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, InventoryCategory>(
            r#"
            INSERT INTO inventory (name, description, inventory_sign)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, inventory_sign
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(sign)
        .fetch_one(executor)
        .await
        .map_err(classify_write_error)
    }

    /// Changing the sign cascades to every item of the category.
    pub async fn update_category<'e, E>(
        &self,
        executor: E,
        id: i32,
        name: &str,
        description: Option<&str>,
        sign: &str,
    ) -> Result<Option<InventoryCategory>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, InventoryCategory>(
            r#"
            UPDATE inventory SET name = $2, description = $3, inventory_sign = $4
            WHERE id = $1
            RETURNING id, name, description, inventory_sign
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(sign)
        .fetch_optional(executor)
        .await
        .map_err(classify_write_error)
    }

    pub async fn delete_category(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM inventory WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    return AppError::BadRequest(format!(
                        "You can't delete an inventory with id: {id}, it still has items"
                    ));
                }
                e.into()
            })?;
        Ok(result.rows_affected())
    }

    /// Per-category item counts for one room.
    pub async fn counts_by_room(
        &self,
        room_id: i32,
        page: Page,
    ) -> Result<Vec<CategoryCountInRoom>, AppError> {
        let counts = sqlx::query_as::<_, CategoryCountInRoom>(
            r#"
            SELECT i.id, i.name, i.inventory_sign, COUNT(ii.id) AS quantity
            FROM inventory_item ii
            JOIN inventory i ON i.id = ii.inventory_id
            WHERE ii.room_id = $1
            GROUP BY i.id, i.name, i.inventory_sign
            ORDER BY i.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(room_id)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }

    // ---
    // Items
    // ---

    pub async fn list_items(&self, page: Page) -> Result<Vec<InventoryItem>, AppError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM inventory_item ORDER BY id LIMIT $1 OFFSET $2");
        let items = sqlx::query_as::<_, InventoryItem>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn find_item_detail(&self, id: i32) -> Result<Option<InventoryItemDetail>, AppError> {
        let sql = format!("{ITEM_DETAIL_SELECT} WHERE ii.id = $1");
        let item = sqlx::query_as::<_, InventoryItemDetail>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    /// Items carrying `sign` + `number` that are currently placed in a room.
    pub async fn find_located_items(
        &self,
        sign: &str,
        number: i32,
        page: Page,
    ) -> Result<Vec<InventoryItemDetail>, AppError> {
        let sql = format!(
            "{ITEM_DETAIL_SELECT}
             WHERE ii.inventory_sign = $1 AND ii.inventory_number = $2 AND ii.room_id IS NOT NULL
             ORDER BY ii.id
             LIMIT $3 OFFSET $4"
        );
        let items = sqlx::query_as::<_, InventoryItemDetail>(&sql)
            .bind(sign)
            .bind(number)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    /// Inserts every planned item in a single statement. Returned rows are in id order.
    pub async fn insert_items<'e, E>(
        &self,
        executor: E,
        category: &InventoryCategory,
        planned: &[PlannedItem],
    ) -> Result<Vec<InventoryItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if planned.is_empty() {
            return Ok(Vec::new());
        }

        let numbers: Vec<i32> = planned.iter().map(|p| p.inventory_number).collect();
        let buildings: Vec<i32> = planned.iter().map(|p| p.building_id).collect();

        let sql = format!(
            "INSERT INTO inventory_item (inventory_id, inventory_sign, inventory_number, building_id)
             SELECT $1, $2, t.n, t.b FROM UNNEST($3::int[], $4::int[]) AS t(n, b)
             RETURNING {ITEM_COLUMNS}"
        );
        let mut items = sqlx::query_as::<_, InventoryItem>(&sql)
            .bind(category.id)
            .bind(&category.inventory_sign)
            .bind(numbers)
            .bind(buildings)
            .fetch_all(executor)
            .await
            .map_err(classify_write_error)?;

        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    /// Single item under an existing category. `None` when the category is gone.
    pub async fn insert_item<'e, E>(
        &self,
        executor: E,
        inventory_id: i32,
        number: i32,
        room_id: Option<i32>,
        building_id: Option<i32>,
    ) -> Result<Option<InventoryItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "INSERT INTO inventory_item (inventory_id, inventory_sign, inventory_number, room_id, building_id)
             SELECT id, inventory_sign, $2, $3, $4 FROM inventory WHERE id = $1
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, InventoryItem>(&sql)
            .bind(inventory_id)
            .bind(number)
            .bind(room_id)
            .bind(building_id)
            .fetch_optional(executor)
            .await
            .map_err(classify_write_error)
    }

    /// Whole-record replace. The sign copy follows the (possibly new) category.
    /// `None` when either the item or the category does not exist.
    pub async fn update_item<'e, E>(
        &self,
        executor: E,
        id: i32,
        inventory_id: i32,
        number: i32,
        room_id: Option<i32>,
        building_id: Option<i32>,
    ) -> Result<Option<InventoryItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, InventoryItem>(
            r#"
            UPDATE inventory_item ii
            SET inventory_id = i.id, inventory_sign = i.inventory_sign,
                inventory_number = $3, room_id = $4, building_id = $5
            FROM inventory i
            WHERE ii.id = $1 AND i.id = $2
            RETURNING ii.id, ii.inventory_id, ii.inventory_sign, ii.inventory_number,
                      ii.room_id, ii.building_id
            "#,
        )
        .bind(id)
        .bind(inventory_id)
        .bind(number)
        .bind(room_id)
        .bind(building_id)
        .fetch_optional(executor)
        .await
        .map_err(classify_write_error)
    }

    pub async fn delete_item(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM inventory_item WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

// Both tables share this mapping: the constraint name tells which rule was hit.
fn classify_write_error(e: sqlx::Error) -> AppError {
    match unique_violation(&e) {
        Some(constraint) if constraint.starts_with("inventory_item") => AppError::UniqueKey(
            "InventoryItem with the same sign and number already exists.".to_string(),
        ),
        Some(_) => {
            AppError::UniqueKey("Inventory with the same name and sign already exists.".to_string())
        }
        None => e.into(),
    }
}
