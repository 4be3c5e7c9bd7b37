// src/services/inventory_service.rs

use sqlx::{Acquire, Postgres};

use crate::{
    common::{error::AppError, pagination::Page},
    db::InventoryRepository,
    models::inventory::{
        CategoryAllocation, CategoryCountInRoom, InventoryCategory, InventoryItem,
        InventoryItemDetail, InventoryUpdate, NewInventory, NewInventoryItem,
    },
    services::allocation::plan_allocation,
};

#[derive(Clone)]
pub struct InventoryService {
    repo: InventoryRepository,
    max_allocation: i64,
}

impl InventoryService {
    pub fn new(repo: InventoryRepository, max_allocation: i64) -> Self {
        Self { repo, max_allocation }
    }

    // --- CATEGORIES ---

    pub async fn list_categories(&self, page: Page) -> Result<Vec<InventoryCategory>, AppError> {
        self.repo.list_categories(page).await
    }

    pub async fn get_category<'e, A>(&self, db: A, id: i32) -> Result<InventoryCategory, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut conn = db.acquire().await?;
        self.repo
            .find_category(&mut *conn, id)
            .await?
            .ok_or_else(|| AppError::not_found("Inventory", id))
    }

    /// Saves a category and allocates its items in one transaction. The
    /// allocation is planned up front, so malformed requests never open one.
    pub async fn create_category<'e, A>(
        &self,
        db: A,
        payload: NewInventory,
    ) -> Result<CategoryAllocation, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let planned = plan_allocation(&payload, self.max_allocation)?;

        let mut tx = db.begin().await?;

        let inventory = self
            .repo
            .insert_category(
                &mut *tx,
                &payload.name,
                payload.description.as_deref(),
                &payload.inventory_sign,
            )
            .await?;

        let items = self.repo.insert_items(&mut *tx, &inventory, &planned).await?;

        tx.commit().await?;

        tracing::info!(
            inventory_id = inventory.id,
            sign = %inventory.inventory_sign,
            items = items.len(),
            "inventory saved"
        );
        Ok(CategoryAllocation { inventory, items })
    }

    pub async fn update_category<'e, A>(
        &self,
        db: A,
        id: i32,
        payload: InventoryUpdate,
    ) -> Result<InventoryCategory, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut tx = db.begin().await?;

        let category = self
            .repo
            .update_category(
                &mut *tx,
                id,
                &payload.name,
                payload.description.as_deref(),
                &payload.inventory_sign,
            )
            .await?
            .ok_or_else(|| AppError::not_found("Inventory", id))?;

        tx.commit().await?;

        tracing::info!(inventory_id = id, "inventory updated");
        Ok(category)
    }

    pub async fn delete_category(&self, id: i32) -> Result<(), AppError> {
        if self.repo.delete_category(id).await? == 0 {
            return Err(AppError::not_found("Inventory", id));
        }
        tracing::info!(inventory_id = id, "inventory deleted");
        Ok(())
    }

    pub async fn counts_by_room(
        &self,
        room_id: i32,
        page: Page,
    ) -> Result<Vec<CategoryCountInRoom>, AppError> {
        self.repo.counts_by_room(room_id, page).await
    }

    // --- ITEMS ---

    pub async fn list_items(&self, page: Page) -> Result<Vec<InventoryItem>, AppError> {
        self.repo.list_items(page).await
    }

    pub async fn get_item(&self, id: i32) -> Result<InventoryItemDetail, AppError> {
        self.repo
            .find_item_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("InventoryItem", id))
    }

    pub async fn create_item<'e, A>(
        &self,
        db: A,
        payload: NewInventoryItem,
    ) -> Result<InventoryItem, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut tx = db.begin().await?;

        let item = self
            .repo
            .insert_item(
                &mut *tx,
                payload.inventory_id,
                payload.inventory_number,
                payload.room_id,
                payload.building_id,
            )
            .await?
            .ok_or_else(|| AppError::not_found("Inventory", payload.inventory_id))?;

        tx.commit().await?;

        tracing::info!(item_id = item.id, inventory_id = item.inventory_id, "inventory item saved");
        Ok(item)
    }

    pub async fn update_item<'e, A>(
        &self,
        db: A,
        id: i32,
        payload: NewInventoryItem,
    ) -> Result<InventoryItem, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut tx = db.begin().await?;

        self.repo
            .find_category(&mut *tx, payload.inventory_id)
            .await?
            .ok_or_else(|| AppError::not_found("Inventory", payload.inventory_id))?;

        let item = self
            .repo
            .update_item(
                &mut *tx,
                id,
                payload.inventory_id,
                payload.inventory_number,
                payload.room_id,
                payload.building_id,
            )
            .await?
            .ok_or_else(|| AppError::not_found("InventoryItem", id))?;

        tx.commit().await?;

        tracing::info!(item_id = id, "inventory item updated");
        Ok(item)
    }

    pub async fn delete_item(&self, id: i32) -> Result<(), AppError> {
        if self.repo.delete_item(id).await? == 0 {
            return Err(AppError::not_found("InventoryItem", id));
        }
        tracing::info!(item_id = id, "inventory item deleted");
        Ok(())
    }
}
