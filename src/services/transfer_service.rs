// src/services/transfer_service.rs

use sqlx::{Acquire, Postgres};

use crate::{
    common::{error::AppError, pagination::Page},
    db::TransferRepository,
    models::transfer::{
        NewTransactionItem, NewTransfer, TransactionHistory, TransactionItem, TransactionUpdate,
        TransferRecord,
    },
};

#[derive(Clone)]
pub struct TransferService {
    repo: TransferRepository,
}

impl TransferService {
    pub fn new(repo: TransferRepository) -> Self {
        Self { repo }
    }

    // --- TRANSFERS (header + lines) ---

    /// Header and every line become visible together or not at all.
    /// Quantities are recorded as given; category stock is not adjusted.
    pub async fn record_transfer<'e, A>(
        &self,
        db: A,
        payload: NewTransfer,
    ) -> Result<TransferRecord, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut tx = db.begin().await?;

        let transaction = self
            .repo
            .insert_header(
                &mut *tx,
                payload.from_building_id,
                payload.to_building_id,
                payload.description.as_deref(),
            )
            .await?;

        let items = self
            .repo
            .insert_lines(&mut *tx, transaction.id, &payload.inventories)
            .await?;

        tx.commit().await?;

        tracing::info!(
            transaction_id = transaction.id,
            from = transaction.from_building_id,
            to = transaction.to_building_id,
            lines = items.len(),
            "transfer recorded"
        );
        Ok(TransferRecord { transaction, items })
    }

    pub async fn list_transactions(&self, page: Page) -> Result<Vec<TransactionHistory>, AppError> {
        self.repo.list_headers(page).await
    }

    /// Header together with all of its lines.
    pub async fn get_transaction<'e, A>(&self, db: A, id: i32) -> Result<TransferRecord, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut conn = db.acquire().await?;

        let transaction = self
            .repo
            .find_header(&mut *conn, id)
            .await?
            .ok_or_else(|| AppError::not_found("Transaction", id))?;

        let items = self.repo.lines_of_header(&mut *conn, id, None).await?;

        Ok(TransferRecord { transaction, items })
    }

    pub async fn update_transaction<'e, A>(
        &self,
        db: A,
        id: i32,
        payload: TransactionUpdate,
    ) -> Result<TransactionHistory, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut conn = db.acquire().await?;

        let transaction = self
            .repo
            .update_header(
                &mut *conn,
                id,
                payload.from_building_id,
                payload.to_building_id,
                payload.description.as_deref(),
            )
            .await?
            .ok_or_else(|| AppError::not_found("Transaction", id))?;

        tracing::info!(transaction_id = id, "transaction updated");
        Ok(transaction)
    }

    pub async fn delete_transaction(&self, id: i32) -> Result<(), AppError> {
        if self.repo.delete_header(id).await? == 0 {
            return Err(AppError::not_found("Transaction", id));
        }
        tracing::info!(transaction_id = id, "transaction deleted");
        Ok(())
    }

    // --- LINES ---

    pub async fn list_items(&self, page: Page) -> Result<Vec<TransactionItem>, AppError> {
        self.repo.list_lines(page).await
    }

    pub async fn items_of_transaction<'e, A>(
        &self,
        db: A,
        history_id: i32,
        page: Page,
    ) -> Result<Vec<TransactionItem>, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut conn = db.acquire().await?;
        self.repo
            .lines_of_header(&mut *conn, history_id, Some(page))
            .await
    }

    pub async fn get_item(&self, id: i32) -> Result<TransactionItem, AppError> {
        self.repo
            .find_line(id)
            .await?
            .ok_or_else(|| AppError::not_found("TransactionItem", id))
    }

    pub async fn create_item<'e, A>(
        &self,
        db: A,
        payload: NewTransactionItem,
    ) -> Result<TransactionItem, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut conn = db.acquire().await?;

        let item = self
            .repo
            .insert_line(
                &mut *conn,
                payload.transaction_history_id,
                payload.inventory_id,
                payload.quantity,
            )
            .await?
            .ok_or_else(|| AppError::not_found("Transaction", payload.transaction_history_id))?;

        tracing::info!(item_id = item.id, transaction_id = item.transaction_history_id, "transaction item saved");
        Ok(item)
    }

    pub async fn update_item(
        &self,
        id: i32,
        payload: NewTransactionItem,
    ) -> Result<TransactionItem, AppError> {
        let item = self
            .repo
            .update_line(
                id,
                payload.transaction_history_id,
                payload.inventory_id,
                payload.quantity,
            )
            .await?
            .ok_or_else(|| AppError::not_found("TransactionItem", id))?;

        tracing::info!(item_id = id, "transaction item updated");
        Ok(item)
    }

    pub async fn delete_item(&self, id: i32) -> Result<(), AppError> {
        if self.repo.delete_line(id).await? == 0 {
            return Err(AppError::not_found("TransactionItem", id));
        }
        tracing::info!(item_id = id, "transaction item deleted");
        Ok(())
    }
}
