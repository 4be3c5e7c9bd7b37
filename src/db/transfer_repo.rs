// src/db/transfer_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{db_utils::is_foreign_key_violation, error::AppError, pagination::Page},
    models::transfer::{TransactionHistory, TransactionItem, TransferLine},
};

const HEADER_COLUMNS: &str =
    "id, description, created_at, updated_at, from_building_id, to_building_id";

#[derive(Clone)]
pub struct TransferRepository {
    pool: PgPool,
}

impl TransferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  HEADERS
    // =========================================================================

    pub async fn list_headers(&self, page: Page) -> Result<Vec<TransactionHistory>, AppError> {
        let sql = format!(
            "SELECT {HEADER_COLUMNS} FROM transaction_history ORDER BY id LIMIT $1 OFFSET $2"
        );
        let headers = sqlx::query_as::<_, TransactionHistory>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(headers)
    }

    pub async fn find_header<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<TransactionHistory>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {HEADER_COLUMNS} FROM transaction_history WHERE id = $1");
        let header = sqlx::query_as::<_, TransactionHistory>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(header)
    }

    pub async fn insert_header<'e, E>(
        &self,
        executor: E,
        from_building_id: i32,
        to_building_id: i32,
        description: Option<&str>,
    ) -> Result<TransactionHistory, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "INSERT INTO transaction_history (description, from_building_id, to_building_id)
             VALUES ($1, $2, $3)
             RETURNING {HEADER_COLUMNS}"
        );
        let header = sqlx::query_as::<_, TransactionHistory>(&sql)
            .bind(description)
            .bind(from_building_id)
            .bind(to_building_id)
            .fetch_one(executor)
            .await?;
        Ok(header)
    }

    /// `updated_at` never moves backwards, even if the server clock does.
    pub async fn update_header<'e, E>(
        &self,
        executor: E,
        id: i32,
        from_building_id: i32,
        to_building_id: i32,
        description: Option<&str>,
    ) -> Result<Option<TransactionHistory>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "UPDATE transaction_history
             SET description = $2, from_building_id = $3, to_building_id = $4,
                 updated_at = GREATEST(now(), updated_at)
             WHERE id = $1
             RETURNING {HEADER_COLUMNS}"
        );
        let header = sqlx::query_as::<_, TransactionHistory>(&sql)
            .bind(id)
            .bind(description)
            .bind(from_building_id)
            .bind(to_building_id)
            .fetch_optional(executor)
            .await?;
        Ok(header)
    }

    pub async fn delete_header(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM transaction_history WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    return AppError::BadRequest(format!(
                        "You can't delete this transaction with id: {id}, it still has items"
                    ));
                }
                e.into()
            })?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  LINES
    // =========================================================================

    pub async fn list_lines(&self, page: Page) -> Result<Vec<TransactionItem>, AppError> {
        let lines = sqlx::query_as::<_, TransactionItem>(
            r#"
            SELECT id, transaction_history_id, inventory_id, quantity
            FROM transaction_item
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(lines)
    }

    pub async fn lines_of_header<'e, E>(
        &self,
        executor: E,
        header_id: i32,
        page: Option<Page>,
    ) -> Result<Vec<TransactionItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let lines = sqlx::query_as::<_, TransactionItem>(
            r#"
            SELECT id, transaction_history_id, inventory_id, quantity
            FROM transaction_item
            WHERE transaction_history_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(header_id)
        .bind(page.map(|p| p.limit))
        .bind(page.map(|p| p.offset).unwrap_or(0))
        .fetch_all(executor)
        .await?;
        Ok(lines)
    }

    pub async fn find_line(&self, id: i32) -> Result<Option<TransactionItem>, AppError> {
        let line = sqlx::query_as::<_, TransactionItem>(
            "SELECT id, transaction_history_id, inventory_id, quantity FROM transaction_item WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(line)
    }

    /// All lines of one transfer in a single statement, in input order.
    pub async fn insert_lines<'e, E>(
        &self,
        executor: E,
        header_id: i32,
        lines: &[TransferLine],
    ) -> Result<Vec<TransactionItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let inventory_ids: Vec<i32> = lines.iter().map(|l| l.inventory_id).collect();
        let quantities: Vec<i32> = lines.iter().map(|l| l.quantity).collect();

        let mut inserted = sqlx::query_as::<_, TransactionItem>(
            r#"
            INSERT INTO transaction_item (transaction_history_id, inventory_id, quantity)
            SELECT $1, t.inventory_id, t.quantity
            FROM UNNEST($2::int[], $3::int[]) WITH ORDINALITY AS t(inventory_id, quantity, ord)
            ORDER BY t.ord
            RETURNING id, transaction_history_id, inventory_id, quantity
            "#,
        )
        .bind(header_id)
        .bind(inventory_ids)
        .bind(quantities)
        .fetch_all(executor)
        .await?;

        inserted.sort_by_key(|line| line.id);
        Ok(inserted)
    }

    /// `None` when the header does not exist.
    pub async fn insert_line<'e, E>(
        &self,
        executor: E,
        header_id: i32,
        inventory_id: i32,
        quantity: i32,
    ) -> Result<Option<TransactionItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let line = sqlx::query_as::<_, TransactionItem>(
            r#"
            INSERT INTO transaction_item (transaction_history_id, inventory_id, quantity)
            SELECT id, $2, $3 FROM transaction_history WHERE id = $1
            RETURNING id, transaction_history_id, inventory_id, quantity
            "#,
        )
        .bind(header_id)
        .bind(inventory_id)
        .bind(quantity)
        .fetch_optional(executor)
        .await?;
        Ok(line)
    }

    /// Whole-record replace; the line may be moved to another header.
    pub async fn update_line(
        &self,
        id: i32,
        header_id: i32,
        inventory_id: i32,
        quantity: i32,
    ) -> Result<Option<TransactionItem>, AppError> {
        sqlx::query_as::<_, TransactionItem>(
            r#"
            UPDATE transaction_item
            SET transaction_history_id = $2, inventory_id = $3, quantity = $4
            WHERE id = $1
            RETURNING id, transaction_history_id, inventory_id, quantity
            "#,
        )
        .bind(id)
        .bind(header_id)
        .bind(inventory_id)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                return AppError::not_found("Transaction", header_id);
            }
            e.into()
        })
    }

    pub async fn delete_line(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM transaction_item WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
