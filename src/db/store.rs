//! The story store: one parameterized statement per operation.
//!
//! Every user-supplied value is passed as a bound parameter. The only
//! identifier interpolated into SQL text is the operator-configured table
//! name, which is validated at construction. Mutating operations use a
//! pre-check read followed by the write and a re-fetch; the sequence is not
//! wrapped in a transaction, so a concurrent mutation of the same key
//! between check and write can race.

use crate::config::validate_identifier;
use crate::db::pool::DbPool;
use crate::db::types::RowToJson;
use crate::error::{StoryError, StoryResult};
use crate::models::{StoryDraft, StoryPatch, StoryRow};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct StoryStore {
    pool: DbPool,
    table: String,
}

impl StoryStore {
    /// Create a store over the given pool and table.
    ///
    /// Fails if the table name is not a bare SQL identifier.
    pub fn new(pool: DbPool, table: impl Into<String>) -> StoryResult<Self> {
        let table = table.into();
        validate_identifier(&table)?;
        Ok(Self { pool, table })
    }

    /// The configured table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The underlying pool, for shutdown.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// All rows, in storage-default order.
    pub async fn list_all(&self) -> StoryResult<Vec<StoryRow>> {
        let sql = format!("SELECT * FROM {}", self.table);
        let rows = fetch_rows(&self.pool, &sql, &[]).await?;
        debug!(count = rows.len(), "Fetched all stories");
        Ok(rows)
    }

    /// Rows whose ticket number matches exactly.
    pub async fn fetch_by_key(&self, ticket_number: &str) -> StoryResult<Vec<StoryRow>> {
        let sql = format!("SELECT * FROM {} WHERE ticket_number = ?", self.table);
        let rows = fetch_rows(&self.pool, &sql, &[ticket_number]).await?;
        debug!(ticket_number, count = rows.len(), "Fetched story by ticket");
        Ok(rows)
    }

    /// All rows except the one with the given ticket number. When the key
    /// does not exist this is simply all rows.
    pub async fn fetch_excluding(&self, exclude_ticket: &str) -> StoryResult<Vec<StoryRow>> {
        let sql = format!("SELECT * FROM {} WHERE ticket_number <> ?", self.table);
        let rows = fetch_rows(&self.pool, &sql, &[exclude_ticket]).await?;
        debug!(exclude_ticket, count = rows.len(), "Fetched related stories");
        Ok(rows)
    }

    /// Rows whose title or description contains the keyword, case-insensitive.
    pub async fn search(&self, keyword: &str) -> StoryResult<Vec<StoryRow>> {
        let sql = format!(
            "SELECT * FROM {} WHERE LOWER(title) LIKE ? OR LOWER(description) LIKE ?",
            self.table
        );
        let pattern = format!("%{}%", keyword.to_lowercase());
        let rows = fetch_rows(&self.pool, &sql, &[&pattern, &pattern]).await?;
        debug!(keyword, count = rows.len(), "Searched stories");
        Ok(rows)
    }

    /// Whether a row with this ticket number exists.
    pub async fn exists(&self, ticket_number: &str) -> StoryResult<bool> {
        let sql = format!(
            "SELECT ticket_number FROM {} WHERE ticket_number = ?",
            self.table
        );
        let rows = fetch_rows(&self.pool, &sql, &[ticket_number]).await?;
        Ok(!rows.is_empty())
    }

    /// Insert a new story and return the created row.
    ///
    /// Only supplied optional fields are inserted; omitted columns take
    /// their storage defaults. Fails with a conflict if the ticket number
    /// already exists, without mutating storage.
    pub async fn create(&self, draft: &StoryDraft) -> StoryResult<StoryRow> {
        if self.exists(&draft.ticket_number).await? {
            return Err(StoryError::conflict(&draft.ticket_number));
        }

        let (sql, params) = insert_statement(&self.table, draft);
        execute(&self.pool, &sql, &params).await?;

        info!(ticket_number = %draft.ticket_number, table = %self.table, "Created story");
        self.fetch_one(&draft.ticket_number).await
    }

    /// Apply a partial update and return the updated row.
    ///
    /// Only the fields populated in the patch change. Fails before any
    /// storage call when the patch is empty, and with not-found when the
    /// ticket number does not exist.
    pub async fn update(&self, ticket_number: &str, patch: &StoryPatch) -> StoryResult<StoryRow> {
        if patch.is_empty() {
            return Err(StoryError::NoFields);
        }
        if !self.exists(ticket_number).await? {
            return Err(StoryError::not_found(ticket_number));
        }

        let (sql, params) = update_statement(&self.table, patch, ticket_number);
        execute(&self.pool, &sql, &params).await?;

        info!(ticket_number, table = %self.table, "Updated story");
        self.fetch_one(ticket_number).await
    }

    /// Delete a story and return its pre-deletion snapshot.
    pub async fn delete(&self, ticket_number: &str) -> StoryResult<StoryRow> {
        let snapshot = match self.fetch_by_key(ticket_number).await?.into_iter().next() {
            Some(row) => row,
            None => return Err(StoryError::not_found(ticket_number)),
        };

        let sql = format!("DELETE FROM {} WHERE ticket_number = ?", self.table);
        execute(&self.pool, &sql, &[ticket_number]).await?;

        info!(ticket_number, table = %self.table, "Deleted story");
        Ok(snapshot)
    }

    /// Re-fetch a single row after a mutation.
    async fn fetch_one(&self, ticket_number: &str) -> StoryResult<StoryRow> {
        self.fetch_by_key(ticket_number)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoryError::Database {
                message: format!(
                    "Story {} disappeared between write and re-fetch",
                    ticket_number
                ),
            })
    }
}

/// Build the INSERT statement for a draft, folding only supplied optional
/// fields so placeholders and bound parameters stay in lockstep.
fn insert_statement<'a>(table: &str, draft: &'a StoryDraft) -> (String, Vec<&'a str>) {
    let mut columns = vec!["ticket_number", "title"];
    let mut params = vec![draft.ticket_number.as_str(), draft.title.as_str()];
    for (column, value) in draft.optional_fields() {
        columns.push(column);
        params.push(value);
    }

    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders
    );
    (sql, params)
}

/// Build the UPDATE statement for a non-empty patch.
fn update_statement<'a>(
    table: &str,
    patch: &'a StoryPatch,
    ticket_number: &'a str,
) -> (String, Vec<&'a str>) {
    let mut assignments = Vec::new();
    let mut params = Vec::new();
    for (column, value) in patch.fields() {
        assignments.push(format!("{} = ?", column));
        params.push(value);
    }
    params.push(ticket_number);

    let sql = format!(
        "UPDATE {} SET {} WHERE ticket_number = ?",
        table,
        assignments.join(", ")
    );
    (sql, params)
}

// =============================================================================
// Execution helpers
// =============================================================================
//
// Every bound value in this server is a string, so the helpers take string
// slices and dispatch on the pool variant.

async fn fetch_rows(pool: &DbPool, sql: &str, params: &[&str]) -> StoryResult<Vec<StoryRow>> {
    match pool {
        DbPool::MySql(p) => {
            let mut query = sqlx::query(sql);
            for param in params {
                query = query.bind(*param);
            }
            let rows = query.fetch_all(p).await?;
            Ok(rows.iter().map(RowToJson::to_json_map).collect())
        }
        DbPool::Sqlite(p) => {
            let mut query = sqlx::query(sql);
            for param in params {
                query = query.bind(*param);
            }
            let rows = query.fetch_all(p).await?;
            Ok(rows.iter().map(RowToJson::to_json_map).collect())
        }
    }
}

async fn execute(pool: &DbPool, sql: &str, params: &[&str]) -> StoryResult<u64> {
    match pool {
        DbPool::MySql(p) => {
            let mut query = sqlx::query(sql);
            for param in params {
                query = query.bind(*param);
            }
            Ok(query.execute(p).await?.rows_affected())
        }
        DbPool::Sqlite(p) => {
            let mut query = sqlx::query(sql);
            for param in params {
                query = query.bind(*param);
            }
            Ok(query.execute(p).await?.rows_affected())
        }
    }
}
