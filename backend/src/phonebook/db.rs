//! SQLite-backed contact store
//!
//! Handles all database interactions for phonebook contacts.

use crate::phonebook::models::{Contact, ContactId, NewContact};
use crate::phonebook::store::{ContactStore, StoreError};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Database connection pool for contact operations
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database and run migrations
    ///
    /// # Arguments
    /// * `database_url` - `sqlite:` connection string or a plain file path
    /// * `acquire_timeout` - how long a query waits for a free connection
    ///
    /// # Returns
    /// * `Ok(SqliteStore)` if successful
    /// * `Err(StoreError)` if the connection or migration failed
    pub async fn connect(database_url: &str, acquire_timeout: Duration) -> Result<Self, StoreError> {
        let connection_string = if database_url.starts_with("sqlite:") {
            database_url.to_string()
        } else {
            // Plain path: make sure its directory exists
            if let Some(parent) = PathBuf::from(database_url).parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Backend(format!("Failed to create db directory: {}", e))
                })?;
            }
            format!("sqlite:{}", database_url)
        };

        let options = SqliteConnectOptions::from_str(&connection_string)?.create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new().acquire_timeout(acquire_timeout);

        // Every connection to an in-memory database sees its own empty database,
        // so keep exactly one alive for the lifetime of the pool
        pool_options = if connection_string.contains(":memory:") {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;

        info!("Connected to SQLite database at: {}", database_url);

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), StoreError> {
        info!("Running database migrations...");

        let migration_sql = include_str!("../../migrations/001_create_persons.sql");

        // Strip comments, then execute one statement at a time
        let cleaned_sql: String = migration_sql
            .lines()
            .map(|line| match line.find("--") {
                Some(pos) => &line[..pos],
                None => line,
            })
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        for statement in cleaned_sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the database pool (for advanced operations if needed)
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ContactStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let contacts =
            sqlx::query_as::<_, Contact>("SELECT id, name, number FROM persons ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(contacts)
    }

    async fn get(&self, id: ContactId) -> Result<Option<Contact>, StoreError> {
        let contact =
            sqlx::query_as::<_, Contact>("SELECT id, name, number FROM persons WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(contact)
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, StoreError> {
        let created = sqlx::query_as::<_, Contact>(
            "INSERT INTO persons (name, number) VALUES (?, ?) RETURNING id, name, number",
        )
        .bind(&contact.name)
        .bind(&contact.number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match StoreError::from(e) {
            StoreError::DuplicateName(_) => StoreError::DuplicateName(contact.name.clone()),
            other => other,
        })?;

        debug!("Created contact {} ({})", created.id, created.name);
        Ok(created)
    }

    async fn delete(&self, id: ContactId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Deleted contact {}: rows={}", id, result.rows_affected());
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons")
            .fetch_one(&self.pool)
            .await?;

        Ok(usize::try_from(count).unwrap_or_default())
    }
}
