use anyhow::{Context, Result, anyhow};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};
use std::time::Duration;

use crate::config::Config;
use crate::models::Item;

/// Shareable handle over the PostgreSQL pool backing `my_table`
///
/// Every SQL statement the service issues lives here. Each call checks out
/// at most one pooled connection and returns it when the call completes,
/// including on error or cancellation.
#[derive(Clone, Debug)]
pub struct ItemStore {
    pool: PgPool,
}

impl ItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a pool from configuration and verify it can connect
    ///
    /// Fails when the connection string is malformed or the database is
    /// unreachable, so the process can exit before serving traffic.
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        tracing::info!(
            "Connected to PostgreSQL (max connections: {})",
            config.max_connections
        );

        Ok(Self::new(pool))
    }

    /// Insert a row and return it with its database-assigned pk
    ///
    /// # Errors
    /// Returns an error if the insert fails
    pub async fn create(&self, data: &str) -> Result<Item> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO my_table (data) VALUES ($1) RETURNING pk, data",
        )
        .bind(data)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert item")?;

        tracing::debug!("Inserted item with pk: {}", item.pk);
        Ok(item)
    }

    /// Read a single row by pk
    ///
    /// Returns `Ok(None)` when no row matches.
    pub async fn get(&self, pk: i32) -> Result<Option<Item>> {
        let item = sqlx::query_as::<_, Item>("SELECT pk, data FROM my_table WHERE pk = $1")
            .bind(pk)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to read item")?;

        if item.is_some() {
            tracing::debug!("Read item with pk: {}", pk);
        }

        Ok(item)
    }

    /// Read every row, ordered by pk
    ///
    /// All rows are decoded before returning, so a failure on any row
    /// surfaces as an error and never as a truncated list.
    pub async fn list_all(&self) -> Result<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>("SELECT pk, data FROM my_table ORDER BY pk")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list items")?;

        tracing::debug!("Listed {} items", items.len());
        Ok(items)
    }

    /// Ping the database through a pooled connection, bounded by `timeout`
    pub async fn health_check(&self, timeout: Duration) -> Result<()> {
        let probe = async {
            let mut conn = self
                .pool
                .acquire()
                .await
                .context("Failed to acquire database connection")?;
            conn.ping().await.context("Failed to ping database")?;
            Ok::<_, anyhow::Error>(())
        };

        tokio::time::timeout(timeout, probe)
            .await
            .map_err(|_| anyhow!("Health check timed out after {}ms", timeout.as_millis()))??;

        tracing::debug!("Health check ping succeeded");
        Ok(())
    }

    /// Close the pool; later calls fail immediately
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
