//! Postgres store implementation.

use crate::{KogutStore, Result, StorageError};
use async_trait::async_trait;
use kurnik_types::{Kogut, KogutId, KogutInput};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

/// A kogut store backed by a Postgres connection pool.
///
/// Every operation is a single statement; the database's per-statement
/// atomicity is the only isolation this service needs.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connects to the database at `url` and returns a store over a
    /// fresh connection pool.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Wraps an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `koguts` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS koguts (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER,
                sex BOOLEAN NOT NULL DEFAULT FALSE
            )",
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!("koguts schema ready");
        Ok(())
    }
}

fn kogut_from_row(row: &PgRow) -> std::result::Result<Kogut, sqlx::Error> {
    Ok(Kogut {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
        sex: row.try_get("sex")?,
    })
}

#[async_trait]
impl KogutStore for PostgresStore {
    async fn create(&self, input: KogutInput) -> Result<Kogut> {
        let row = sqlx::query(
            "INSERT INTO koguts (name, age, sex) VALUES ($1, $2, $3)
             RETURNING id, name, age, sex",
        )
        .bind(&input.name)
        .bind(input.age)
        .bind(input.sex)
        .fetch_one(&self.pool)
        .await?;

        Ok(kogut_from_row(&row)?)
    }

    async fn get(&self, id: KogutId) -> Result<Kogut> {
        let row = sqlx::query("SELECT id, name, age, sex FROM koguts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(kogut_from_row(&row)?),
            None => Err(StorageError::NotFound(id)),
        }
    }

    async fn list(&self) -> Result<Vec<Kogut>> {
        let rows = sqlx::query("SELECT id, name, age, sex FROM koguts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| kogut_from_row(row).map_err(StorageError::from))
            .collect()
    }

    async fn update(&self, id: KogutId, input: KogutInput) -> Result<Kogut> {
        let row = sqlx::query(
            "UPDATE koguts SET name = $2, age = $3, sex = $4 WHERE id = $1
             RETURNING id, name, age, sex",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.age)
        .bind(input.sex)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(kogut_from_row(&row)?),
            None => Err(StorageError::NotFound(id)),
        }
    }

    async fn delete(&self, id: KogutId) -> Result<()> {
        let result = sqlx::query("DELETE FROM koguts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }
        Ok(())
    }
}
