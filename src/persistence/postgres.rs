//! PostgreSQL implementation of the athlete store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::AthleteStore;
use crate::domain::Athlete;
use crate::error::ApiError;

/// Row tuple matching the column order of the `athletes` table.
type AthleteRow = (
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

const COLUMNS: &str = "id, gender, event, location, year, medal, name, nationality, result";

/// PostgreSQL-backed athlete store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `athletes` table if it does not exist yet.
    ///
    /// The schema is a single table keyed by a text id; there is no
    /// versioning or migration tooling.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Store`] on database failure.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS athletes (\
                 id          TEXT PRIMARY KEY,\
                 gender      TEXT,\
                 event       TEXT,\
                 location    TEXT,\
                 year        TEXT,\
                 medal       TEXT,\
                 name        TEXT,\
                 nationality TEXT,\
                 result      TEXT\
             )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| ApiError::Store(e.to_string()))?;

        tracing::info!("athletes table ready");
        Ok(())
    }
}

fn from_row(row: AthleteRow) -> Athlete {
    let (id, gender, event, location, year, medal, name, nationality, result) = row;
    Athlete {
        id,
        gender,
        event,
        location,
        year,
        medal,
        name,
        nationality,
        result,
    }
}

#[async_trait]
impl AthleteStore for PostgresStore {
    async fn find_all(&self) -> Result<Vec<Athlete>, ApiError> {
        let rows = sqlx::query_as::<_, AthleteRow>(&format!(
            "SELECT {COLUMNS} FROM athletes ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Athlete>, ApiError> {
        let row = sqlx::query_as::<_, AthleteRow>(&format!(
            "SELECT {COLUMNS} FROM athletes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(row.map(from_row))
    }

    async fn save(&self, athlete: &Athlete) -> Result<(), ApiError> {
        sqlx::query(
            "INSERT INTO athletes (id, gender, event, location, year, medal, name, nationality, result) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO UPDATE SET \
                 gender = EXCLUDED.gender, \
                 event = EXCLUDED.event, \
                 location = EXCLUDED.location, \
                 year = EXCLUDED.year, \
                 medal = EXCLUDED.medal, \
                 name = EXCLUDED.name, \
                 nationality = EXCLUDED.nationality, \
                 result = EXCLUDED.result",
        )
        .bind(&athlete.id)
        .bind(&athlete.gender)
        .bind(&athlete.event)
        .bind(&athlete.location)
        .bind(&athlete.year)
        .bind(&athlete.medal)
        .bind(&athlete.name)
        .bind(&athlete.nationality)
        .bind(&athlete.result)
        .execute(&self.pool)
        .await
        .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Athlete>, ApiError> {
        let row = sqlx::query_as::<_, AthleteRow>(&format!(
            "SELECT {COLUMNS} FROM athletes WHERE name = $1 LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(row.map(from_row))
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Athlete>, ApiError> {
        let rows = sqlx::query_as::<_, AthleteRow>(&format!(
            "SELECT {COLUMNS} FROM athletes WHERE name ILIKE '%' || $1 || '%' ORDER BY id"
        ))
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM athletes WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(())
    }
}
