//! Persistence layer: durable storage of athlete records keyed by id.
//!
//! [`AthleteStore`] is the seam between the service layer and storage.
//! The production implementation is [`postgres::PostgresStore`] over
//! `sqlx::PgPool`; [`memory::MemoryStore`] backs tests and demos. No
//! sqlx types appear in trait signatures.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::Athlete;
use crate::error::ApiError;

/// Storage contract for athlete records.
///
/// Absence is `Ok(None)` or an empty vec, never an error; only
/// infrastructure failures surface as `Err`.
#[async_trait]
pub trait AthleteStore: Send + Sync + std::fmt::Debug {
    /// Returns every stored record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    async fn find_all(&self) -> Result<Vec<Athlete>, ApiError>;

    /// Looks up a record by its unique id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    async fn find_by_id(&self, id: &str) -> Result<Option<Athlete>, ApiError>;

    /// Inserts the record, overwriting any existing record with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    async fn save(&self, athlete: &Athlete) -> Result<(), ApiError>;

    /// Looks up a record by exact name. Uniqueness is expected but not
    /// enforced; with duplicates an arbitrary match is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    async fn find_by_name(&self, name: &str) -> Result<Option<Athlete>, ApiError>;

    /// Returns every record whose name contains `fragment`,
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Athlete>, ApiError>;

    /// Deletes all records with the given exact name. Part of the store
    /// contract; no HTTP endpoint exposes it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    async fn delete_by_name(&self, name: &str) -> Result<(), ApiError>;
}
