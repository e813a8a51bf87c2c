//! Persistence capability for treatment quote requests.
//!
//! The store is an opaque insert-only collaborator: callers hand over a
//! [`TreatmentRecord`] and get back `Ok(())` or the store's own failure
//! message. Connection and schema details stay behind the implementations.

mod postgres;

pub use postgres::PgRequestStore;

use async_trait::async_trait;
use thiserror::Error;

/// Row written to the `treatment_requests` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreatmentRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub treatment: String,
    pub planned_date: Option<String>,
    pub message: Option<String>,
}

/// Failure reported by the persistence service during an insert.
///
/// Displays as the store-provided message, which the handler surfaces
/// verbatim to the caller.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Insert capability backing the submission flow.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Persist one record. Exactly one insert attempt, no retries.
    async fn insert(&self, record: TreatmentRecord) -> Result<(), StoreError>;
}
