use async_trait::async_trait;
use sqlx::PgPool;

use super::{RequestStore, StoreError, TreatmentRecord};

/// Postgres-backed request store.
pub struct PgRequestStore {
    pool: PgPool,
}

impl PgRequestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestStore for PgRequestStore {
    async fn insert(&self, record: TreatmentRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO treatment_requests (name, email, phone, treatment, planned_date, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.treatment)
        .bind(&record.planned_date)
        .bind(&record.message)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert treatment request: {:?}", e);
            StoreError::new(e.to_string())
        })?;

        Ok(())
    }
}
