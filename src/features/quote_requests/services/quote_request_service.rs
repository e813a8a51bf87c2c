use std::sync::Arc;

use crate::core::error::Result;
use crate::features::quote_requests::dtos::SubmitRequestDto;
use crate::modules::store::{RequestStore, TreatmentRecord};

/// Service for recording treatment quote requests
pub struct QuoteRequestService {
    store: Arc<dyn RequestStore>,
}

impl QuoteRequestService {
    pub fn new(store: Arc<dyn RequestStore>) -> Self {
        Self { store }
    }

    /// Map a validated submission onto a record and hand it to the store.
    ///
    /// An empty message is stored as NULL; the planned date passes
    /// through untouched, including null.
    pub async fn submit(&self, dto: SubmitRequestDto) -> Result<()> {
        let record = TreatmentRecord {
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            treatment: dto.treatment.unwrap_or_default(),
            planned_date: dto.planned_date,
            message: dto.message.filter(|m| !m.is_empty()),
        };

        let treatment = record.treatment.clone();
        self.store.insert(record).await?;

        tracing::info!("Treatment request stored: treatment={}", treatment);

        Ok(())
    }
}
