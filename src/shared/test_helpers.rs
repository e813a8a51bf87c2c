#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use axum::Router;

#[cfg(test)]
use crate::features::quote_requests::{routes, QuoteRequestService};

#[cfg(test)]
use crate::modules::store::{RequestStore, StoreError, TreatmentRecord};

/// In-memory store that records inserts, optionally failing them all
/// with a fixed message.
#[cfg(test)]
pub struct RecordingStore {
    records: Mutex<Vec<TreatmentRecord>>,
    failure: Option<String>,
}

#[cfg(test)]
impl RecordingStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing_with(message: &str) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn records(&self) -> Vec<TreatmentRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl RequestStore for RecordingStore {
    async fn insert(&self, record: TreatmentRecord) -> Result<(), StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::new(message.clone()));
        }
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

/// Submission routes wired to the given store, as the server builds them.
#[cfg(test)]
pub fn submission_router(store: Arc<RecordingStore>) -> Router {
    routes::routes(Arc::new(QuoteRequestService::new(store)))
}

/// Serve the submission routes on an ephemeral local port and return the
/// base URL, for driving the form client against a live endpoint.
#[cfg(test)]
pub async fn spawn_submission_server(store: Arc<RecordingStore>) -> String {
    let app = submission_router(store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });
    format!("http://{}", addr)
}
