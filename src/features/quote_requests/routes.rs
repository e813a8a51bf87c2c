use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::quote_requests::handlers;
use crate::features::quote_requests::services::QuoteRequestService;
use crate::shared::constants::SUBMIT_REQUEST_PATH;

/// Create routes for the quote request feature
///
/// Note: the endpoint is public (no authentication required); it backs
/// the patient-facing quote form.
pub fn routes(service: Arc<QuoteRequestService>) -> Router {
    Router::new()
        .route(SUBMIT_REQUEST_PATH, post(handlers::submit_request))
        .with_state(service)
}
