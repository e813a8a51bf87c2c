use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::quote_requests::dtos::{SubmitRequestDto, SubmitResponseDto};
use crate::features::quote_requests::services::QuoteRequestService;
use crate::shared::constants::MISSING_REQUIRED_FIELDS;
use crate::shared::types::ErrorBody;

/// Accept a treatment quote request from the public form
///
/// Any absent or empty required field collapses to the single
/// "Missing required fields" rejection; no format or enum-membership
/// checks happen on this side.
#[utoipa::path(
    post,
    path = "/api/submit-request",
    request_body = SubmitRequestDto,
    responses(
        (status = 200, description = "Request recorded", body = SubmitResponseDto),
        (status = 400, description = "Missing required fields", body = ErrorBody),
        (status = 500, description = "Store failure or unexpected error", body = ErrorBody)
    ),
    tag = "quote-requests"
)]
pub async fn submit_request(
    State(service): State<Arc<QuoteRequestService>>,
    AppJson(dto): AppJson<SubmitRequestDto>,
) -> Result<Json<SubmitResponseDto>> {
    dto.validate()
        .map_err(|_| AppError::Validation(MISSING_REQUIRED_FIELDS.to_string()))?;

    service.submit(dto).await?;

    Ok(Json(SubmitResponseDto { success: true }))
}
