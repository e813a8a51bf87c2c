use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for the public quote form submission.
///
/// The four contact fields are required but their shape is not checked:
/// presence is the whole server-side contract, so `treatment` is plain
/// text here even though the form offers a fixed list.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestDto {
    /// Patient name
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    /// Contact email
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    /// Contact phone number
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,

    /// Treatment of interest
    #[validate(required, length(min = 1))]
    pub treatment: Option<String>,

    /// Planned treatment date, forwarded to the store as-is
    pub planned_date: Option<String>,

    /// Optional free-text message
    pub message: Option<String>,
}

/// Response DTO for a stored submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponseDto {
    pub success: bool,
}
