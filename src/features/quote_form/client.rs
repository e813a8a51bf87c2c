use serde::Serialize;
use thiserror::Error;

use crate::features::quote_form::model::{Treatment, TreatmentRequestDraft};
use crate::shared::constants::SUBMIT_REQUEST_PATH;

/// Default message when the server rejects a submission without an
/// error body.
pub const REJECTED_FALLBACK: &str = "Failed to submit request";

/// Wire payload for a draft snapshot.
///
/// Mirrors the endpoint contract; `hasDate` rides along and is ignored
/// server-side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitPayload<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    treatment: &'a str,
    has_date: bool,
    planned_date: Option<String>,
    message: &'a str,
}

impl<'a> SubmitPayload<'a> {
    fn from_draft(draft: &'a TreatmentRequestDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            phone: &draft.phone,
            treatment: draft.treatment.map(Treatment::label).unwrap_or(""),
            has_date: draft.has_date,
            planned_date: draft.planned_date.map(|d| d.format("%Y-%m-%d").to_string()),
            message: &draft.message,
        }
    }
}

/// Submission failure as seen by the form.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server answered with a non-2xx status; carries the server's
    /// error message when one was provided.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a usable response.
    #[error("Failed to submit request: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client issuing quote form submissions.
pub struct SubmitClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SubmitClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST the draft snapshot to the submission endpoint.
    pub async fn submit(&self, draft: &TreatmentRequestDraft) -> Result<(), SubmitError> {
        let url = format!("{}{}", self.base_url, SUBMIT_REQUEST_PATH);
        let payload = SubmitPayload::from_draft(draft);

        tracing::debug!("Submitting quote request to {}", url);

        let response = self.http_client.post(&url).json(&payload).send().await?;

        let status = response.status();
        let body: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or(REJECTED_FALLBACK)
                .to_string();
            return Err(SubmitError::Rejected(message));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::features::quote_form::model::Treatment;

    #[test]
    fn payload_serializes_the_whole_draft_in_camel_case() {
        let draft = TreatmentRequestDraft {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-1234".to_string(),
            treatment: Some(Treatment::GeneralSurgery),
            has_date: true,
            planned_date: NaiveDate::from_ymd_opt(2026, 9, 14),
            message: "hello".to_string(),
        };

        let value = serde_json::to_value(SubmitPayload::from_draft(&draft)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-1234",
                "treatment": "General Surgery",
                "hasDate": true,
                "plannedDate": "2026-09-14",
                "message": "hello"
            })
        );
    }

    #[test]
    fn unselected_treatment_serializes_empty() {
        let draft = TreatmentRequestDraft::default();
        let value = serde_json::to_value(SubmitPayload::from_draft(&draft)).unwrap();
        assert_eq!(value["treatment"], json!(""));
        assert_eq!(value["plannedDate"], json!(null));
    }
}
