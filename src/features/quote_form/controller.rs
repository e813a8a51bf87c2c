use chrono::NaiveDate;

use crate::features::quote_form::client::{SubmitClient, SubmitError};
use crate::features::quote_form::model::{
    SubmitStatus, Treatment, TreatmentRequestDraft, SUBMITTED_NOTICE, SUBMIT_FAILED_NOTICE,
};

/// Quote form component: owns the draft, the submission status, and the
/// client used to hand completed drafts to the server.
pub struct QuoteForm {
    draft: TreatmentRequestDraft,
    status: SubmitStatus,
    client: SubmitClient,
}

impl QuoteForm {
    pub fn new(client: SubmitClient) -> Self {
        Self {
            draft: TreatmentRequestDraft::default(),
            status: SubmitStatus::Idle,
            client,
        }
    }

    pub fn draft(&self) -> &TreatmentRequestDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    // Field updates replace one value and leave the rest of the draft alone.

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.draft.phone = phone.into();
    }

    pub fn select_treatment(&mut self, treatment: Treatment) {
        self.draft.treatment = Some(treatment);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.draft.message = message.into();
    }

    /// "I have a date in mind"
    pub fn choose_date_known(&mut self) {
        self.draft.has_date = true;
    }

    /// "I don't have a date in mind" — also clears any picked date.
    pub fn choose_date_unknown(&mut self) {
        self.draft.has_date = false;
        self.draft.planned_date = None;
    }

    /// Pick or clear the planned date. Only applies while a date is
    /// expected; the picker is not offered otherwise.
    pub fn set_planned_date(&mut self, date: Option<NaiveDate>) {
        if self.draft.has_date {
            self.draft.planned_date = date;
        }
    }

    /// Submit the current draft.
    ///
    /// Gated while a submission is outstanding: a second call is refused
    /// without issuing a request, and the gate re-opens once the response
    /// settles. On success the draft resets to defaults; on failure it
    /// is preserved.
    pub async fn submit(&mut self) -> SubmitStatus {
        if self.status == SubmitStatus::Submitting {
            return self.status.clone();
        }

        self.status = SubmitStatus::Submitting;

        let outcome = self.client.submit(&self.draft).await;

        self.status = match outcome {
            Ok(()) => {
                self.draft = TreatmentRequestDraft::default();
                SubmitStatus::Succeeded {
                    notice: SUBMITTED_NOTICE.to_string(),
                }
            }
            Err(err) => {
                let mut notice = match err {
                    SubmitError::Rejected(message) => message,
                    other => other.to_string(),
                };
                if notice.is_empty() {
                    notice = SUBMIT_FAILED_NOTICE.to_string();
                }
                SubmitStatus::Failed { notice }
            }
        };

        self.status.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::shared::test_helpers::{spawn_submission_server, RecordingStore};

    fn form_against(base_url: &str) -> QuoteForm {
        QuoteForm::new(SubmitClient::new(base_url))
    }

    fn fill(form: &mut QuoteForm) {
        form.set_name("Jane Doe");
        form.set_email("jane@x.com");
        form.set_phone("555-1234");
        form.select_treatment(Treatment::Dental);
    }

    #[test]
    fn starts_with_an_empty_draft() {
        let form = form_against("http://localhost");
        assert_eq!(*form.draft(), TreatmentRequestDraft::default());
        assert_eq!(*form.status(), SubmitStatus::Idle);
        assert_eq!(form.status().notice(), None);
    }

    #[test]
    fn field_updates_leave_other_fields_untouched() {
        let mut form = form_against("http://localhost");
        fill(&mut form);
        form.set_message("hello");

        form.set_phone("555-9999");

        let draft = form.draft();
        assert_eq!(draft.name, "Jane Doe");
        assert_eq!(draft.email, "jane@x.com");
        assert_eq!(draft.phone, "555-9999");
        assert_eq!(draft.treatment, Some(Treatment::Dental));
        assert_eq!(draft.message, "hello");
    }

    #[test]
    fn switching_to_no_date_clears_the_picked_date() {
        let mut form = form_against("http://localhost");
        form.choose_date_known();
        form.set_planned_date(NaiveDate::from_ymd_opt(2026, 9, 14));
        assert_eq!(
            form.draft().planned_date,
            NaiveDate::from_ymd_opt(2026, 9, 14)
        );

        form.choose_date_unknown();

        assert!(!form.draft().has_date);
        assert_eq!(form.draft().planned_date, None);
    }

    #[test]
    fn the_picker_is_inert_until_a_date_is_expected() {
        let mut form = form_against("http://localhost");
        form.set_planned_date(NaiveDate::from_ymd_opt(2026, 9, 14));
        assert_eq!(form.draft().planned_date, None);
    }

    #[tokio::test]
    async fn successful_submission_resets_the_draft() {
        let store = Arc::new(RecordingStore::new());
        let base_url = spawn_submission_server(Arc::clone(&store)).await;
        let mut form = form_against(&base_url);
        fill(&mut form);
        form.choose_date_known();
        form.set_planned_date(NaiveDate::from_ymd_opt(2026, 9, 14));

        let status = form.submit().await;

        assert_eq!(
            status,
            SubmitStatus::Succeeded {
                notice: SUBMITTED_NOTICE.to_string()
            }
        );
        assert_eq!(*form.draft(), TreatmentRequestDraft::default());

        let records = store.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].treatment, "Dental");
        assert_eq!(records[0].planned_date.as_deref(), Some("2026-09-14"));
    }

    #[tokio::test]
    async fn server_rejection_preserves_the_draft_and_surfaces_the_message() {
        let store = Arc::new(RecordingStore::new());
        let base_url = spawn_submission_server(Arc::clone(&store)).await;
        let mut form = form_against(&base_url);
        // treatment left unselected: serialized as "", rejected server-side
        form.set_name("Jane Doe");
        form.set_email("jane@x.com");
        form.set_phone("555-1234");

        let status = form.submit().await;

        assert_eq!(
            status,
            SubmitStatus::Failed {
                notice: "Missing required fields".to_string()
            }
        );
        assert_eq!(form.draft().name, "Jane Doe");
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn store_failure_reaches_the_form_verbatim() {
        let store = Arc::new(RecordingStore::failing_with("connection refused"));
        let base_url = spawn_submission_server(store).await;
        let mut form = form_against(&base_url);
        fill(&mut form);

        let status = form.submit().await;

        assert_eq!(
            status,
            SubmitStatus::Failed {
                notice: "connection refused".to_string()
            }
        );
        assert_eq!(form.draft().name, "Jane Doe");
    }

    #[tokio::test]
    async fn transport_failures_keep_the_draft_and_report_a_notice() {
        // nothing listens on this port
        let mut form = form_against("http://127.0.0.1:9");
        fill(&mut form);

        let status = form.submit().await;

        match status {
            SubmitStatus::Failed { notice } => assert!(!notice.is_empty()),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(form.draft().name, "Jane Doe");
    }

    #[tokio::test]
    async fn a_second_submit_is_gated_while_one_is_outstanding() {
        let mut form = form_against("http://127.0.0.1:9");
        fill(&mut form);

        {
            // the embedding surface drops the in-flight future
            let mut in_flight = tokio_test::task::spawn(form.submit());
            assert!(in_flight.poll().is_pending());
        }

        assert_eq!(*form.status(), SubmitStatus::Submitting);

        // gate refuses to issue another request until the first settles
        let status = form.submit().await;
        assert_eq!(status, SubmitStatus::Submitting);
    }
}
