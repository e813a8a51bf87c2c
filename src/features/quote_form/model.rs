use chrono::NaiveDate;

/// Closed set of treatments offered by the quote form.
///
/// The selection control only offers these, which is the whole
/// client-side enforcement; the server takes the label as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    GeneralSurgery,
    Orthopedics,
    Cardiology,
    Neurology,
    Oncology,
    Dental,
    Other,
}

impl Treatment {
    /// Options in the order the form presents them.
    pub const ALL: [Treatment; 7] = [
        Treatment::GeneralSurgery,
        Treatment::Orthopedics,
        Treatment::Cardiology,
        Treatment::Neurology,
        Treatment::Oncology,
        Treatment::Dental,
        Treatment::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Treatment::GeneralSurgery => "General Surgery",
            Treatment::Orthopedics => "Orthopedics",
            Treatment::Cardiology => "Cardiology",
            Treatment::Neurology => "Neurology",
            Treatment::Oncology => "Oncology",
            Treatment::Dental => "Dental",
            Treatment::Other => "Other",
        }
    }
}

/// In-progress quote request held by the form.
///
/// Lives only in form memory: reset to defaults on a confirmed
/// successful submission, preserved on failure so the user keeps
/// their input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreatmentRequestDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub treatment: Option<Treatment>,
    pub has_date: bool,
    pub planned_date: Option<NaiveDate>,
    pub message: String,
}

/// Submission lifecycle of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Succeeded { notice: String },
    Failed { notice: String },
}

impl SubmitStatus {
    /// Transient notification text for the current state, if any.
    pub fn notice(&self) -> Option<&str> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Submitting => Some(SUBMITTING_NOTICE),
            SubmitStatus::Succeeded { notice } | SubmitStatus::Failed { notice } => Some(notice),
        }
    }
}

/// Shown while a submission is outstanding.
pub const SUBMITTING_NOTICE: &str = "Submitting request...";

/// Shown once the server confirms the submission.
pub const SUBMITTED_NOTICE: &str = "Request submitted successfully!";

/// Fallback shown when a failure carries no usable message.
pub const SUBMIT_FAILED_NOTICE: &str = "Error submitting form. Please try again.";
