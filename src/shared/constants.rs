/// Message returned when any required submission field is absent or empty.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// Generic message for unexpected handler failures; the detail stays in
/// the server logs.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Path of the public submission endpoint.
pub const SUBMIT_REQUEST_PATH: &str = "/api/submit-request";
