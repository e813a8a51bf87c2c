pub mod quote_form;
pub mod quote_requests;
