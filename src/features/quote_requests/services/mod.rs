mod quote_request_service;

pub use quote_request_service::QuoteRequestService;
