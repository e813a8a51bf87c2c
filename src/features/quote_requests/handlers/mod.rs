pub mod submit_request_handler;

pub use submit_request_handler::{__path_submit_request, submit_request};
