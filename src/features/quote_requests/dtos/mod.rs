pub mod submit_request_dto;

pub use submit_request_dto::{SubmitRequestDto, SubmitResponseDto};
