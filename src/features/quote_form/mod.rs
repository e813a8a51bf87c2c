//! Patient-facing quote form component.
//!
//! Owns the in-memory draft, the submission status machine, and the HTTP
//! client that hands completed drafts to the submission endpoint. An
//! embedding surface renders the fields and drives the update and submit
//! operations; nothing here runs inside the server process.

#![allow(dead_code)]

pub mod client;
pub mod controller;
pub mod model;

pub use controller::QuoteForm;
