//! Treatment quote request intake.
//!
//! Receives submissions from the public quote form and records them in
//! the `treatment_requests` table. Only field presence is validated here;
//! the form owns the treatment choices and any format hinting.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/submit-request` | No | Submit a treatment quote request |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuoteRequestService;
