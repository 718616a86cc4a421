//! HTTP API module for the score estimator.
//!
//! This module exposes the estimators and the mock-credit ledger as JSON
//! endpoints for the result pages.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CategoryRequest, FullExamRequest, GrantRequest, SubjectRequest};
pub use response::{ApiError, CategoryResponse, GrantResponse, MockStartResponse};
pub use state::AppState;
