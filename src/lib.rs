//! Score estimation for JEE Main and NEET mock tests.
//!
//! This crate converts raw mock-test scores into percentiles, estimated ranks,
//! score-band breakdowns and admission-category estimates, and serves them over
//! a small JSON API together with an in-memory mock-credit ledger.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
