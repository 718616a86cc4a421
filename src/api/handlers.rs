//! HTTP request handlers for the score estimator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::estimate_college_category;
use crate::error::EngineError;
use crate::models::CreditKey;

use super::request::{CategoryRequest, FullExamRequest, GrantRequest, SubjectRequest};
use super::response::{
    ApiError, ApiErrorResponse, CategoryResponse, GrantResponse, MockStartResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/percentile/full", post(full_exam_handler))
        .route("/percentile/subject", post(subject_handler))
        .route("/category", post(category_handler))
        .route("/mocks/credits", get(credits_handler))
        .route("/mocks/:key/start", post(start_mock_handler))
        .route("/mocks/:key/grant", post(grant_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /percentile/full.
async fn full_exam_handler(payload: Result<Json<FullExamRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing full exam estimate");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = request.estimate();
    info!(
        correlation_id = %correlation_id,
        exam = %request.exam,
        score = request.score,
        percentile = %result.percentile,
        rank = result.rank,
        duration_us = start_time.elapsed().as_micros(),
        "Full exam estimate completed"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for POST /percentile/subject.
async fn subject_handler(payload: Result<Json<SubjectRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing subject estimate");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match request.estimate() {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                exam = %request.exam,
                subject = %request.subject,
                percentage = result.percentage,
                percentile = %result.percentile,
                "Subject estimate completed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /category.
async fn category_handler(payload: Result<Json<CategoryRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing category estimate");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let categories = estimate_college_category(request.exam, request.percentile);
    info!(
        correlation_id = %correlation_id,
        exam = %request.exam,
        percentile = %request.percentile,
        categories = categories.len(),
        "Category estimate completed"
    );

    json_response(
        StatusCode::OK,
        CategoryResponse {
            exam: request.exam,
            percentile: request.percentile,
            categories: categories.iter().map(|c| c.to_string()).collect(),
        },
    )
}

/// Handler for GET /mocks/credits.
async fn credits_handler(State(state): State<AppState>) -> Response {
    let snapshot = state.with_credits(|ledger| ledger.snapshot());
    json_response(StatusCode::OK, snapshot)
}

/// Handler for POST /mocks/:key/start.
///
/// Spends one credit for `key`; the attempt may only start on success.
async fn start_mock_handler(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, key = %key, "Processing mock start");

    let outcome = key
        .parse::<CreditKey>()
        .and_then(|key| state.with_credits(|ledger| ledger.consume(key)).map(|left| (key, left)));

    match outcome {
        Ok((key, remaining)) => {
            let response = MockStartResponse {
                attempt_id: Uuid::new_v4(),
                started_at: Utc::now(),
                key,
                remaining,
            };
            info!(
                correlation_id = %correlation_id,
                attempt_id = %response.attempt_id,
                key = %key,
                remaining,
                "Mock attempt started"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /mocks/:key/grant.
async fn grant_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: Result<Json<GrantRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, key = %key, "Processing credit grant");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let key = match key.parse::<CreditKey>() {
        Ok(key) => key,
        Err(err) => return error_response(correlation_id, err),
    };

    let remaining = state.with_credits(|ledger| ledger.grant(key, request.credits));
    info!(
        correlation_id = %correlation_id,
        key = %key,
        credits = request.credits,
        remaining,
        "Mock credits granted"
    );

    json_response(StatusCode::OK, GrantResponse { key, remaining })
}
