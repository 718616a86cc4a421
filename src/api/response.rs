//! Response types for the score estimator API.
//!
//! This module defines the success bodies that are not plain estimator
//! results, plus the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{CreditKey, Exam};

/// Response body for `POST /category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    /// The exam whose ladder was used.
    pub exam: Exam,
    /// The percentile that was estimated.
    pub percentile: Decimal,
    /// Plausible categories, most prestigious first.
    pub categories: Vec<String>,
}

/// Response body for `POST /mocks/:key/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockStartResponse {
    /// Identifier for the newly started attempt.
    pub attempt_id: Uuid,
    /// When the attempt was started.
    pub started_at: DateTime<Utc>,
    /// The credit key that was charged.
    pub key: CreditKey,
    /// Credits left for `key` after this attempt.
    pub remaining: u32,
}

/// Response body for `POST /mocks/:key/grant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantResponse {
    /// The credit key that was topped up.
    pub key: CreditKey,
    /// Balance for `key` after the grant.
    pub remaining: u32,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::UnknownCreditKey { key } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "UNKNOWN_CREDIT_KEY",
                    message,
                    format!("'{}' is not one of the mock credit keys", key),
                ),
            },
            EngineError::CreditsExhausted { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "CREDITS_EXHAUSTED",
                    message,
                    "No mock attempts of this kind remain for the session",
                ),
            },
            EngineError::InvalidRequest { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            EngineError::InvalidBandTable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Score tables are misconfigured",
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_unknown_credit_key_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::UnknownCreditKey {
            key: "bogus".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "UNKNOWN_CREDIT_KEY");
        assert!(api_error.error.message.contains("bogus"));
    }

    #[test]
    fn test_credits_exhausted_maps_to_409() {
        let api_error: ApiErrorResponse = EngineError::CreditsExhausted {
            key: "neet_full_length_mock_credits".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "CREDITS_EXHAUSTED");
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidRequest {
            field: "max_score".to_string(),
            message: "required for NEET subject scores".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("max_score"));
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "./config/server.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_mock_start_response_serializes_key_as_string() {
        let response = MockStartResponse {
            attempt_id: Uuid::new_v4(),
            started_at: Utc::now(),
            key: "jee_main_sectional_mock_credits".parse().unwrap(),
            remaining: 9,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["key"], "jee_main_sectional_mock_credits");
        assert_eq!(json["remaining"], 9);
    }
}
