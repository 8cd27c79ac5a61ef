//! Response types for the Parking Engine API.
//!
//! This module defines the error response structures and the mapping from
//! [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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

    /// Translates an axum JSON extractor rejection.
    ///
    /// Missing fields count as validation errors; anything else the body
    /// got wrong is reported as malformed JSON.
    pub fn from_json_rejection(rejection: &JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let body_text = err.body_text();
                if body_text.contains("missing field") {
                    Self::validation_error(body_text)
                } else {
                    Self::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                Self::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => Self::new(
                "MISSING_CONTENT_TYPE",
                "Content-Type must be application/json",
            ),
            _ => Self::malformed_json("Failed to parse request body"),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Wraps a client error body as a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();

        let (status, error) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::InvalidPricingRule { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    "Rules look like '1 hour = $5, 2 hours = $8, more than 2 hours = $10'",
                ),
            ),
            EngineError::InvalidDuration { .. }
            | EngineError::InvalidRate { .. }
            | EngineError::InvalidStay { .. }
            | EngineError::InvalidLicensePlate { .. }
            | EngineError::InvalidSettings { .. } => {
                (StatusCode::BAD_REQUEST, ApiError::validation_error(message))
            }
            EngineError::AmountOverflow { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("AMOUNT_OVERFLOW", message),
            ),
            EngineError::SlotNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("SLOT_NOT_FOUND", message),
            ),
            EngineError::VehicleNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("VEHICLE_NOT_FOUND", message),
            ),
            EngineError::SlotOccupied { .. } => {
                (StatusCode::CONFLICT, ApiError::new("SLOT_OCCUPIED", message))
            }
            EngineError::SlotVacant { .. } => {
                (StatusCode::CONFLICT, ApiError::new("SLOT_VACANT", message))
            }
            EngineError::VehicleAlreadyParked { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("VEHICLE_ALREADY_PARKED", message),
            ),
        };

        ApiErrorResponse { status, error }
    }
}
