// ABOUTME: Unified error handling with standard error codes and HTTP response formatting
// ABOUTME: Defines ErrorCode, AppError, and the single JSON failure body used by every endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the Nutrilog
//! server. It defines standard error codes, their HTTP status mapping, and the
//! response body every failure is rendered with:
//!
//! ```json
//! { "success": false, "error": "EMPTY_INPUT", "message": "Please enter some food!" }
//! ```

/// Food log domain rejections
pub mod food_log;

pub use food_log::FoodLogError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "EMPTY_INPUT")]
    EmptyInput = 3000,
    #[serde(rename = "NO_FOOD_RECOGNIZED")]
    NoFoodRecognized = 3001,
    #[serde(rename = "INDEX_OUT_OF_RANGE")]
    IndexOutOfRange = 3002,
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3003,

    // Routing (4000-4999)
    #[serde(rename = "ROUTE_NOT_FOUND")]
    RouteNotFound = 4000,
    #[serde(rename = "METHOD_NOT_ALLOWED")]
    MethodNotAllowed = 4001,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::EmptyInput
            | Self::NoFoodRecognized
            | Self::IndexOutOfRange
            | Self::InvalidInput => 400,

            // 404 Not Found
            Self::RouteNotFound => 404,

            // 405 Method Not Allowed
            Self::MethodNotAllowed => 405,

            // 500 Internal Server Error
            Self::InternalError => 500,
        }
    }

    /// Default user-facing message for this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::EmptyInput => "Please enter some food!",
            Self::NoFoodRecognized => "No food items found. Try: apple, chicken, rice, etc.",
            Self::IndexOutOfRange => "Invalid food index",
            Self::InvalidInput => "The request body is not valid JSON for this endpoint",
            Self::RouteNotFound => "Not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message, returned to clients verbatim
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an `AppError` carrying the code's default message
    #[must_use]
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.description())
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Input was empty or whitespace only
    #[must_use]
    pub fn empty_input() -> Self {
        Self::from_code(ErrorCode::EmptyInput)
    }

    /// No token of the input matched the catalog
    #[must_use]
    pub fn no_food_recognized() -> Self {
        Self::from_code(ErrorCode::NoFoodRecognized)
    }

    /// Delete index outside the current log
    #[must_use]
    pub fn index_out_of_range() -> Self {
        Self::from_code(ErrorCode::IndexOutOfRange)
    }

    /// Malformed request payload
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Path known, method not supported
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::from_code(ErrorCode::MethodNotAllowed)
    }

    /// Unknown path
    pub fn route_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RouteNotFound, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Machine-readable error code
    pub error: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        // Internal details never leave the process
        let message = if error.code == ErrorCode::InternalError {
            ErrorCode::InternalError.description().to_owned()
        } else {
            error.message
        };

        Self {
            success: false,
            error: error.code,
            message,
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if self.code == ErrorCode::InternalError {
            tracing::error!(error = %self, source = ?self.source, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::EmptyInput.http_status(), 400);
        assert_eq!(ErrorCode::NoFoodRecognized.http_status(), 400);
        assert_eq!(ErrorCode::IndexOutOfRange.http_status(), 400);
        assert_eq!(ErrorCode::RouteNotFound.http_status(), 404);
        assert_eq!(ErrorCode::MethodNotAllowed.http_status(), 405);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::empty_input());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "EMPTY_INPUT");
        assert_eq!(json["message"], "Please enter some food!");
    }

    #[test]
    fn test_internal_message_is_masked() {
        let error = AppError::internal("lock poisoned at food_log.rs:42");
        let response = ErrorResponse::from(error);

        assert_eq!(response.error, ErrorCode::InternalError);
        assert_eq!(response.message, "Internal server error");
    }

    #[test]
    fn test_route_not_found_keeps_custom_message() {
        let response = ErrorResponse::from(AppError::route_not_found("Endpoint not found"));
        assert_eq!(response.message, "Endpoint not found");
    }
}
