// ABOUTME: Panic handler for the catch-panic layer producing the standard error body
// ABOUTME: Logs the panic payload and answers 500 INTERNAL_ERROR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::response::{IntoResponse, Response};
use nutrilog_core::errors::AppError;
use std::any::Any;
use tracing::error;

/// Turn a caught handler panic into a 500 response
#[allow(clippy::needless_pass_by_value)] // signature required by CatchPanicLayer::custom
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    error!(panic = detail, "Request handler panicked");

    AppError::internal(detail).into_response()
}
