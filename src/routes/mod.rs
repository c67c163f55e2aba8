// ABOUTME: Route module organization for the Nutrilog HTTP API
// ABOUTME: Declares route groups and the shared fallback handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Nutrilog server
//!
//! Routes are grouped by domain:
//! - `food_log`: add, delete, clear and totals over the shared log
//! - `progress`: the synthesized weekly summary
//! - `health`: liveness and readiness probes

/// Food log routes
pub mod food_log;
/// Health check routes
pub mod health;
/// Weekly progress routes
pub mod progress;

pub use food_log::FoodLogRoutes;
pub use health::HealthRoutes;
pub use progress::ProgressRoutes;

use crate::constants::api;
use nutrilog_core::errors::AppError;

/// Known path, unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

/// Unknown path under the API prefix
pub async fn endpoint_not_found() -> AppError {
    AppError::route_not_found(api::ENDPOINT_NOT_FOUND)
}

/// Unknown path anywhere else
pub async fn not_found() -> AppError {
    AppError::route_not_found(api::NOT_FOUND)
}
