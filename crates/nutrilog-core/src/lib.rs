// ABOUTME: Core types for the Nutrilog food logging service
// ABOUTME: Foundation crate with error handling and nutrition data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrilog Core
//!
//! Foundation crate providing shared types for the Nutrilog food logging
//! service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **models**: Nutrient vectors, log entries, and progress report types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (nutrient vectors, log entries, progress reports)
pub mod models;
