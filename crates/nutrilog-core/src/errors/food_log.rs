// ABOUTME: Food log specific rejection types for add, delete, and parse operations
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Log Error Types
//!
//! Rejections produced by the food log service. None of them are fatal: each
//! is scoped to a single request and leaves the log untouched.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors specific to food log operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoodLogError {
    /// Input was empty after trimming
    #[error("input is empty")]
    EmptyInput,

    /// No whitespace-delimited token matched a catalog key
    #[error("no catalog food recognized in {input:?}")]
    NoFoodRecognized {
        /// The rejected input, as submitted
        input: String,
    },

    /// Delete index outside `[0, len)`
    #[error("index {index:?} out of range for log of length {len}")]
    IndexOutOfRange {
        /// Requested index, `None` when the client omitted it
        index: Option<i64>,
        /// Length of the log at the time of the request
        len: usize,
    },
}

impl FoodLogError {
    /// Error code for this rejection
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyInput => ErrorCode::EmptyInput,
            Self::NoFoodRecognized { .. } => ErrorCode::NoFoodRecognized,
            Self::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
        }
    }
}

impl From<FoodLogError> for AppError {
    fn from(error: FoodLogError) -> Self {
        let code = error.code();
        Self::from_code(code).with_source(error)
    }
}
