// ABOUTME: Core data models for food logging and progress reporting
// ABOUTME: Re-exports nutrition and progress types for the server crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrient vectors and food log entries
pub mod nutrition;
/// Weekly progress report types
pub mod progress;

pub use nutrition::{totals_of, LogEntry, NutrientVector, ParsedFood, Totals};
pub use progress::{DayRecord, DaySummary, MacroAverages, ProgressReport};
