// ABOUTME: Weekly progress report models for synthesized nutrition history
// ABOUTME: DayRecord, DaySummary, MacroAverages, and ProgressReport definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::{totals_of, LogEntry, NutrientVector, Totals};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One synthesized day of history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar date of the day
    pub date: NaiveDate,
    /// Synthetic entries logged that day
    pub entries: Vec<LogEntry>,
}

impl DayRecord {
    /// Sum of nutrition across the day
    #[must_use]
    pub fn totals(&self) -> Totals {
        totals_of(&self.entries)
    }

    /// Summarize for the wire
    #[must_use]
    pub fn summary(&self) -> DaySummary {
        DaySummary {
            date: self.date,
            day_name: self.date.format("%A").to_string(),
            totals: self.totals(),
            food_count: self.entries.len(),
        }
    }
}

/// Per-day entry of the progress response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// English weekday name
    pub day_name: String,
    /// Nutrient totals for the day
    pub totals: Totals,
    /// Number of entries logged that day
    pub food_count: usize,
}

/// Average daily intake. Fiber is not averaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroAverages {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl MacroAverages {
    /// Divide summed daily totals by the number of days
    #[must_use]
    pub fn over_days(daily_totals: &[Totals]) -> Self {
        if daily_totals.is_empty() {
            return Self::default();
        }

        let sum: NutrientVector = daily_totals.iter().sum();
        let days = daily_totals.len() as f64;

        Self {
            calories: sum.calories / days,
            protein: sum.protein / days,
            carbs: sum.carbs / days,
            fat: sum.fat / days,
        }
    }
}

/// Body of the weekly progress view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Consecutive logging days (fabricated)
    pub streak: u32,
    /// Average daily macros over the week
    pub averages: MacroAverages,
    /// One summary per day, oldest first
    pub week_data: Vec<DaySummary>,
    /// Number of days covered
    pub total_days: usize,
}
