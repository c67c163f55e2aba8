// ABOUTME: Weekly progress reporter that synthesizes a fabricated seven-day history
// ABOUTME: Random foods, quantities, and streak drawn from an injectable seedable source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress Reporter
//!
//! Produces a weekly summary that is *not* derived from the food log: every
//! call draws a new history for the seven days before `today` from the
//! catalog, computes per-day totals and macro averages, and picks a streak at
//! random.
//!
//! The random source is a [`StdRng`] seeded either from configuration or from
//! OS entropy. [`ProgressReporter::report_with`] accepts any [`Rng`] so callers
//! can assert exact output for a known seed.

use crate::catalog::NutritionCatalog;
use crate::constants::progress::{
    ENTRIES_PER_DAY, GRAMS_PROBABILITY, GRAMS_RANGE, HISTORY_DAYS, QUANTITY_RANGE, STREAK_RANGE,
};
use chrono::{Days, NaiveDate};
use nutrilog_core::models::{DayRecord, LogEntry, MacroAverages, ParsedFood, ProgressReport};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Synthesizes weekly progress from the catalog
pub struct ProgressReporter {
    catalog: Arc<NutritionCatalog>,
    rng: Mutex<StdRng>,
}

impl ProgressReporter {
    /// Reporter seeded with `seed`, or from OS entropy when `None`
    #[must_use]
    pub fn new(catalog: Arc<NutritionCatalog>, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            catalog,
            rng: Mutex::new(rng),
        }
    }

    /// Draw a report from the reporter's own random source
    pub async fn report(&self, today: NaiveDate) -> ProgressReport {
        let mut rng = self.rng.lock().await;
        self.report_with(&mut *rng, today)
    }

    /// Draw a report from `rng`
    pub fn report_with<R: Rng + ?Sized>(&self, rng: &mut R, today: NaiveDate) -> ProgressReport {
        let week = self.synthesize_week(rng, today);
        let daily_totals: Vec<_> = week.iter().map(DayRecord::totals).collect();
        let averages = MacroAverages::over_days(&daily_totals);
        let streak = rng.gen_range(STREAK_RANGE.0..=STREAK_RANGE.1);

        debug!(
            days = week.len(),
            streak,
            avg.calories = averages.calories,
            "Synthesized progress report"
        );

        ProgressReport {
            streak,
            averages,
            total_days: week.len(),
            week_data: week.iter().map(DayRecord::summary).collect(),
        }
    }

    /// Seven synthetic days ending the day before `today`, oldest first
    pub fn synthesize_week<R: Rng + ?Sized>(&self, rng: &mut R, today: NaiveDate) -> Vec<DayRecord> {
        (1..=HISTORY_DAYS)
            .rev()
            .filter_map(|days_ago| today.checked_sub_days(Days::new(u64::from(days_ago))))
            .map(|date| {
                let count = rng.gen_range(ENTRIES_PER_DAY.0..=ENTRIES_PER_DAY.1);
                let entries = (0..count)
                    .filter_map(|_| self.synthesize_entry(rng))
                    .collect();
                DayRecord { date, entries }
            })
            .collect()
    }

    /// One random catalog food; `None` only when the catalog is empty
    fn synthesize_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<LogEntry> {
        let food = self.catalog.entries().choose(rng)?;
        let quantity = rng.gen_range(QUANTITY_RANGE.0..=QUANTITY_RANGE.1);
        let grams = if rng.gen_bool(GRAMS_PROBABILITY) {
            rng.gen_range(GRAMS_RANGE.0..=GRAMS_RANGE.1)
        } else {
            0
        };

        let parsed = ParsedFood {
            food_name: food.name.clone(),
            grams,
            quantity_items: quantity,
        };
        let raw_input = format!("{quantity} {}", food.name);

        Some(LogEntry::from_parsed(parsed, &raw_input, food.per_unit))
    }
}
