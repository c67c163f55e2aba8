// ABOUTME: Food log service that parses free text, appends entries, and sums nutrition
// ABOUTME: Owns the shared in-memory log and serializes every mutation behind a write lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Log Service
//!
//! The log is an ordered sequence of [`LogEntry`] values in the order they
//! were added. Entries are addressed by position: deleting index `i` shifts
//! every later entry down by one.
//!
//! Each mutating operation holds the write lock for its whole
//! read-modify-write, including the totals it returns, so a response always
//! describes the state its own mutation produced.

use crate::catalog::NutritionCatalog;
use nutrilog_core::errors::FoodLogError;
use nutrilog_core::models::{totals_of, LogEntry, ParsedFood, Totals};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Result of a successful add
#[derive(Debug, Clone, PartialEq)]
pub struct AddFoodOutcome {
    /// Entries appended by this call, in input order
    pub foods: Vec<LogEntry>,
    /// Totals over the whole log after the append
    pub totals: Totals,
    /// Log length after the append
    pub total_items: usize,
}

/// Result of a successful delete
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    /// The entry that was at the requested position
    pub removed: LogEntry,
    /// Totals over the remaining log
    pub totals: Totals,
    /// Log length after the removal
    pub total_items: usize,
}

/// Single-session food log backed by the nutrition catalog
pub struct FoodLogService {
    catalog: Arc<NutritionCatalog>,
    entries: RwLock<Vec<LogEntry>>,
}

impl FoodLogService {
    /// Empty log over `catalog`
    #[must_use]
    pub fn new(catalog: Arc<NutritionCatalog>) -> Self {
        Self {
            catalog,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Recognize catalog foods in `input`.
    ///
    /// Splits on whitespace, lowercases, and keeps each token that is exactly a
    /// catalog key. Quantities and multi-word names are not recognized.
    #[must_use]
    pub fn parse(&self, input: &str) -> Vec<ParsedFood> {
        input
            .to_lowercase()
            .split_whitespace()
            .filter(|token| self.catalog.contains(token))
            .map(ParsedFood::single)
            .collect()
    }

    /// Parse `input` and append one entry per recognized food.
    ///
    /// # Errors
    ///
    /// `EmptyInput` when `input` is blank, `NoFoodRecognized` when no token
    /// matches. The log is unchanged in both cases.
    pub async fn add_food(&self, input: &str) -> Result<AddFoodOutcome, FoodLogError> {
        if input.trim().is_empty() {
            return Err(FoodLogError::EmptyInput);
        }

        let parsed = self.parse(input);
        if parsed.is_empty() {
            return Err(FoodLogError::NoFoodRecognized {
                input: input.to_owned(),
            });
        }

        let foods: Vec<LogEntry> = parsed
            .into_iter()
            .map(|food| {
                let per_unit = self.catalog.lookup(&food.food_name);
                LogEntry::from_parsed(food, input, per_unit)
            })
            .collect();

        let mut entries = self.entries.write().await;
        entries.extend(foods.iter().cloned());
        let totals = totals_of(&entries);
        let total_items = entries.len();
        drop(entries);

        info!(
            food.recognized = foods.len(),
            log.len = total_items,
            "Foods added to log"
        );

        Ok(AddFoodOutcome {
            foods,
            totals,
            total_items,
        })
    }

    /// Remove the entry at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index` is negative or not below the log length.
    /// The log is unchanged in that case.
    pub async fn delete_food(&self, index: i64) -> Result<DeleteOutcome, FoodLogError> {
        let mut entries = self.entries.write().await;
        let len = entries.len();

        let position = usize::try_from(index)
            .ok()
            .filter(|&position| position < len)
            .ok_or(FoodLogError::IndexOutOfRange {
                index: Some(index),
                len,
            })?;

        let removed = entries.remove(position);
        let totals = totals_of(&entries);
        let total_items = entries.len();
        drop(entries);

        debug!(index, food = %removed.food_name, log.len = total_items, "Food removed from log");

        Ok(DeleteOutcome {
            removed,
            totals,
            total_items,
        })
    }

    /// Empty the log. Always succeeds.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        let cleared = entries.len();
        entries.clear();
        drop(entries);

        info!(cleared, "Food log cleared");
    }

    /// Element-wise nutrition sum over the log, zero when empty
    pub async fn totals(&self) -> Totals {
        totals_of(&self.entries.read().await)
    }

    /// Copy of the current log, oldest first
    pub async fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().await.clone()
    }

    /// Number of entries in the log
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when the log holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrilog_core::models::NutrientVector;

    fn service() -> FoodLogService {
        FoodLogService::new(Arc::new(NutritionCatalog::builtin()))
    }

    #[test]
    fn test_parse_keeps_exact_tokens_only() {
        let parsed = service().parse("2 Banana and EGGS");

        assert_eq!(
            parsed,
            vec![ParsedFood::single("banana"), ParsedFood::single("eggs")]
        );
    }

    #[test]
    fn test_parse_ignores_multi_word_names() {
        let service = service();

        assert!(service.parse("sweet potato").is_empty());
        assert_eq!(
            service.parse("brown rice"),
            vec![ParsedFood::single("rice")]
        );
    }

    #[test]
    fn test_parse_repeated_token_yields_repeated_records() {
        assert_eq!(service().parse("apple apple").len(), 2);
    }

    #[tokio::test]
    async fn test_add_food_scenario_banana_and_eggs() {
        let service = service();
        let outcome = service.add_food("2 banana and eggs").await.unwrap();

        assert_eq!(outcome.foods.len(), 2);
        assert_eq!(outcome.total_items, 2);

        let banana = &outcome.foods[0];
        assert_eq!(banana.food_name, "banana");
        assert_eq!(banana.quantity_items, 1);
        assert!((banana.nutrition.calories - 89.0).abs() < f64::EPSILON);
        assert_eq!(banana.raw_input, "2 banana and eggs");

        let eggs = &outcome.foods[1];
        assert_eq!(eggs.food_name, "eggs");
        assert!((eggs.nutrition.calories - 155.0).abs() < f64::EPSILON);
        assert_eq!(eggs.raw_input, "2 banana and eggs");

        assert!((outcome.totals.calories - 244.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_add_apple_then_totals() {
        let service = service();
        service.add_food("apple").await.unwrap();

        assert_eq!(
            service.totals().await,
            NutrientVector::new(52.0, 0.3, 13.8, 0.2, 2.4)
        );
    }

    #[tokio::test]
    async fn test_add_blank_input_is_rejected_without_mutation() {
        let service = service();
        service.add_food("rice").await.unwrap();

        for input in ["", "   ", "\t\n"] {
            assert_eq!(
                service.add_food(input).await,
                Err(FoodLogError::EmptyInput)
            );
        }
        assert_eq!(service.len().await, 1);
    }

    #[tokio::test]
    async fn test_add_unrecognized_input_is_rejected_without_mutation() {
        let service = service();

        let result = service.add_food("pizza and soda").await;
        assert!(matches!(
            result,
            Err(FoodLogError::NoFoodRecognized { .. })
        ));
        assert!(service.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_removes_entry_at_position() {
        let service = service();
        service.add_food("apple banana eggs").await.unwrap();

        let outcome = service.delete_food(1).await.unwrap();
        assert_eq!(outcome.removed.food_name, "banana");
        assert_eq!(outcome.total_items, 2);

        let names: Vec<String> = service
            .entries()
            .await
            .into_iter()
            .map(|entry| entry.food_name)
            .collect();
        assert_eq!(names, ["apple", "eggs"]);
    }

    #[tokio::test]
    async fn test_delete_only_entry_zeroes_totals() {
        let service = service();
        service.add_food("salmon").await.unwrap();

        let outcome = service.delete_food(0).await.unwrap();
        assert!(outcome.totals.is_zero());
        assert!(service.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_out_of_range_leaves_log() {
        let service = service();
        service.add_food("quinoa").await.unwrap();

        for index in [-1, 1, 42, i64::MIN, i64::MAX] {
            assert_eq!(
                service.delete_food(index).await,
                Err(FoodLogError::IndexOutOfRange {
                    index: Some(index),
                    len: 1
                })
            );
        }
        assert_eq!(service.len().await, 1);
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let service = service();
        service.add_food("oatmeal avocado").await.unwrap();

        service.clear().await;
        assert!(service.is_empty().await);
        assert!(service.totals().await.is_zero());

        service.clear().await;
        assert!(service.is_empty().await);
        assert!(service.totals().await.is_zero());
    }

    #[tokio::test]
    async fn test_totals_match_sum_of_entries() {
        let service = service();
        service.add_food("chicken rice broccoli").await.unwrap();
        service.add_food("almonds").await.unwrap();
        service.delete_food(0).await.unwrap();

        let expected: NutrientVector = service
            .entries()
            .await
            .iter()
            .map(|entry| entry.nutrition)
            .sum();
        assert_eq!(service.totals().await, expected);
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let service = Arc::new(service());

        let tasks: Vec<_> = (0..32)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.add_food("apple banana").await })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(service.len().await, 64);
    }
}
