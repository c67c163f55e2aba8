// ABOUTME: Nutrient vector and food log entry models
// ABOUTME: NutrientVector arithmetic, ParsedFood, and LogEntry definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Nutrients per declared unit (per item for catalog entries)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientVector {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
}

impl NutrientVector {
    /// All-zero vector, returned for unknown foods and empty logs
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0);

    /// Build a vector field by field
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
        }
    }

    /// Multiply every nutrient by `factor`
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
        }
    }

    /// True when every field is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for NutrientVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
        }
    }
}

impl AddAssign for NutrientVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for NutrientVector {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Aggregate nutrient sum over a set of log entries. Derived, never stored.
pub type Totals = NutrientVector;

/// One food recognized in free-text input, before nutrition is attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFood {
    /// Catalog key that matched
    pub food_name: String,
    /// Weight in grams, 0 when unknown
    pub grams: u32,
    /// Number of items, 1 unless stated otherwise
    pub quantity_items: u32,
}

impl ParsedFood {
    /// Single item with unknown weight
    pub fn single(food_name: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            grams: 0,
            quantity_items: 1,
        }
    }
}

/// One recorded food item with its computed nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Catalog key of the food
    pub food_name: String,
    /// Weight in grams, 0 when unknown
    pub grams: u32,
    /// Number of items
    pub quantity_items: u32,
    /// Complete text the user submitted
    pub raw_input: String,
    /// Nutrition already scaled by `quantity_items`
    pub nutrition: NutrientVector,
}

impl LogEntry {
    /// Attach per-unit nutrition to a parsed food, scaling by its quantity
    #[must_use]
    pub fn from_parsed(parsed: ParsedFood, raw_input: &str, per_unit: NutrientVector) -> Self {
        let nutrition = per_unit.scaled(f64::from(parsed.quantity_items));
        Self {
            food_name: parsed.food_name,
            grams: parsed.grams,
            quantity_items: parsed.quantity_items,
            raw_input: raw_input.to_owned(),
            nutrition,
        }
    }
}

/// Element-wise sum of `nutrition` across entries
#[must_use]
pub fn totals_of(entries: &[LogEntry]) -> Totals {
    entries.iter().map(|entry| entry.nutrition).sum()
}
