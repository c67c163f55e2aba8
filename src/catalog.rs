// ABOUTME: Static nutrition catalog mapping lowercase food names to per-item nutrients
// ABOUTME: Loaded once at start-up, immutable afterwards, lookups never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Catalog
//!
//! A fixed table of sixteen foods. Keys are normalized (trimmed, lowercase)
//! and unique. Unknown names resolve to the zero vector rather than an error.

use nutrilog_core::models::NutrientVector;
use std::collections::HashMap;

/// Built-in table, in presentation order. Values are per item.
const BUILTIN_FOODS: [(&str, NutrientVector); 16] = [
    ("apple", NutrientVector::new(52.0, 0.3, 13.8, 0.2, 2.4)),
    ("chicken", NutrientVector::new(239.0, 27.0, 0.0, 14.0, 0.0)),
    ("chicken breast", NutrientVector::new(165.0, 31.0, 0.0, 3.6, 0.0)),
    ("rice", NutrientVector::new(111.0, 2.6, 23.0, 0.9, 1.8)),
    ("brown rice", NutrientVector::new(111.0, 2.6, 23.0, 0.9, 1.8)),
    ("broccoli", NutrientVector::new(34.0, 2.8, 7.0, 0.4, 2.6)),
    ("salmon", NutrientVector::new(208.0, 20.0, 0.0, 12.0, 0.0)),
    ("sweet potato", NutrientVector::new(86.0, 1.6, 20.0, 0.1, 3.0)),
    ("yogurt", NutrientVector::new(100.0, 17.0, 6.0, 0.0, 0.0)),
    ("greek yogurt", NutrientVector::new(100.0, 17.0, 6.0, 0.0, 0.0)),
    ("almonds", NutrientVector::new(164.0, 6.0, 6.0, 14.0, 3.5)),
    ("banana", NutrientVector::new(89.0, 1.1, 23.0, 0.3, 2.6)),
    ("eggs", NutrientVector::new(155.0, 13.0, 1.1, 11.0, 0.0)),
    ("oatmeal", NutrientVector::new(154.0, 5.3, 27.0, 2.6, 4.0)),
    ("avocado", NutrientVector::new(160.0, 2.0, 9.0, 15.0, 7.0)),
    ("quinoa", NutrientVector::new(120.0, 4.4, 22.0, 1.9, 2.8)),
];

/// A single catalog row
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Normalized food name
    pub name: String,
    /// Nutrients per item
    pub per_unit: NutrientVector,
}

/// Immutable food name to nutrient lookup table
#[derive(Debug, Clone)]
pub struct NutritionCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl NutritionCatalog {
    /// Catalog with the built-in foods
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_FOODS
                .iter()
                .map(|(name, per_unit)| ((*name).to_owned(), *per_unit)),
        )
    }

    /// Build a catalog from arbitrary rows. Names are normalized; the first
    /// occurrence of a duplicate key wins.
    pub fn from_entries(rows: impl IntoIterator<Item = (String, NutrientVector)>) -> Self {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (name, per_unit) in rows {
            let name = normalize(&name);
            if index.contains_key(&name) {
                continue;
            }
            index.insert(name.clone(), entries.len());
            entries.push(CatalogEntry { name, per_unit });
        }

        Self { entries, index }
    }

    /// Nutrients for `name`, or the zero vector when the food is unknown
    #[must_use]
    pub fn lookup(&self, name: &str) -> NutrientVector {
        self.get(name)
            .map_or(NutrientVector::ZERO, |entry| entry.per_unit)
    }

    /// Catalog row for `name`, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index
            .get(&normalize(name))
            .and_then(|&position| self.entries.get(position))
    }

    /// Whether `name` is a catalog key
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize(name))
    }

    /// All rows in insertion order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NutritionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
