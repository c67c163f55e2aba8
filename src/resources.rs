// ABOUTME: Centralized resource container for dependency injection into HTTP handlers
// ABOUTME: Owns the catalog, the shared food log, the progress reporter, and the config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Every handler receives an `Arc<ServerResources>` through axum `State`.
//! The food log lives here rather than in a process global, so each test can
//! build an isolated server.

use crate::catalog::NutritionCatalog;
use crate::config::ServerConfig;
use crate::food_log::FoodLogService;
use crate::progress::ProgressReporter;
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Static nutrition table shared by the services
    pub catalog: Arc<NutritionCatalog>,
    /// The single shared food log
    pub food_log: Arc<FoodLogService>,
    /// Synthetic weekly history generator
    pub progress: Arc<ProgressReporter>,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Build resources over the built-in catalog
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_catalog(config, NutritionCatalog::builtin())
    }

    /// Build resources over an explicit catalog
    #[must_use]
    pub fn with_catalog(config: ServerConfig, catalog: NutritionCatalog) -> Self {
        let catalog = Arc::new(catalog);

        Self {
            food_log: Arc::new(FoodLogService::new(Arc::clone(&catalog))),
            progress: Arc::new(ProgressReporter::new(
                Arc::clone(&catalog),
                config.progress.seed,
            )),
            catalog,
            config: Arc::new(config),
        }
    }
}
