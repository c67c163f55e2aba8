// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request helper and an isolated application builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use axum::Router;
use nutrilog_server::config::{ProgressConfig, ServerConfig};
use nutrilog_server::resources::ServerResources;
use nutrilog_server::server::build_router;
use std::sync::Arc;

/// Fixed progress seed used by integration tests
pub const TEST_SEED: u64 = 20_250_615;

/// Fresh resources with an empty log and a seeded progress generator
pub fn test_resources() -> Arc<ServerResources> {
    let config = ServerConfig {
        progress: ProgressConfig {
            seed: Some(TEST_SEED),
        },
        ..ServerConfig::default()
    };
    Arc::new(ServerResources::new(config))
}

/// Full application router over fresh resources
pub fn test_app() -> (Router, Arc<ServerResources>) {
    let resources = test_resources();
    (build_router(Arc::clone(&resources)), resources)
}
