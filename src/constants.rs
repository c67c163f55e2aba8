// ABOUTME: System-wide constants and environment-driven defaults for the Nutrilog server
// ABOUTME: Contains env var names, network defaults, response messages, and progress synthesis bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants and environment-based configuration values.

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const NUTRILOG_SERVER: &str = "nutrilog-server";
}

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// `*` or comma-separated list of allowed origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Fixed seed for the progress random source
    pub const PROGRESS_SEED: &str = "PROGRESS_SEED";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Defaults applied when the environment is silent
pub mod defaults {
    /// Listen on all interfaces
    pub const HTTP_HOST: &str = "0.0.0.0";
    /// Development server port
    pub const HTTP_PORT: u16 = 5000;
    /// Any origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Preflight cache lifetime in seconds
    pub const CORS_MAX_AGE_SECS: u64 = 60 * 60;
}

/// Path prefixes and fixed response strings
pub mod api {
    /// Prefix under which the food log API is mounted
    pub const PREFIX: &str = "/api";
    /// 404 body message for unknown paths under the API prefix
    pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
    /// 404 body message for any other unknown path
    pub const NOT_FOUND: &str = "Not found";
    /// Success message of the clear endpoint
    pub const LOG_CLEARED: &str = "Food log cleared";
    /// Success message of the delete endpoint
    pub const FOOD_DELETED: &str = "Food deleted";
}

/// Bounds used when synthesizing the weekly history
pub mod progress {
    /// Days of history, ending yesterday
    pub const HISTORY_DAYS: u32 = 7;
    /// Entries per synthetic day, inclusive
    pub const ENTRIES_PER_DAY: (usize, usize) = (3, 6);
    /// Quantity per synthetic entry, inclusive
    pub const QUANTITY_RANGE: (u32, u32) = (1, 3);
    /// Gram amount when one is drawn, inclusive
    pub const GRAMS_RANGE: (u32, u32) = (50, 199);
    /// Probability that a synthetic entry carries a gram amount
    pub const GRAMS_PROBABILITY: f64 = 0.5;
    /// Fabricated streak, inclusive
    pub const STREAK_RANGE: (u32, u32) = (1, 30);
}
