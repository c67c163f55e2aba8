// ABOUTME: Main library entry point for the Nutrilog food logging API
// ABOUTME: Exposes the catalog, food log, progress reporter, and HTTP server assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrilog Server
//!
//! A small HTTP+JSON service for logging what you eat. Free text such as
//! `"2 banana and eggs"` is matched against a fixed nutrition catalog, the
//! recognized foods are appended to a single shared log, and running totals of
//! calories, protein, carbohydrates, fat and fiber are returned.
//!
//! A weekly progress view is also served. It is synthetic: each request draws
//! a fresh random history from the catalog and is not derived from the log.
//!
//! ## Architecture
//!
//! - **Catalog**: static food name to nutrient table
//! - **Food log**: the shared, lock-protected log and its operations
//! - **Progress**: seedable weekly history synthesis
//! - **Routes**: axum handlers mounted under `/api`, plus health probes
//! - **Server**: router assembly, middleware layers, graceful shutdown
//!
//! Shared types and the error taxonomy live in the `nutrilog-core` crate.

/// Static nutrition catalog
pub mod catalog;

/// Environment configuration
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Shared food log service
pub mod food_log;

/// Structured logging set-up
pub mod logging;

/// HTTP middleware layers
pub mod middleware;

/// Synthetic weekly progress reports
pub mod progress;

/// Dependency injection container for handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

pub use nutrilog_core::errors;
pub use nutrilog_core::models;
