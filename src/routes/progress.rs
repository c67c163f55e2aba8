// ABOUTME: Progress route handler serving the synthesized weekly summary
// ABOUTME: Draws a fresh report for the week ending yesterday on every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use crate::routes::method_not_allowed;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Local;
use nutrilog_core::models::ProgressReport;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response of `GET /progress`
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    /// Always `true`
    pub success: bool,
    /// Streak, averages and the seven days, inlined into the body
    #[serde(flatten)]
    pub report: ProgressReport,
}

/// Progress routes
pub struct ProgressRoutes;

impl ProgressRoutes {
    /// Create the progress route, relative to the API prefix
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/progress",
                get(Self::handle_progress).fallback(method_not_allowed),
            )
            .with_state(resources)
    }

    async fn handle_progress(State(resources): State<Arc<ServerResources>>) -> Response {
        let today = Local::now().date_naive();
        let report = resources.progress.report(today).await;

        (
            StatusCode::OK,
            Json(ProgressResponse {
                success: true,
                report,
            }),
        )
            .into_response()
    }
}
