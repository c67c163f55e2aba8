// ABOUTME: Food log route handlers for adding, deleting, clearing, and totaling entries
// ABOUTME: Maps JSON requests onto FoodLogService and its outcomes onto JSON responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food log routes
//!
//! All endpoints operate on the single shared log held by
//! [`ServerResources`]. Bodies that are not valid JSON are rejected with
//! `INVALID_INPUT`; absent fields fall back to the behaviour of an empty
//! input or an invalid index.

use crate::constants::api;
use crate::resources::ServerResources;
use crate::routes::method_not_allowed;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use nutrilog_core::errors::AppError;
use nutrilog_core::models::{LogEntry, Totals};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Body of `POST /add_food`
#[derive(Debug, Deserialize)]
pub struct AddFoodRequest {
    /// Free-text description of what was eaten
    #[serde(default)]
    pub input: String,
}

/// Body of `POST /delete_food`
#[derive(Debug, Deserialize)]
pub struct DeleteFoodRequest {
    /// Position to remove; anything other than an integer is out of range
    #[serde(default)]
    pub index: Option<Value>,
}

impl DeleteFoodRequest {
    fn position(&self) -> Option<i64> {
        self.index.as_ref().and_then(Value::as_i64)
    }
}

/// Response of `GET /totals`
#[derive(Debug, Serialize, Deserialize)]
pub struct TotalsResponse {
    /// Always `true`
    pub success: bool,
    /// Sum over the whole log
    pub totals: Totals,
}

/// Response of `POST /add_food`
#[derive(Debug, Serialize, Deserialize)]
pub struct AddFoodResponse {
    /// Always `true`
    pub success: bool,
    /// Entries appended by this request
    pub foods: Vec<LogEntry>,
    /// Sum over the whole log after the append
    pub totals: Totals,
    /// Log length after the append
    pub total_items: usize,
}

/// Response of `POST /delete_food`
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteFoodResponse {
    /// Always `true`
    pub success: bool,
    /// Fixed confirmation text
    pub message: String,
    /// Sum over the remaining log
    pub totals: Totals,
    /// Log length after the removal
    pub total_items: usize,
}

/// Response of `POST /clear`
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResponse {
    /// Always `true`
    pub success: bool,
    /// Fixed confirmation text
    pub message: String,
}

/// Food log routes
pub struct FoodLogRoutes;

impl FoodLogRoutes {
    /// Create all food log routes, relative to the API prefix
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/totals",
                get(Self::handle_totals).fallback(method_not_allowed),
            )
            .route(
                "/add_food",
                post(Self::handle_add_food).fallback(method_not_allowed),
            )
            .route(
                "/delete_food",
                post(Self::handle_delete_food).fallback(method_not_allowed),
            )
            .route(
                "/clear",
                post(Self::handle_clear).fallback(method_not_allowed),
            )
            .with_state(resources)
    }

    /// Handle totals over the whole log
    async fn handle_totals(State(resources): State<Arc<ServerResources>>) -> Response {
        let totals = resources.food_log.totals().await;

        (
            StatusCode::OK,
            Json(TotalsResponse {
                success: true,
                totals,
            }),
        )
            .into_response()
    }

    /// Handle parse-and-append of free text
    async fn handle_add_food(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<AddFoodRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let outcome = resources.food_log.add_food(&request.input).await?;

        Ok((
            StatusCode::OK,
            Json(AddFoodResponse {
                success: true,
                foods: outcome.foods,
                totals: outcome.totals,
                total_items: outcome.total_items,
            }),
        )
            .into_response())
    }

    /// Handle removal of one entry by position
    async fn handle_delete_food(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<DeleteFoodRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let index = request.position().ok_or_else(AppError::index_out_of_range)?;

        let outcome = resources.food_log.delete_food(index).await?;

        Ok((
            StatusCode::OK,
            Json(DeleteFoodResponse {
                success: true,
                message: api::FOOD_DELETED.to_owned(),
                totals: outcome.totals,
                total_items: outcome.total_items,
            }),
        )
            .into_response())
    }

    /// Handle emptying the log
    async fn handle_clear(State(resources): State<Arc<ServerResources>>) -> Response {
        resources.food_log.clear().await;

        (
            StatusCode::OK,
            Json(ClearResponse {
                success: true,
                message: api::LOG_CLEARED.to_owned(),
            }),
        )
            .into_response()
    }
}
