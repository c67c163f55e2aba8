// ABOUTME: Middleware answering every OPTIONS request with an empty 200 response
// ABOUTME: Runs inside the CORS layer so the answer still carries CORS headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Short-circuit `OPTIONS` on any path, known or not
pub async fn answer_preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    next.run(request).await
}
