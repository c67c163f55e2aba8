// ABOUTME: HTTP server assembly, listener binding, and graceful shutdown
// ABOUTME: Nests the food log API under /api and wraps every route in the shared layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # HTTP Server
//!
//! Layer order, outermost first: request id assignment, request id
//! propagation, tracing, no-cache headers, CORS, panic recovery, and the
//! `OPTIONS` short-circuit.

use crate::config::ServerConfig;
use crate::constants::api;
use crate::middleware::{answer_preflight, handle_panic, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{self, FoodLogRoutes, HealthRoutes, ProgressRoutes};
use anyhow::{Context, Result};
use axum::http::{header, HeaderValue};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Assemble the full application router over `resources`
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let api_routes = Router::new()
        .merge(FoodLogRoutes::routes(Arc::clone(&resources)))
        .merge(ProgressRoutes::routes(Arc::clone(&resources)))
        .fallback(routes::endpoint_not_found);

    Router::new()
        .merge(HealthRoutes::routes())
        .nest(api::PREFIX, api_routes)
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn(answer_preflight))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(setup_cors(&resources.config))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let resources = Arc::new(ServerResources::new(config));
    let app = build_router(resources);

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {address}"))?;

    info!(%address, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with an error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
