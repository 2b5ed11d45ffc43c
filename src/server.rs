// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface exposing the reconciliation operation.
//!
//! Endpoints:
//! - `POST /v1/setup-image-pull-creds` - run one reconciliation
//! - `GET /healthz` - liveness probe

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::sync::{SetupRequest, SyncManager};

pub struct ServerState {
    pub manager: SyncManager,
}

pub async fn start_server(port: u16, state: Arc<ServerState>) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/v1/setup-image-pull-creds", post(setup_handler))
        .route("/healthz", get(healthz_handler))
        .with_state(state)
}

async fn setup_handler(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SetupRequest>,
) -> impl IntoResponse {
    match state.manager.setup_image_pull_creds(request).await {
        Ok(()) => (StatusCode::OK, Json(json!({}))),
        Err(e) => {
            error!("setting up image pull creds failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}

async fn healthz_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Resolve when SIGINT or SIGTERM arrives so the server can drain
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install SIGINT handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StaticCredentialProvider;
    use axum::body::Body;
    use http::Request;
    use tower::ServiceExt;

    fn make_state() -> Arc<ServerState> {
        Arc::new(ServerState {
            manager: SyncManager::new(Box::new(StaticCredentialProvider(b"creds".to_vec()))),
        })
    }

    #[tokio::test]
    async fn test_healthz_returns_ok() {
        let app = router(make_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_setup_rejects_non_json_body() {
        let app = router(make_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/setup-image-pull-creds")
                    .header("content-type", "text/plain")
                    .body(Body::from("nope"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
