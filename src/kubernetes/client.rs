// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client construction

use kube::{Client, Config};
use tracing::debug;

use crate::error::{PullCredsError, Result};

/// Create a client for the cluster the service runs against.
///
/// `Config::infer` prefers the in-cluster service account environment and
/// falls back to the local kubeconfig.
pub async fn create_client() -> Result<Client> {
    let config = Config::infer().await.map_err(|e| {
        PullCredsError::ClientError(format!("failed to infer cluster config: {}", e))
    })?;

    debug!("using cluster at {}", config.cluster_url);

    Client::try_from(config)
        .map_err(|e| PullCredsError::ClientError(format!("failed to create client: {}", e)))
}
