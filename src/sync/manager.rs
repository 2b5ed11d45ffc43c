// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Central coordinator for distributing pull credentials to namespaces.

use std::collections::HashSet;

use kube::{Client, ResourceExt};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::constants::IGNORED_NAMESPACES;
use crate::error::Result;
use crate::kubernetes::{create_client, list_namespaces};
use crate::provider::CredentialProvider;
use crate::sync::filter::NamespaceFilter;
use crate::sync::secrets::ensure_pull_secret;
use crate::sync::service_accounts::attach_pull_secret;

/// Request driving one reconciliation run. An empty namespace list means
/// "every namespace outside the ignored set".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetupRequest {
    #[serde(default)]
    pub namespaces: Vec<String>,
}

/// Drives the end-to-end distribution of pull credentials.
///
/// Runs are serialized by a single lock: a second request blocks until the
/// in-flight run has fully completed or aborted.
pub struct SyncManager {
    provider: Box<dyn CredentialProvider>,
    ignored_namespaces: HashSet<String>,
    run_lock: Mutex<()>,
}

impl SyncManager {
    pub fn new(provider: Box<dyn CredentialProvider>) -> Self {
        Self {
            provider,
            ignored_namespaces: IGNORED_NAMESPACES.iter().map(|s| s.to_string()).collect(),
            run_lock: Mutex::new(()),
        }
    }

    /// Perform one reconciliation run for the request.
    ///
    /// Namespaces are processed sequentially in listing order; the first
    /// failure aborts the rest of the run and already-applied changes stay
    /// in place.
    #[instrument(skip_all)]
    pub async fn setup_image_pull_creds(&self, request: SetupRequest) -> Result<()> {
        let _run = self.run_lock.lock().await;

        debug!("creating cluster client");
        let client = create_client().await?;

        self.run(client, request).await
    }

    async fn run(&self, client: Client, request: SetupRequest) -> Result<()> {
        debug!("fetching docker config from provider");
        let docker_cfg = self.provider.docker_cfg().await?;

        debug!("listing namespaces");
        let namespaces = list_namespaces(&client).await?;

        let filter = NamespaceFilter::new(&request.namespaces, &self.ignored_namespaces);

        for namespace in &namespaces {
            let name = namespace.name_any();

            if !filter.in_scope(&name) {
                debug!("namespace {} out of scope, skipping", name);
                continue;
            }

            info!("processing namespace {}", name);
            ensure_pull_secret(&client, &name, &docker_cfg).await?;
            attach_pull_secret(&client, &name).await?;
        }

        Ok(())
    }
}
