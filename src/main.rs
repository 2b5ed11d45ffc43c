// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pullcreds::config::Config;
use pullcreds::provider::provider_from_config;
use pullcreds::server::{start_server, ServerState};
use pullcreds::sync::SyncManager;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "pullcreds=info".into()),
        )
        .init();

    info!("Starting pullcreds service");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: provider_type={} registries={}",
        config.provider_type,
        config.gcp_registries.len()
    );

    // Create the credential provider selected by the configuration
    let provider =
        provider_from_config(&config).context("failed to create credential provider")?;

    // The sync manager serializes runs; the cluster client is created per run
    let manager = SyncManager::new(provider);
    let state = Arc::new(ServerState { manager });

    start_server(config.port, state).await
}
