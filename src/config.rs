// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;

const DEFAULT_PROVIDER_TYPE: &str = "gcp";
const DEFAULT_GCP_REGISTRIES: &str = "https://us-docker.pkg.dev";
const DEFAULT_PORT: &str = "8080";

/// Service configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential provider kind, currently only "gcp"
    pub provider_type: String,
    /// GCP service account key in JSON form
    pub gcp_creds_json: String,
    /// Registries the generated docker config grants access to
    pub gcp_registries: Vec<String>,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let provider_type =
            env::var("PROVIDER_TYPE").unwrap_or_else(|_| DEFAULT_PROVIDER_TYPE.to_string());
        // Validated by the provider constructor, empty means "not configured"
        let gcp_creds_json = env::var("PROVIDER_GCP_CREDS_JSON").unwrap_or_default();
        let gcp_registries = env::var("PROVIDER_GCP_REGISTRIES")
            .unwrap_or_else(|_| DEFAULT_GCP_REGISTRIES.to_string())
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect();
        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .context("PORT environment variable is not a valid port number")?;

        Ok(Config {
            provider_type,
            gcp_creds_json,
            gcp_registries,
            port,
        })
    }
}
