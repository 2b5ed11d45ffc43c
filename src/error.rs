// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PullCredsError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Credential provider error: {0}")]
    ProviderError(String),

    #[error("Failed to create Kubernetes client: {0}")]
    ClientError(String),

    #[error("Namespace listing failed: {0}")]
    NamespaceError(String),

    #[error("Secret sync failed: {0}")]
    SecretSyncError(String),

    #[error("Service account update failed: {0}")]
    ServiceAccountError(String),
}

pub type Result<T> = std::result::Result<T, PullCredsError>;
