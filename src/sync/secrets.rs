// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pull secret creation and update

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use tracing::{debug, instrument};

use crate::constants::{DOCKERCFG_KEY, PULL_SECRET_NAME, PULL_SECRET_TYPE};
use crate::error::{PullCredsError, Result};

/// Ensure the pull secret exists in the namespace and holds the payload.
///
/// A missing secret is created, an existing one gets its payload
/// overwritten in place. Any read failure other than "not found" aborts
/// before a write is attempted.
#[instrument(skip(client, docker_cfg))]
pub async fn ensure_pull_secret(client: &Client, namespace: &str, docker_cfg: &[u8]) -> Result<()> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    match secrets.get(PULL_SECRET_NAME).await {
        Ok(mut existing) => {
            debug!("updating existing pull secret in {}", namespace);
            existing
                .data
                .get_or_insert_with(BTreeMap::new)
                .insert(DOCKERCFG_KEY.to_string(), ByteString(docker_cfg.to_vec()));
            secrets
                .replace(PULL_SECRET_NAME, &PostParams::default(), &existing)
                .await
                .map_err(|e| {
                    PullCredsError::SecretSyncError(format!(
                        "failed to update secret {}/{}: {}",
                        namespace, PULL_SECRET_NAME, e
                    ))
                })?;
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("creating pull secret in {}", namespace);
            let secret = Secret {
                metadata: ObjectMeta {
                    name: Some(PULL_SECRET_NAME.to_string()),
                    namespace: Some(namespace.to_string()),
                    ..Default::default()
                },
                type_: Some(PULL_SECRET_TYPE.to_string()),
                data: Some(BTreeMap::from([(
                    DOCKERCFG_KEY.to_string(),
                    ByteString(docker_cfg.to_vec()),
                )])),
                ..Default::default()
            };
            secrets
                .create(&PostParams::default(), &secret)
                .await
                .map_err(|e| {
                    PullCredsError::SecretSyncError(format!(
                        "failed to create secret {}/{}: {}",
                        namespace, PULL_SECRET_NAME, e
                    ))
                })?;
        }
        Err(e) => {
            return Err(PullCredsError::SecretSyncError(format!(
                "failed to read secret {}/{}: {}",
                namespace, PULL_SECRET_NAME, e
            )));
        }
    }

    Ok(())
}
