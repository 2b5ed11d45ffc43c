// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace listing utilities

use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, Client};
use tracing::instrument;

use crate::error::{PullCredsError, Result};

/// List all namespaces in the cluster, in whatever order the API returns them
#[instrument(skip(client))]
pub async fn list_namespaces(client: &Client) -> Result<Vec<Namespace>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    let list = namespaces
        .list(&ListParams::default())
        .await
        .map_err(|e| PullCredsError::NamespaceError(format!("failed to list namespaces: {}", e)))?;

    Ok(list.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{namespace_list_json, MockService};
    use kube::ResourceExt;

    #[tokio::test]
    async fn test_list_namespaces_returns_all_items() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces",
            200,
            &namespace_list_json(&["default", "kube-system"]),
        );
        let client = mock.clone().into_client();

        let namespaces = list_namespaces(&client).await.unwrap();

        let names: Vec<String> = namespaces.iter().map(|ns| ns.name_any()).collect();
        assert_eq!(names, vec!["default", "kube-system"]);
    }

    #[tokio::test]
    async fn test_list_namespaces_wraps_errors() {
        let mock = MockService::new();
        let client = mock.into_client();

        // Unregistered path falls through to the mock's default 404
        let err = list_namespaces(&client).await.unwrap_err();
        assert!(err.to_string().contains("failed to list namespaces"));
    }
}
