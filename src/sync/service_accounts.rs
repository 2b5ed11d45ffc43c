// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service account pull secret references

use k8s_openapi::api::core::v1::{LocalObjectReference, ServiceAccount};
use kube::{
    api::{ListParams, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, instrument};

use crate::constants::PULL_SECRET_NAME;
use crate::error::{PullCredsError, Result};

/// Ensure every service account in the namespace references the pull secret.
///
/// Accounts that already hold the reference are not written at all, so
/// repeated runs are free of spurious updates. Existing references are
/// preserved, the pull secret is only ever appended.
#[instrument(skip(client))]
pub async fn attach_pull_secret(client: &Client, namespace: &str) -> Result<()> {
    let accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);

    let list = accounts.list(&ListParams::default()).await.map_err(|e| {
        PullCredsError::ServiceAccountError(format!(
            "failed to list service accounts in {}: {}",
            namespace, e
        ))
    })?;

    for mut account in list.items {
        let name = account.name_any();

        let already_referenced = account
            .image_pull_secrets
            .as_ref()
            .is_some_and(|refs| refs.iter().any(|r| r.name == PULL_SECRET_NAME));

        if already_referenced {
            debug!("service account {}/{} already references pull secret", namespace, name);
            continue;
        }

        debug!("adding pull secret reference to service account {}/{}", namespace, name);
        account
            .image_pull_secrets
            .get_or_insert_with(Vec::new)
            .push(LocalObjectReference {
                name: PULL_SECRET_NAME.to_string(),
            });

        accounts
            .replace(&name, &PostParams::default(), &account)
            .await
            .map_err(|e| {
                PullCredsError::ServiceAccountError(format!(
                    "failed to update service account {}/{}: {}",
                    namespace, name, e
                ))
            })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        error_status_json, service_account_json, service_account_list_json, service_account_value,
        MockService,
    };

    const SA_LIST_PATH: &str = "/api/v1/namespaces/team-a/serviceaccounts";

    #[tokio::test]
    async fn test_appends_reference_preserving_existing_ones() {
        let mock = MockService::new()
            .on_get(
                SA_LIST_PATH,
                200,
                &service_account_list_json(&[service_account_value(
                    "team-a",
                    "default",
                    &["registry-legacy"],
                )]),
            )
            .on_put(
                "/api/v1/namespaces/team-a/serviceaccounts/default",
                200,
                &service_account_json("team-a", "default", &["registry-legacy", PULL_SECRET_NAME]),
            );
        let client = mock.clone().into_client();

        attach_pull_secret(&client, "team-a").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, "PUT");
        assert!(requests[1].body.contains(PULL_SECRET_NAME));
        assert!(requests[1].body.contains("registry-legacy"));
    }

    #[tokio::test]
    async fn test_no_write_when_reference_present() {
        let mock = MockService::new().on_get(
            SA_LIST_PATH,
            200,
            &service_account_list_json(&[service_account_value(
                "team-a",
                "default",
                &[PULL_SECRET_NAME],
            )]),
        );
        let client = mock.clone().into_client();

        attach_pull_secret(&client, "team-a").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
    }

    #[tokio::test]
    async fn test_patches_each_account_missing_the_reference() {
        let mock = MockService::new()
            .on_get(
                SA_LIST_PATH,
                200,
                &service_account_list_json(&[
                    service_account_value("team-a", "default", &[]),
                    service_account_value("team-a", "builder", &[PULL_SECRET_NAME]),
                    service_account_value("team-a", "deployer", &[]),
                ]),
            )
            .on_put(
                "/api/v1/namespaces/team-a/serviceaccounts/default",
                200,
                &service_account_json("team-a", "default", &[PULL_SECRET_NAME]),
            )
            .on_put(
                "/api/v1/namespaces/team-a/serviceaccounts/deployer",
                200,
                &service_account_json("team-a", "deployer", &[PULL_SECRET_NAME]),
            );
        let client = mock.clone().into_client();

        attach_pull_secret(&client, "team-a").await.unwrap();

        let puts: Vec<_> = mock
            .requests()
            .into_iter()
            .filter(|r| r.method == "PUT")
            .collect();
        assert_eq!(puts.len(), 2);
        assert!(puts.iter().any(|r| r.path.ends_with("/default")));
        assert!(puts.iter().any(|r| r.path.ends_with("/deployer")));
    }

    #[tokio::test]
    async fn test_update_failure_is_wrapped() {
        let mock = MockService::new()
            .on_get(
                SA_LIST_PATH,
                200,
                &service_account_list_json(&[service_account_value("team-a", "default", &[])]),
            )
            .on_put(
                "/api/v1/namespaces/team-a/serviceaccounts/default",
                500,
                &error_status_json(500, "InternalError"),
            );
        let client = mock.into_client();

        let err = attach_pull_secret(&client, "team-a").await.unwrap_err();

        assert!(err.to_string().contains("failed to update service account"));
    }
}
