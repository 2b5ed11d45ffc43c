// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name of the pull secret managed in every in-scope namespace
pub const PULL_SECRET_NAME: &str = "auto-image-pull-creds";

/// Secret type marking the payload as a dockercfg registry-auth document
pub const PULL_SECRET_TYPE: &str = "kubernetes.io/dockercfg";

/// Data key the credential payload is stored under
pub const DOCKERCFG_KEY: &str = ".dockercfg";

/// Namespaces skipped when the request carries no explicit namespace list
pub const IGNORED_NAMESPACES: [&str; 3] = ["kube-system", "kube-node-lease", "kube-public"];
