// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod client;
pub mod namespaces;

pub use client::create_client;
pub use namespaces::list_namespaces;
