// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod filter;
pub mod manager;
pub mod secrets;
pub mod service_accounts;

pub use filter::NamespaceFilter;
pub use manager::{SetupRequest, SyncManager};
