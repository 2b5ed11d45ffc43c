// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace scoping policy

use std::collections::HashSet;

/// Decides which namespaces a run touches.
///
/// A non-empty allow-list fully overrides the default policy: only listed
/// namespaces are in scope, ignored or not. Without an allow-list every
/// namespace outside the ignored set is in scope.
pub struct NamespaceFilter<'a> {
    allow_list: Option<HashSet<&'a str>>,
    ignored: &'a HashSet<String>,
}

impl<'a> NamespaceFilter<'a> {
    pub fn new(allow_list: &'a [String], ignored: &'a HashSet<String>) -> Self {
        let allow_list = if allow_list.is_empty() {
            None
        } else {
            Some(allow_list.iter().map(String::as_str).collect())
        };

        Self { allow_list, ignored }
    }

    pub fn in_scope(&self, name: &str) -> bool {
        match &self.allow_list {
            Some(allow) => allow.contains(name),
            None => !self.ignored.contains(name),
        }
    }
}
