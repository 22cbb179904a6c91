// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! Sources of deployment-injected values.

use std::collections::HashMap;

/// Read-only lookup of configuration variables.
///
/// Blank values are treated the same as absent ones.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a key, trimming whitespace and dropping blank values.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
