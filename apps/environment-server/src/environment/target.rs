// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! Deployment targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::ConfigError;

/// Build-time target selector, captured when the crate is compiled.
const BUILD_TARGET: Option<&str> = option_env!("GOCARGO_DEPLOYMENT_TARGET");

/// Named build/runtime configuration variant.
///
/// ## Targets
///
/// - `Development` - local stack, ships complete defaults
/// - `Production` - every value is deployment-injected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTarget {
    Development,
    Production,
}

impl DeploymentTarget {
    /// All known targets.
    pub const ALL: [DeploymentTarget; 2] = [
        DeploymentTarget::Development,
        DeploymentTarget::Production,
    ];

    /// Target selected when the crate was built.
    ///
    /// An unset selector means development.
    pub fn from_build() -> Result<Self, ConfigError> {
        Self::from_selector(Self::build_selector())
    }

    /// Raw selector value captured at build time, if any.
    pub fn build_selector() -> Option<&'static str> {
        BUILD_TARGET
    }

    /// Resolve an optional selector value into a target.
    pub fn from_selector(selector: Option<&str>) -> Result<Self, ConfigError> {
        match selector.map(str::trim) {
            None | Some("") => Ok(DeploymentTarget::Development),
            Some(name) => name.parse(),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentTarget::Development => "development",
            DeploymentTarget::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, DeploymentTarget::Development)
    }
}

impl FromStr for DeploymentTarget {
    type Err = ConfigError;

    /// Parse a target name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(DeploymentTarget::Development),
            "production" | "prod" => Ok(DeploymentTarget::Production),
            _ => Err(ConfigError::UnknownTarget(s.to_string())),
        }
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
