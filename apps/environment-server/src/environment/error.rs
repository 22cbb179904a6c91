// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! Settings resolution errors.
//!
//! Every variant is fatal at startup: the process refuses to build any
//! consumer until configuration is fixed.

use super::target::DeploymentTarget;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required field resolved to an empty or absent value.
    #[error("missing required setting `{field}` for {target} target")]
    MissingField {
        target: DeploymentTarget,
        field: &'static str,
    },

    /// The build-target selector matched no known target.
    #[error("unknown deployment target `{0}` (expected development or production)")]
    UnknownTarget(String),

    /// A field is present but malformed.
    #[error("invalid setting `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// A server-side secret was supplied where a publishable key belongs.
    /// The offending value is never included in the message.
    #[error("setting `{field}` holds a secret key; only publishable keys are allowed")]
    SecretKeyRejected { field: &'static str },
}

impl ConfigError {
    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingField { .. } => "missing_field",
            ConfigError::UnknownTarget(_) => "unknown_target",
            ConfigError::InvalidField { .. } => "invalid_field",
            ConfigError::SecretKeyRejected { .. } => "secret_key_rejected",
        }
    }
}
