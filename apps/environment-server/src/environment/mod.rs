// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! # Environment Module
//!
//! Resolves the single, immutable settings value for the deployment target
//! this binary was built for.
//!
//! ## Lifecycle
//!
//! 1. `DeploymentTarget::from_build()` reads the compile-time selector
//! 2. `resolve()` merges target defaults with injected variables and validates
//! 3. The caller wraps the result in `Arc` and passes it to every consumer
//!
//! Any `ConfigError` is fatal: no consumer is constructed from a partial value.

pub mod error;
pub mod provider;
pub mod settings;
pub mod source;
pub mod target;

pub use error::ConfigError;
pub use provider::{get_environment, resolve};
pub use settings::EnvironmentSettings;
pub use source::{EnvSource, ProcessEnv};
pub use target::DeploymentTarget;
