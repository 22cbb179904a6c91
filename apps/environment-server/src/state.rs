// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

use std::sync::Arc;

use crate::api_client::{ApiClient, ApiClientError};
use crate::auth::OidcClient;
use crate::environment::{resolve, ConfigError, DeploymentTarget, EnvSource, EnvironmentSettings};
use crate::providers::PaymentClientConfig;

/// Why the process refused to start.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ApiClientError),
}

/// Shared application state. Built once from the resolved settings.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<EnvironmentSettings>,
    pub oidc: Arc<OidcClient>,
    /// Backend API client for callers embedding this crate. The HTTP surface
    /// only publishes settings and never proxies to the backend.
    pub api: ApiClient,
    pub payments: Arc<PaymentClientConfig>,
}

impl AppState {
    pub fn new(settings: EnvironmentSettings) -> Result<Self, ApiClientError> {
        let oidc = OidcClient::new(&settings);
        let api = ApiClient::new(&settings)?;
        let payments = PaymentClientConfig::new(&settings);

        Ok(Self {
            settings: Arc::new(settings),
            oidc: Arc::new(oidc),
            api,
            payments: Arc::new(payments),
        })
    }
}

/// Resolve the target and its settings, then build the state.
///
/// Target and settings errors return before any client is constructed.
pub fn bootstrap<S: EnvSource>(
    selector: Option<&str>,
    source: &S,
) -> Result<AppState, StartupError> {
    let target = DeploymentTarget::from_selector(selector)?;
    let settings = resolve(target, source)?;
    Ok(AppState::new(settings)?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn consumers_share_one_settings_value() {
        let settings = resolve(DeploymentTarget::Development, &HashMap::new()).unwrap();
        let state = AppState::new(settings.clone()).unwrap();
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.settings, &cloned.settings));
        assert_eq!(*state.settings, settings);
        assert_eq!(state.oidc.issuer(), settings.auth_issuer_url());
        assert_eq!(state.api.base_url(), settings.api_base_url());
        assert_eq!(state.payments.publishable_key(), settings.payment_public_key());
    }

    #[test]
    fn bootstrap_rejects_unknown_target() {
        let err = bootstrap(Some("qa"), &HashMap::new()).err().unwrap();
        assert!(matches!(
            err,
            StartupError::Config(ConfigError::UnknownTarget(ref name)) if name == "qa"
        ));
    }

    #[test]
    fn bootstrap_rejects_incomplete_production_settings() {
        let err = bootstrap(Some("production"), &HashMap::new()).err().unwrap();
        assert!(matches!(
            err,
            StartupError::Config(ConfigError::MissingField {
                target: DeploymentTarget::Production,
                ..
            })
        ));
    }

    #[test]
    fn bootstrap_builds_state_for_default_target() {
        let state = bootstrap(None, &HashMap::new()).unwrap();
        assert_eq!(state.settings.target(), DeploymentTarget::Development);
        assert_eq!(state.api.base_url(), "http://localhost:8080/api");
    }
}
