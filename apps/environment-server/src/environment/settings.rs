// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! The resolved environment settings.

use serde::Serialize;
use utoipa::ToSchema;

use super::target::DeploymentTarget;

/// Placeholder publishable key shipped with the development target.
pub(crate) const DEVELOPMENT_PAYMENT_KEY: &str = "pk_test_gocargo_development_placeholder";

/// Environment-specific settings, one instance per running process.
///
/// Fields are private and exposed through accessors only, so a value cannot
/// change after [`resolve`](super::resolve) hands it out. Share it with
/// `Arc` rather than cloning per consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSettings {
    /// Target this value was resolved for.
    target: DeploymentTarget,
    /// Identity provider base URL.
    #[schema(example = "https://gocargo.kinde.com")]
    auth_issuer_url: String,
    /// Where the identity provider sends the user after login.
    #[schema(example = "http://localhost:4200")]
    redirect_url: String,
    /// Where the identity provider sends the user after logout.
    #[schema(example = "http://localhost:4200")]
    post_logout_redirect_url: String,
    /// Identity provider client id.
    client_id: String,
    /// Protected API identifier used in token requests.
    #[schema(example = "http://localhost:8080/api")]
    audience: String,
    /// Backend API base URL.
    #[schema(example = "http://localhost:8080/api")]
    api_base_url: String,
    /// Publishable payment key. Never a secret key.
    payment_public_key: String,
}

/// Field values before validation. Every field may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PartialSettings {
    pub auth_issuer_url: Option<String>,
    pub redirect_url: Option<String>,
    pub post_logout_redirect_url: Option<String>,
    pub client_id: Option<String>,
    pub audience: Option<String>,
    pub api_base_url: Option<String>,
    pub payment_public_key: Option<String>,
}

impl DeploymentTarget {
    /// Built-in values for this target.
    ///
    /// Development points at the local stack. Production ships nothing:
    /// every value is deployment-injected.
    pub(crate) fn defaults(&self) -> PartialSettings {
        match self {
            DeploymentTarget::Development => PartialSettings {
                auth_issuer_url: Some("https://gocargo.kinde.com".to_string()),
                redirect_url: Some("http://localhost:4200".to_string()),
                post_logout_redirect_url: Some("http://localhost:4200".to_string()),
                client_id: Some("gocargo-development".to_string()),
                audience: Some("http://localhost:8080/api".to_string()),
                api_base_url: Some("http://localhost:8080/api".to_string()),
                payment_public_key: Some(DEVELOPMENT_PAYMENT_KEY.to_string()),
            },
            DeploymentTarget::Production => PartialSettings::default(),
        }
    }
}

impl EnvironmentSettings {
    /// Assemble a settings value. Callers must have validated every field.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_validated(
        target: DeploymentTarget,
        auth_issuer_url: String,
        redirect_url: String,
        post_logout_redirect_url: String,
        client_id: String,
        audience: String,
        api_base_url: String,
        payment_public_key: String,
    ) -> Self {
        Self {
            target,
            auth_issuer_url,
            redirect_url,
            post_logout_redirect_url,
            client_id,
            audience,
            api_base_url,
            payment_public_key,
        }
    }

    pub fn target(&self) -> DeploymentTarget {
        self.target
    }

    pub fn auth_issuer_url(&self) -> &str {
        &self.auth_issuer_url
    }

    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    pub fn post_logout_redirect_url(&self) -> &str {
        &self.post_logout_redirect_url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn payment_public_key(&self) -> &str {
        &self.payment_public_key
    }

    /// All string fields paired with their camelCase names.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("authIssuerUrl", self.auth_issuer_url.as_str()),
            ("redirectUrl", self.redirect_url.as_str()),
            ("postLogoutRedirectUrl", self.post_logout_redirect_url.as_str()),
            ("clientId", self.client_id.as_str()),
            ("audience", self.audience.as_str()),
            ("apiBaseUrl", self.api_base_url.as_str()),
            ("paymentPublicKey", self.payment_public_key.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_defaults_are_complete() {
        let defaults = DeploymentTarget::Development.defaults();
        assert_eq!(defaults.api_base_url.as_deref(), Some("http://localhost:8080/api"));
        assert_eq!(defaults.redirect_url.as_deref(), Some("http://localhost:4200"));
        assert!(defaults.client_id.is_some());
        assert!(defaults.payment_public_key.is_some());
    }

    #[test]
    fn production_has_no_defaults() {
        assert_eq!(DeploymentTarget::Production.defaults(), PartialSettings::default());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let settings = EnvironmentSettings::from_validated(
            DeploymentTarget::Development,
            "https://id.example.com".to_string(),
            "http://localhost:4200".to_string(),
            "http://localhost:4200/bye".to_string(),
            "client".to_string(),
            "http://localhost:8080/api".to_string(),
            "http://localhost:8080/api".to_string(),
            "pk_test_abc".to_string(),
        );

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["target"], "development");
        assert_eq!(json["authIssuerUrl"], "https://id.example.com");
        assert_eq!(json["postLogoutRedirectUrl"], "http://localhost:4200/bye");
        assert_eq!(json["apiBaseUrl"], "http://localhost:8080/api");
        assert_eq!(json["paymentPublicKey"], "pk_test_abc");
        assert_eq!(json.as_object().unwrap().len(), 8);
    }
}
