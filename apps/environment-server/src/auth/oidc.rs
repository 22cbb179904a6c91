// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! OpenID Connect login/logout configuration for the web client.

use jsonwebtoken::{Algorithm, Validation};
use serde::Serialize;
use url::form_urlencoded;
use utoipa::ToSchema;

use crate::environment::EnvironmentSettings;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Scopes requested on login.
const LOGIN_SCOPES: &str = "openid profile email offline";

/// Identity provider client built from the resolved settings.
#[derive(Debug, Clone)]
pub struct OidcClient {
    /// Issuer base URL, no trailing slash
    issuer: String,
    client_id: String,
    redirect_url: String,
    post_logout_redirect_url: String,
    audience: String,
}

/// Identity provider endpoints the web client needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OidcEndpoints {
    pub issuer: String,
    pub discovery_url: String,
    pub jwks_url: String,
    pub logout_url: String,
}

impl OidcClient {
    pub fn new(settings: &EnvironmentSettings) -> Self {
        Self {
            issuer: settings.auth_issuer_url().trim_end_matches('/').to_string(),
            client_id: settings.client_id().to_string(),
            redirect_url: settings.redirect_url().to_string(),
            post_logout_redirect_url: settings.post_logout_redirect_url().to_string(),
            audience: settings.audience().to_string(),
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// OpenID provider metadata document.
    pub fn discovery_url(&self) -> String {
        format!("{}/.well-known/openid-configuration", self.issuer)
    }

    /// Signing keys for tokens issued to this client.
    pub fn jwks_url(&self) -> String {
        format!("{}/.well-known/jwks", self.issuer)
    }

    /// Authorization-code login URL carrying `state`.
    pub fn authorization_url(&self, state: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_url)
            .append_pair("scope", LOGIN_SCOPES)
            .append_pair("audience", &self.audience)
            .append_pair("state", state)
            .finish();
        format!("{}/oauth2/auth?{query}", self.issuer)
    }

    /// End-session URL that returns the user to the post-logout page.
    pub fn logout_url(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("redirect", &self.post_logout_redirect_url)
            .finish();
        format!("{}/logout?{query}", self.issuer)
    }

    pub fn endpoints(&self) -> OidcEndpoints {
        OidcEndpoints {
            issuer: self.issuer.clone(),
            discovery_url: self.discovery_url(),
            jwks_url: self.jwks_url(),
            logout_url: self.logout_url(),
        }
    }

    /// Access-token validation pinned to this issuer and audience.
    pub fn token_validation(&self, algorithm: Algorithm) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = CLOCK_SKEW_LEEWAY;
        validation
    }
}
