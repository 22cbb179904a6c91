// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! Settings resolution.
//!
//! ## Resolution Order
//!
//! 1. Built-in defaults for the target
//! 2. Deployment-injected variables (blank values ignored)
//! 3. Validation: presence, URL shape, payment key shape
//!
//! Resolution reads variables only. It never touches the network or disk.

use tracing::{debug, warn};
use url::Url;

use super::error::ConfigError;
use super::settings::{EnvironmentSettings, PartialSettings};
use super::source::{EnvSource, ProcessEnv};
use super::target::DeploymentTarget;
use crate::config::{
    API_BASE_URL_ENV, AUTH_AUDIENCE_ENV, AUTH_CLIENT_ID_ENV, AUTH_ISSUER_URL_ENV,
    AUTH_POST_LOGOUT_REDIRECT_URL_ENV, AUTH_REDIRECT_URL_ENV, PAYMENT_PUBLISHABLE_KEY_ENV,
};

/// Prefixes reserved for server-side payment keys.
const SECRET_KEY_PREFIXES: [&str; 2] = ["sk_", "rk_"];
const PUBLISHABLE_KEY_PREFIX: &str = "pk_";
const TEST_KEY_PREFIX: &str = "pk_test_";

/// Resolve the settings for the build-selected target from the process
/// environment.
pub fn get_environment() -> Result<EnvironmentSettings, ConfigError> {
    let target = DeploymentTarget::from_build()?;
    resolve(target, &ProcessEnv)
}

/// Resolve and validate the settings for `target`.
pub fn resolve<S: EnvSource>(
    target: DeploymentTarget,
    source: &S,
) -> Result<EnvironmentSettings, ConfigError> {
    let merged = overlay(target.defaults(), source);

    let auth_issuer_url = require(target, "authIssuerUrl", merged.auth_issuer_url)?;
    let redirect_url = require(target, "redirectUrl", merged.redirect_url)?;
    let post_logout_redirect_url =
        require(target, "postLogoutRedirectUrl", merged.post_logout_redirect_url)?;
    let client_id = require(target, "clientId", merged.client_id)?;
    let audience = require(target, "audience", merged.audience)?;
    let api_base_url = require(target, "apiBaseUrl", merged.api_base_url)?;
    let payment_public_key = require(target, "paymentPublicKey", merged.payment_public_key)?;

    let issuer = parse_http_url("authIssuerUrl", &auth_issuer_url)?;
    if !target.is_development() && issuer.scheme() != "https" {
        return Err(ConfigError::InvalidField {
            field: "authIssuerUrl",
            reason: format!("{target} target requires an https issuer"),
        });
    }
    parse_http_url("redirectUrl", &redirect_url)?;
    parse_http_url("postLogoutRedirectUrl", &post_logout_redirect_url)?;
    parse_http_url("apiBaseUrl", &api_base_url)?;
    check_publishable_key("paymentPublicKey", &payment_public_key)?;

    if !target.is_development() && payment_public_key.starts_with(TEST_KEY_PREFIX) {
        warn!(deployment = %target, "payment key is a test-mode publishable key");
    }

    debug!(deployment = %target, api_base_url = %api_base_url, "environment settings resolved");

    Ok(EnvironmentSettings::from_validated(
        target,
        trim_trailing_slash(auth_issuer_url),
        redirect_url,
        post_logout_redirect_url,
        client_id,
        audience,
        trim_trailing_slash(api_base_url),
        payment_public_key,
    ))
}

/// Overlay deployment-injected variables onto the target defaults.
fn overlay<S: EnvSource>(defaults: PartialSettings, source: &S) -> PartialSettings {
    let pick = |key: &str, fallback: Option<String>| {
        source
            .non_empty(key)
            .or_else(|| fallback.filter(|v| !v.trim().is_empty()))
    };

    PartialSettings {
        auth_issuer_url: pick(AUTH_ISSUER_URL_ENV, defaults.auth_issuer_url),
        redirect_url: pick(AUTH_REDIRECT_URL_ENV, defaults.redirect_url),
        post_logout_redirect_url: pick(
            AUTH_POST_LOGOUT_REDIRECT_URL_ENV,
            defaults.post_logout_redirect_url,
        ),
        client_id: pick(AUTH_CLIENT_ID_ENV, defaults.client_id),
        audience: pick(AUTH_AUDIENCE_ENV, defaults.audience),
        api_base_url: pick(API_BASE_URL_ENV, defaults.api_base_url),
        payment_public_key: pick(PAYMENT_PUBLISHABLE_KEY_ENV, defaults.payment_public_key),
    }
}

fn require(
    target: DeploymentTarget,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ConfigError> {
    value.ok_or(ConfigError::MissingField { target, field })
}

fn parse_http_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidField {
        field,
        reason: format!("not an absolute URL: {e}"),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::InvalidField {
                field,
                reason: format!("unsupported scheme `{other}`"),
            })
        }
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidField {
            field,
            reason: "URL has no host".to_string(),
        });
    }

    Ok(url)
}

/// Guard against a server-side key landing in a client-visible field.
fn check_publishable_key(field: &'static str, key: &str) -> Result<(), ConfigError> {
    if SECRET_KEY_PREFIXES.iter().any(|p| key.starts_with(p)) {
        return Err(ConfigError::SecretKeyRejected { field });
    }
    if !key.starts_with(PUBLISHABLE_KEY_PREFIX) {
        return Err(ConfigError::InvalidField {
            field,
            reason: format!("publishable keys start with `{PUBLISHABLE_KEY_PREFIX}`"),
        });
    }
    Ok(())
}

fn trim_trailing_slash(mut value: String) -> String {
    while value.len() > 1 && value.ends_with('/') {
        value.pop();
    }
    value
}
