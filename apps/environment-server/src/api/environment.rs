// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

use axum::{extract::State, Json};

use crate::auth::OidcEndpoints;
use crate::environment::EnvironmentSettings;
use crate::providers::PaymentClientConfig;
use crate::state::AppState;

/// Public settings for the web client.
///
/// Every field is safe to ship to a browser; the payment key is
/// publishable only.
#[utoipa::path(
    get,
    path = "/v1/environment",
    tag = "Environment",
    responses(
        (status = 200, description = "Resolved environment settings", body = EnvironmentSettings)
    )
)]
pub async fn get_environment(State(state): State<AppState>) -> Json<EnvironmentSettings> {
    Json((*state.settings).clone())
}

/// Identity provider endpoints derived from the settings.
#[utoipa::path(
    get,
    path = "/v1/auth/endpoints",
    tag = "Environment",
    responses(
        (status = 200, description = "Identity provider endpoints", body = OidcEndpoints)
    )
)]
pub async fn get_auth_endpoints(State(state): State<AppState>) -> Json<OidcEndpoints> {
    Json(state.oidc.endpoints())
}

/// Payment widget configuration.
#[utoipa::path(
    get,
    path = "/v1/payments/config",
    tag = "Environment",
    responses(
        (status = 200, description = "Payment client configuration", body = PaymentClientConfig)
    )
)]
pub async fn get_payment_config(State(state): State<AppState>) -> Json<PaymentClientConfig> {
    Json((*state.payments).clone())
}
