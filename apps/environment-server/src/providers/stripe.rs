// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! Client-side payment SDK configuration.
//!
//! Only the publishable key lives here. Checkout sessions are created by
//! the backend with its own secret key, which never reaches this service.

use serde::Serialize;
use utoipa::ToSchema;

use crate::environment::EnvironmentSettings;

const TEST_KEY_PREFIX: &str = "pk_test_";
const LIVE_KEY_PREFIX: &str = "pk_live_";

/// Placeholder the payment processor substitutes on redirect.
const CHECKOUT_SESSION_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Test,
    Live,
    Unknown,
}

impl PaymentMode {
    pub fn from_publishable_key(key: &str) -> Self {
        if key.starts_with(TEST_KEY_PREFIX) {
            PaymentMode::Test
        } else if key.starts_with(LIVE_KEY_PREFIX) {
            PaymentMode::Live
        } else {
            PaymentMode::Unknown
        }
    }
}

/// What the web client needs to initialise payment widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentClientConfig {
    publishable_key: String,
    mode: PaymentMode,
    success_url: String,
    cancel_url: String,
}

impl PaymentClientConfig {
    pub fn new(settings: &EnvironmentSettings) -> Self {
        let client_base = settings.redirect_url().trim_end_matches('/');
        let key = settings.payment_public_key().to_string();

        Self {
            mode: PaymentMode::from_publishable_key(&key),
            publishable_key: key,
            success_url: format!(
                "{client_base}/cart/success?session_id={CHECKOUT_SESSION_PLACEHOLDER}"
            ),
            cancel_url: format!("{client_base}/cart/failure"),
        }
    }

    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }

    pub fn mode(&self) -> PaymentMode {
        self.mode
    }

    /// Checkout return route after a successful payment.
    pub fn success_url(&self) -> &str {
        &self.success_url
    }

    /// Checkout return route after a cancelled or failed payment.
    pub fn cancel_url(&self) -> &str {
        &self.cancel_url
    }
}
