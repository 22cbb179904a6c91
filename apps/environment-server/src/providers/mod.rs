// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! Third-party provider configuration.

pub mod stripe;

pub use stripe::{PaymentClientConfig, PaymentMode};
