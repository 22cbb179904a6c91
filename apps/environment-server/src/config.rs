// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. The deployment target is fixed at build time;
//! everything else is loaded from the environment at startup.
//!
//! ## Build-time Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GOCARGO_DEPLOYMENT_TARGET` | `development` or `production` | `development` |
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GOCARGO_AUTH_ISSUER_URL` | Identity provider base URL | Required for production |
//! | `GOCARGO_AUTH_REDIRECT_URL` | Login redirect target | Required for production |
//! | `GOCARGO_AUTH_POST_LOGOUT_REDIRECT_URL` | Logout redirect target | Required for production |
//! | `GOCARGO_AUTH_CLIENT_ID` | Identity provider client id | Required for production |
//! | `GOCARGO_AUTH_AUDIENCE` | Protected API identifier | Required for production |
//! | `GOCARGO_API_BASE_URL` | Backend API base URL | Required for production |
//! | `GOCARGO_PAYMENT_PUBLISHABLE_KEY` | Publishable payment key | Required for production |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8081` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Compile-time variable selecting the deployment target.
///
/// Read with `option_env!`, so changing it requires a rebuild.
pub const DEPLOYMENT_TARGET_ENV: &str = "GOCARGO_DEPLOYMENT_TARGET";

pub const AUTH_ISSUER_URL_ENV: &str = "GOCARGO_AUTH_ISSUER_URL";
pub const AUTH_REDIRECT_URL_ENV: &str = "GOCARGO_AUTH_REDIRECT_URL";
pub const AUTH_POST_LOGOUT_REDIRECT_URL_ENV: &str = "GOCARGO_AUTH_POST_LOGOUT_REDIRECT_URL";
pub const AUTH_CLIENT_ID_ENV: &str = "GOCARGO_AUTH_CLIENT_ID";
pub const AUTH_AUDIENCE_ENV: &str = "GOCARGO_AUTH_AUDIENCE";
pub const API_BASE_URL_ENV: &str = "GOCARGO_API_BASE_URL";

/// Publishable payment key. Secret keys are rejected at startup.
pub const PAYMENT_PUBLISHABLE_KEY_ENV: &str = "GOCARGO_PAYMENT_PUBLISHABLE_KEY";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;

/// Default `RUST_LOG` filter when none is set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
