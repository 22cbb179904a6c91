// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! GoCargo Environment - deployment settings for the GoCargo web client
//!
//! Resolves one immutable settings value per process for the deployment
//! target selected at build time, and builds the clients that depend on it.
//!
//! ## Modules
//!
//! - `environment` - Target selection, resolution and validation
//! - `auth` - Identity provider login/logout configuration
//! - `api_client` - Backend API client
//! - `providers` - Payment client configuration
//! - `api` - HTTP API handlers (Axum)

pub mod api;
pub mod api_client;
pub mod auth;
pub mod config;
pub mod environment;
pub mod error;
pub mod providers;
pub mod state;
pub mod telemetry;
