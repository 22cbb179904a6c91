// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! # Authentication Module
//!
//! Identity provider configuration for the GoCargo web client.
//!
//! ## Auth Flow
//!
//! 1. Web client redirects to `authorization_url()` with a random `state`
//! 2. Identity provider authenticates the user and redirects to `redirectUrl`
//! 3. Web client exchanges the code and calls the API with
//!    `Authorization: Bearer <access token>` issued for `audience`
//! 4. Logout goes through `logout_url()` and lands on `postLogoutRedirectUrl`

pub mod oidc;

pub use oidc::{OidcClient, OidcEndpoints};
