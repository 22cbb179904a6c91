// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

//! HTTP client for the GoCargo backend API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::environment::EnvironmentSettings;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("API client setup failed: {0}")]
    Setup(String),

    #[error("API request failed: {0}")]
    Request(String),

    #[error("API returned {status} for {path}")]
    Status { status: StatusCode, path: String },

    #[error("API response was invalid: {0}")]
    InvalidResponse(String),
}

/// Backend API client. Every request path is prefixed with `apiBaseUrl`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Build a client for the configured backend. No request is sent.
    pub fn new(settings: &EnvironmentSettings) -> Result<Self, ApiClientError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiClientError::Setup(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: settings.api_base_url().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path, e.g. `categories` or `/orders/cart`.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET a JSON document, optionally with a bearer token.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer_token: Option<&str>,
    ) -> Result<T, ApiClientError> {
        let url = self.endpoint(path);
        debug!(url = %url, "API GET");

        let mut request = self.http.get(&url);
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiClientError::Request(format!("GET {path} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ApiClientError::Status {
                status: response.status(),
                path: path.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiClientError::InvalidResponse(format!("GET {path} invalid JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{http::HeaderMap, routing::get, Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::config::API_BASE_URL_ENV;
    use crate::environment::{resolve, DeploymentTarget};

    fn client_for(base_url: &str) -> ApiClient {
        let mut vars = HashMap::new();
        vars.insert(API_BASE_URL_ENV.to_string(), base_url.to_string());
        let settings = resolve(DeploymentTarget::Development, &vars).unwrap();
        ApiClient::new(&settings).unwrap()
    }

    /// Serve a tiny backend on an ephemeral port and return its `/api` base URL.
    async fn spawn_backend() -> String {
        let app = Router::new()
            .route(
                "/api/categories",
                get(|| async { Json(json!([{ "name": "SUV" }])) }),
            )
            .route("/api/broken", get(|| async { "not json" }))
            .route(
                "/api/whoami",
                get(|headers: HeaderMap| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    Json(json!({ "authorization": auth }))
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let client = client_for("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.endpoint("categories"), "http://localhost:8080/api/categories");
        assert_eq!(client.endpoint("/orders/cart"), "http://localhost:8080/api/orders/cart");
        assert_eq!(client.endpoint(""), "http://localhost:8080/api");
    }

    #[tokio::test]
    async fn get_json_decodes_body() {
        let client = client_for(&spawn_backend().await);
        let body: Value = client.get_json("categories", None).await.unwrap();
        assert_eq!(body[0]["name"], "SUV");
    }

    #[tokio::test]
    async fn get_json_sends_bearer_token() {
        let client = client_for(&spawn_backend().await);
        let body: Value = client.get_json("/whoami", Some("abc")).await.unwrap();
        assert_eq!(body["authorization"], "Bearer abc");
    }

    #[tokio::test]
    async fn get_json_maps_error_status() {
        let client = client_for(&spawn_backend().await);
        let err = client.get_json::<Value>("missing", None).await.unwrap_err();
        assert!(matches!(
            err,
            ApiClientError::Status { status, ref path }
                if status == StatusCode::NOT_FOUND && path == "missing"
        ));
    }

    #[tokio::test]
    async fn get_json_rejects_non_json_body() {
        let client = client_for(&spawn_backend().await);
        let err = client.get_json::<Value>("broken", None).await.unwrap_err();
        assert!(matches!(err, ApiClientError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn get_json_maps_connection_failure() {
        let client = client_for("http://127.0.0.1:1/api");
        let err = client.get_json::<Value>("categories", None).await.unwrap_err();
        assert!(matches!(err, ApiClientError::Request(_)));
    }
}
