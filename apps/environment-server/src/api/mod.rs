// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

use axum::{http::Uri, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::OidcEndpoints,
    environment::{DeploymentTarget, EnvironmentSettings},
    error::ApiError,
    providers::{PaymentClientConfig, PaymentMode},
    state::AppState,
};

pub mod environment;
pub mod health;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/environment", get(environment::get_environment))
        .route("/auth/endpoints", get(environment::get_auth_endpoints))
        .route("/payments/config", get(environment::get_payment_config))
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .nest("/v1", v1_routes)
        .merge(health_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("no route for {}", uri.path()))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        environment::get_environment,
        environment::get_auth_endpoints,
        environment::get_payment_config,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            EnvironmentSettings,
            DeploymentTarget,
            OidcEndpoints,
            PaymentClientConfig,
            PaymentMode,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Environment", description = "Deployment settings for the web client"),
        (name = "Health", description = "Liveness and readiness checks")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::environment::resolve;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let settings = resolve(DeploymentTarget::Development, &HashMap::new()).unwrap();
        router(AppState::new(settings).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn environment_endpoint_serves_public_settings() {
        let (status, body) = get_json(test_router(), "/v1/environment").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["target"], "development");
        assert_eq!(body["apiBaseUrl"], "http://localhost:8080/api");
        assert_eq!(body["redirectUrl"], "http://localhost:4200");
        assert!(body["paymentPublicKey"].as_str().unwrap().starts_with("pk_"));
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let app = test_router();
        let (_, first) = get_json(app.clone(), "/v1/environment").await;
        let (_, second) = get_json(app, "/v1/environment").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn auth_endpoints_are_derived_from_issuer() {
        let (status, body) = get_json(test_router(), "/v1/auth/endpoints").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["issuer"], "https://gocargo.kinde.com");
        assert_eq!(body["jwksUrl"], "https://gocargo.kinde.com/.well-known/jwks");
    }

    #[tokio::test]
    async fn payment_config_reports_mode() {
        let (status, body) = get_json(test_router(), "/v1/payments/config").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "test");
        assert_eq!(body["cancelUrl"], "http://localhost:4200/cart/failure");
    }

    #[tokio::test]
    async fn health_reports_environment() {
        let (status, body) = get_json(test_router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["checks"]["environment"], "development");

        let (status, body) = get_json(test_router(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = get_json(test_router(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["checks"]["environment"], "development");
    }

    #[tokio::test]
    async fn openapi_document_lists_routes() {
        let (status, body) = get_json(test_router(), "/api-doc/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/v1/environment"].is_object());
        assert!(body["paths"]["/health/ready"].is_object());
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() {
        let (status, body) = get_json(test_router(), "/v1/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_code"], "not_found");
    }
}
