// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 GoCargo

use std::{env, net::SocketAddr, process::ExitCode};

use gocargo_environment::{
    api::router,
    config::{DEFAULT_HOST, DEFAULT_PORT, HOST_ENV, PORT_ENV},
    environment::{DeploymentTarget, ProcessEnv},
    state::{bootstrap, StartupError},
    telemetry::init_tracing,
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let state = match bootstrap(DeploymentTarget::build_selector(), &ProcessEnv) {
        Ok(state) => state,
        Err(StartupError::Config(e)) => {
            error!(error = %e, code = e.error_code(), "refusing to start: invalid environment");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!(error = %e, "failed to initialise clients");
            return ExitCode::FAILURE;
        }
    };
    let target = state.settings.target();
    info!(
        deployment = %target,
        api_base_url = state.settings.api_base_url(),
        "environment resolved"
    );

    let app = router(state);

    let host = env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = match env::var(PORT_ENV) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(port = %raw, "invalid PORT, using default");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };

    let addr: SocketAddr = match format!("{host}:{port}").parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, %host, port, "failed to parse bind address");
            return ExitCode::FAILURE;
        }
    };

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(%addr, deployment = %target, "GoCargo environment server listening (docs at /docs)");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
