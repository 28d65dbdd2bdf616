use astra::{Request, Response, Server};
use clap::Parser;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::router::handle;
use crate::state::AppState;

mod config;
mod data;
mod domain;
mod errors;
mod request;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn serve_one(req: Request, state: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(%method, %path, error = %err, "request failed");
            } else {
                tracing::warn!(%method, %path, error = %err, "request rejected");
            }
            responses::html_error_response(&err)
        }
    };

    tracing::debug!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "handled request"
    );
    resp
}

fn main() {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(host = %config.host, port = config.port, error = %e, "invalid listen address");
            std::process::exit(2);
        }
    };

    let state = AppState::from_config(&config);
    if !state.static_dir.is_dir() {
        tracing::warn!(dir = %state.static_dir.display(), "static directory not found; assets will 404");
    }

    tracing::info!(%addr, workers = config.workers, "starting server");

    let server = Server::bind(&addr).max_workers(config.workers);
    let result = server.serve(move |req, _info| serve_one(req, &state));

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}
