//! HTTP JSON API.
//!
//! A blocking `tiny_http` server shared by a fixed pool of worker threads.
//! Every handler is a pure function of the request and the immutable
//! [`AppState`]; there is no shared mutable state.

mod requests;
mod routes;

pub use routes::{dispatch, ApiResponse};

use std::io::Read;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tiny_http::{Header, Request, Response, Server};

use crate::config::{ChartConfig, ServerConfig};
use crate::ephemeris::ChartOptions;

const MAX_BODY_BYTES: u64 = 1 << 20;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {reason}")]
    Bind { address: String, reason: String },

    #[error("failed to spawn worker: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("worker thread panicked")]
    WorkerPanicked,
}

/// Read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub chart: ChartConfig,
    pub options: ChartOptions,
    /// Pins "today" for dasha and personal-year readings.
    pub as_of: Option<NaiveDate>,
}

impl AppState {
    pub fn new(chart: &ChartConfig) -> Self {
        AppState {
            options: ChartOptions::from(chart),
            chart: chart.clone(),
            as_of: None,
        }
    }

    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(&ChartConfig::default())
    }
}

/// Bind and serve until the process exits.
pub fn serve(server_config: &ServerConfig, state: AppState) -> Result<(), ServerError> {
    let address = server_config.address();
    let server = Server::http(&address).map_err(|e| ServerError::Bind {
        address: address.clone(),
        reason: e.to_string(),
    })?;
    let server = Arc::new(server);
    let state = Arc::new(state);
    tracing::info!(%address, workers = server_config.workers, "listening");

    let workers = (0..server_config.workers.max(1))
        .map(|id| {
            let server = Arc::clone(&server);
            let state = Arc::clone(&state);
            thread::Builder::new()
                .name(format!("aztro-worker-{id}"))
                .spawn(move || {
                    for request in server.incoming_requests() {
                        handle(request, &state);
                    }
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for worker in workers {
        worker.join().map_err(|_| ServerError::WorkerPanicked)?;
    }
    Ok(())
}

fn json_header() -> Option<Header> {
    Header::from_bytes("Content-Type", "application/json").ok()
}

fn handle(mut request: Request, state: &AppState) {
    let started = Instant::now();
    let method = request.method().as_str().to_string();
    let url = request.url().to_string();

    let mut body = String::new();
    let response = match request
        .as_reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut body)
    {
        Ok(_) => dispatch(state, &method, &url, &body),
        Err(e) => ApiResponse::error(400, format!("unreadable request body: {e}")),
    };

    let status = response.status;
    let mut reply = Response::from_string(response.body.to_string()).with_status_code(status);
    if let Some(header) = json_header() {
        reply = reply.with_header(header);
    }
    if let Err(e) = request.respond(reply) {
        tracing::warn!(%method, %url, error = %e, "failed to send response");
    }

    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status >= 500 {
        tracing::error!(%method, %url, status, elapsed_ms, "request");
    } else {
        tracing::info!(%method, %url, status, elapsed_ms, "request");
    }
}
