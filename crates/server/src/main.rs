mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use pathboard::ridepath::{self, Fetcher};
use pathboard::weather;
use std::sync::Arc;
use tracing::{error, info};

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let port = match std::env::args().nth(1) {
        Some(raw) => match raw.parse() {
            Ok(port) => port,
            Err(_) => {
                error!("Invalid port: {raw}");
                std::process::exit(1);
            }
        },
        None => DEFAULT_PORT,
    };

    let fetcher = match Fetcher::new(ridepath::Config::default()) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            error!("Failed to build departure fetcher: {err}");
            std::process::exit(1);
        }
    };
    let weather = match weather::Client::new(weather::Config::default()) {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to build weather client: {err}");
            std::process::exit(1);
        }
    };
    let state = Arc::new(AppState::new(fetcher, weather));
    info!("Watching {}", state.fetcher.config().station_label);

    let app = axum::Router::new()
        .route("/", get(api::index))
        .route("/api/departures", get(api::departures))
        .route("/api/weather", get(api::weather))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    info!("Listening to port {port}");
    axum::serve(listener, app).await.unwrap();
}
