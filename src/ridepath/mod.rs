use thiserror::Error;
use tracing::debug;

mod config;
pub mod models;
pub use config::*;
use models::RidePathResponse;

use crate::board::Board;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Upstream returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Upstream payload malformed: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct Fetcher {
    client: reqwest::Client,
    config: Config,
}

impl Fetcher {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Single attempt per call. The display client polls on a timer, so the
    /// next poll is the retry mechanism.
    pub async fn fetch_board(&self) -> Result<Board, Error> {
        let response = self.client.get(&self.config.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }
        let body = response.text().await?;
        let raw: RidePathResponse = serde_json::from_str(&body)?;
        debug!("Upstream returned {} stations", raw.results.len());
        Ok(Board::from_upstream(raw, &self.config))
    }
}
