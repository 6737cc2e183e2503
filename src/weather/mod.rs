use chrono::Local;
use chrono_tz::America::New_York;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

mod models;
mod sun;
pub use sun::*;
use models::{CurrentWeather, OpenMeteoResponse};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Weather request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Weather service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Weather payload malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Weather payload missing {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        // Grove Street station coordinates.
        Self {
            url: "https://api.open-meteo.com/v1/forecast".into(),
            latitude: 40.7197,
            longitude: -74.0431,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub temperature: String,
    pub icon: &'static str,
    pub sunrise: String,
    pub sunset: String,
}

pub struct Client {
    client: reqwest::Client,
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Always yields a report: upstream trouble degrades the temperature to
    /// "N/A" while the computed sun times stay available.
    pub async fn fetch_report(&self) -> Report {
        let (sunrise, sunset) = self.sun_times();
        match self.fetch_current().await {
            Ok(current) => Report {
                temperature: format!("{}°F", celsius_to_fahrenheit(current.temperature)),
                icon: weather_icon(current.weathercode),
                sunrise,
                sunset,
            },
            Err(err) => {
                warn!("Serving degraded weather report: {err}");
                Report {
                    temperature: "N/A".into(),
                    icon: DEFAULT_ICON,
                    sunrise,
                    sunset,
                }
            }
        }
    }

    async fn fetch_current(&self) -> Result<CurrentWeather, Error> {
        let url = format!(
            "{}?latitude={}&longitude={}&current_weather=true&timezone=America/New_York",
            self.config.url, self.config.latitude, self.config.longitude
        );
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }
        let body = response.text().await?;
        let raw: OpenMeteoResponse = serde_json::from_str(&body)?;
        raw.current_weather
            .ok_or(Error::MissingField("current_weather"))
    }

    fn sun_times(&self) -> (String, String) {
        let today = Local::now().date_naive();
        let (sunrise, sunset) =
            sun_times_local(today, self.config.latitude, self.config.longitude, New_York);
        (
            sunrise.format("%H:%M").to_string(),
            sunset.format("%H:%M").to_string(),
        )
    }
}

pub const DEFAULT_ICON: &str = "🌤️";

pub fn celsius_to_fahrenheit(celsius: f64) -> i64 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i64
}

/// Fixed WMO weather-code to icon table.
pub fn weather_icon(code: i64) -> &'static str {
    match code {
        0 => "☀️",
        1 => "🌤️",
        2 => "⛅",
        3 => "☁️",
        45 | 48 => "🌫️",
        51 => "🌦️",
        53 | 55 | 61 | 63 => "🌧️",
        65 | 95 => "⛈️",
        71 | 73 => "🌨️",
        75 => "❄️",
        _ => DEFAULT_ICON,
    }
}
