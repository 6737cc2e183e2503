use pathboard::weather::Report;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeatherDto {
    pub temperature: String,
    pub icon: String,
    pub sunrise: String,
    pub sunset: String,
}

impl WeatherDto {
    pub fn from(report: &Report) -> Self {
        Self {
            temperature: report.temperature.clone(),
            icon: report.icon.to_string(),
            sunrise: report.sunrise.clone(),
            sunset: report.sunset.clone(),
        }
    }
}
