use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenMeteoResponse {
    pub current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weathercode: i64,
}
