use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RidePathResponse {
    #[serde(default)]
    pub results: Vec<RidePathStation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RidePathStation {
    pub considered_station: Option<String>,
    #[serde(default)]
    pub destinations: Vec<RidePathDestination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RidePathDestination {
    pub label: Option<String>,
    #[serde(default)]
    pub messages: Vec<RidePathMessage>,
}

/// One upcoming train as the feed reports it. Every field is optional and
/// `secondsToArrival` has been observed as both a string and a number, so
/// it stays a raw `Value` until normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RidePathMessage {
    pub head_sign: Option<String>,
    pub last_updated: Option<String>,
    pub arrival_time_message: Option<String>,
    pub seconds_to_arrival: Option<Value>,
    pub line_color: Option<String>,
    pub target: Option<String>,
}
