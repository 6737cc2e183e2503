use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub station: String,
    pub station_label: String,
    pub timeout: Duration,
    pub route_suffixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: "https://www.panynj.gov/bin/portauthority/ridepath.json".into(),
            station: "GRV".into(),
            station_label: "Grove Street (GRV)".into(),
            timeout: Duration::from_secs(10),
            route_suffixes: vec![" via Hoboken".into()],
        }
    }
}
