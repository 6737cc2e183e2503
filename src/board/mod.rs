use chrono::{DateTime, Local};
use tracing::debug;

mod departure;
mod line;
mod urgency;
pub use departure::*;
pub use line::*;
pub use urgency::*;

use crate::ridepath::{Config, models::RidePathResponse};

/// One full refresh of the departure display. Built fresh on every fetch
/// and fully replaced by the next one; nothing here outlives a cycle.
#[derive(Debug, Clone)]
pub struct Board {
    pub station: String,
    pub fetched_at: DateTime<Local>,
    pub departures: Vec<Departure>,
}

impl Board {
    /// Filters the raw payload down to the configured station and
    /// normalizes every readable entry. Entries with an unknown direction
    /// label or no headsign are skipped, never fatal. An absent station or
    /// zero entries yields a valid empty board.
    pub fn from_upstream(raw: RidePathResponse, config: &Config) -> Self {
        let mut departures: Vec<Departure> = Vec::new();

        for station in &raw.results {
            if station.considered_station.as_deref() != Some(config.station.as_str()) {
                continue;
            }
            for destination in &station.destinations {
                let Some(direction) = destination
                    .label
                    .as_deref()
                    .and_then(Direction::from_label)
                else {
                    debug!(
                        "Skipping destination group with label {:?}",
                        destination.label
                    );
                    continue;
                };
                for message in &destination.messages {
                    if let Some(departure) =
                        Departure::from_message(message, direction, &config.route_suffixes)
                    {
                        departures.push(departure);
                    }
                }
            }
        }

        // Stable sort: ties keep upstream order, delayed entries go last.
        departures.sort_by_key(|departure| departure.eta.sort_key());

        Self {
            station: config.station_label.clone(),
            fetched_at: Local::now(),
            departures,
        }
    }
}
