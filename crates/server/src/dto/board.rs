use pathboard::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DepartureDto {
    pub line: Line,
    pub destination: String,
    pub direction: Direction,
    pub minutes_until: Option<u32>,
    pub delayed: bool,
    pub urgency: Urgency,
    pub arrival_display: String,
}

impl DepartureDto {
    pub fn from(departure: &Departure) -> Self {
        Self {
            line: departure.line,
            destination: departure.destination.clone(),
            direction: departure.direction,
            minutes_until: departure.eta.minutes(),
            delayed: departure.eta.is_delayed(),
            urgency: Urgency::from_eta(&departure.eta),
            arrival_display: departure.arrival_display.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardDto {
    pub station: String,
    pub fetched_at: String,
    pub departures: Vec<DepartureDto>,
    pub stale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BoardDto {
    pub fn from(board: &Board) -> Self {
        Self {
            station: board.station.clone(),
            fetched_at: board.fetched_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            departures: board.departures.iter().map(DepartureDto::from).collect(),
            stale: false,
            error: None,
        }
    }

    /// The last good board, flagged so the client can show its age.
    pub fn stale(board: &Board, error: String) -> Self {
        Self {
            stale: true,
            error: Some(error),
            ..Self::from(board)
        }
    }
}
