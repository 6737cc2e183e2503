use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::Line;
use crate::ridepath::models::RidePathMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "toward-NY")]
    NewYork,
    #[serde(rename = "toward-NJ")]
    NewJersey,
}

impl Direction {
    /// Fixed lookup from the upstream destination label. Anything else is
    /// treated as a malformed group and skipped by the caller.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ToNY" => Some(Self::NewYork),
            "ToNJ" => Some(Self::NewJersey),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NewYork => "To New York",
            Self::NewJersey => "To New Jersey",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eta {
    Minutes(u32),
    Delayed,
}

impl Eta {
    /// Whole minutes remaining, rounded down. Negative, missing, or
    /// unreadable seconds clamp to `Delayed` instead of going negative.
    pub fn from_seconds(seconds: Option<i64>) -> Self {
        match seconds {
            Some(seconds) if seconds >= 0 => Self::Minutes((seconds / 60) as u32),
            _ => Self::Delayed,
        }
    }

    pub fn minutes(&self) -> Option<u32> {
        match self {
            Self::Minutes(minutes) => Some(*minutes),
            Self::Delayed => None,
        }
    }

    pub fn is_delayed(&self) -> bool {
        matches!(self, Self::Delayed)
    }

    /// Delayed entries sort after every timed entry.
    pub fn sort_key(&self) -> u32 {
        match self {
            Self::Minutes(minutes) => *minutes,
            Self::Delayed => u32::MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub line: Line,
    pub destination: String,
    pub direction: Direction,
    pub eta: Eta,
    pub arrival_display: String,
}

impl Departure {
    /// Normalizes one upstream message. Returns `None` when the entry has
    /// no usable headsign, so one broken message never sinks the board.
    pub fn from_message(
        message: &RidePathMessage,
        direction: Direction,
        suffixes: &[String],
    ) -> Option<Self> {
        let head_sign = message.head_sign.as_deref()?;
        let destination = clean_destination(head_sign, suffixes);
        if destination.is_empty() {
            return None;
        }

        let line = message
            .line_color
            .as_deref()
            .map(Line::from_color_code)
            .unwrap_or(Line::Unknown);
        let eta = Eta::from_seconds(parse_seconds(message.seconds_to_arrival.as_ref()));
        let arrival_display = message.arrival_time_message.clone().unwrap_or_default();

        Some(Self {
            line,
            destination,
            direction,
            eta,
            arrival_display,
        })
    }
}

/// Removes every configured routing suffix (exact substring match) and
/// trims the leftovers.
pub fn clean_destination(raw: &str, suffixes: &[String]) -> String {
    let mut name = raw.to_string();
    for suffix in suffixes {
        name = name.replace(suffix.as_str(), "");
    }
    name.trim().to_string()
}

fn parse_seconds(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::String(raw) => raw.trim().parse().ok(),
        Value::Number(number) => number.as_i64(),
        _ => None,
    }
}
