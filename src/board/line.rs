use serde::{Deserialize, Serialize};

/// PATH services. The feed carries no line identifier of its own, only the
/// display color(s) attached to each message, so identity is derived from
/// the published color codes. The serialized id keys the client's static
/// color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    #[serde(rename = "nwk-wtc")]
    NewarkWtc,
    #[serde(rename = "hob-wtc")]
    HobokenWtc,
    #[serde(rename = "jsq-33")]
    JournalSquare33rd,
    #[serde(rename = "hob-33")]
    Hoboken33rd,
    #[serde(rename = "jsq-33-hob")]
    JournalSquare33rdViaHoboken,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Line {
    /// Fixed lookup from the feed's `lineColor` value. Joint services carry
    /// two comma-joined codes; the match is order and case insensitive.
    pub fn from_color_code(code: &str) -> Self {
        let mut parts: Vec<String> = code
            .split(',')
            .map(|part| part.trim().to_ascii_uppercase())
            .filter(|part| !part.is_empty())
            .collect();
        parts.sort();

        let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
        match parts.as_slice() {
            ["D93A30"] => Self::NewarkWtc,
            ["65C100"] => Self::HobokenWtc,
            ["FF9900"] => Self::JournalSquare33rd,
            ["4D92FB"] => Self::Hoboken33rd,
            ["4D92FB", "FF9900"] => Self::JournalSquare33rdViaHoboken,
            _ => Self::Unknown,
        }
    }
}
