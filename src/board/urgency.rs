use serde::{Deserialize, Serialize};

use crate::board::Eta;

/// Visual treatment band for a row, derived from minutes remaining.
/// Bands are inclusive on the low side: 5 minutes is still urgent,
/// 10 minutes is still a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Urgent,
    Warning,
    Normal,
}

impl Urgency {
    pub fn from_eta(eta: &Eta) -> Self {
        match eta {
            Eta::Delayed => Self::Urgent,
            Eta::Minutes(minutes) if *minutes <= 5 => Self::Urgent,
            Eta::Minutes(minutes) if *minutes <= 10 => Self::Warning,
            Eta::Minutes(_) => Self::Normal,
        }
    }
}
