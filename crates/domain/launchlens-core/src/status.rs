use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchStatus {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub abbrev: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Coarse category used to colour a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    /// Go for launch, or already flown successfully.
    Positive,
    /// Date or time still to be confirmed.
    Pending,
    Neutral,
}

impl StatusTone {
    pub fn from_abbrev(abbrev: &str) -> Self {
        match abbrev {
            "Go" | "Success" => StatusTone::Positive,
            "TBD" | "TBC" => StatusTone::Pending,
            _ => StatusTone::Neutral,
        }
    }
}

impl LaunchStatus {
    pub fn tone(&self) -> StatusTone {
        StatusTone::from_abbrev(&self.abbrev)
    }
}
