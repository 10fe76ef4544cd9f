use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The two availability states an event can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Available,
    Unavailable,
}

impl Status {
    /// Token used in the CSV log ("AVAILABLE" | "UNAVAILABLE")
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "AVAILABLE",
            Status::Unavailable => "UNAVAILABLE",
        }
    }

    /// Convert log token → enum. Exact match only: a hand-edited
    /// "available " or "Online" is not a status.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "AVAILABLE" => Some(Status::Available),
            "UNAVAILABLE" => Some(Status::Unavailable),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::from_token(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}
