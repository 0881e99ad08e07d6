use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identity of a feedback ticket. Always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(i64);

impl FeedbackId {
    pub fn new(raw: i64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for FeedbackId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::BadRequest(format!("Invalid feedback id: {:?}", s));
        // i64::from_str would also take a leading '+'
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let raw: i64 = s.parse().map_err(|_| invalid())?;
        Self::new(raw).ok_or_else(invalid)
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a ticket as stored in `feedback.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Novo,
    Lido,
    Respondido,
}

impl FeedbackStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackStatus::Novo => "novo",
            FeedbackStatus::Lido => "lido",
            FeedbackStatus::Respondido => "respondido",
        }
    }
}

impl FromStr for FeedbackStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "novo" => Ok(FeedbackStatus::Novo),
            "lido" => Ok(FeedbackStatus::Lido),
            "respondido" => Ok(FeedbackStatus::Respondido),
            other => Err(Error::Internal(format!("Unknown feedback status: {}", other))),
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
