//! Core types for the flashcard application.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A card's current rating, or `NotStudied` before the first rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    NotStudied,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Wire representation, matching the stored column value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStudied => "not_studied",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Review priority class: unrated cards first, then hard, medium, easy.
    pub fn class_rank(self) -> u8 {
        match self {
            Self::NotStudied => 0,
            Self::Hard => 1,
            Self::Medium => 2,
            Self::Easy => 3,
        }
    }

    /// True for values a user may submit as a rating.
    /// `not_studied` is the initial state, not a rating.
    pub fn is_rating(self) -> bool {
        !matches!(self, Self::NotStudied)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::NotStudied
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown difficulty value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty: {0}")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_studied" => Ok(Self::NotStudied),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(ParseDifficultyError(other.to_string())),
        }
    }
}

/// A flashcard with its full study state, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub front: String,
    pub back: String,
    pub difficulty: Difficulty,
    pub study_count: i32,
    /// Serialized as `null` until the card is first rated.
    pub last_studied_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
