//! Content validation for card fronts and backs.

use serde::Serialize;
use thiserror::Error;

/// Maximum length of a card side, in Unicode code points after trimming.
pub const MAX_CONTENT_LEN: usize = 1000;

/// Field-keyed validation failures. Serializes into the `errors` map of
/// the error envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("Validation failed")]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl ValidationErrors {
    /// A failure on the `difficulty` field alone.
    pub fn for_difficulty(message: impl Into<String>) -> Self {
        Self {
            difficulty: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none() && self.back.is_none() && self.difficulty.is_none()
    }
}

/// Card content that passed validation, trimmed and ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub front: String,
    pub back: String,
}

/// Validate and trim a card's front and back.
///
/// Both sides must be non-empty after trimming and at most
/// [`MAX_CONTENT_LEN`] code points long.
pub fn validate_content(front: &str, back: &str) -> Result<CardContent, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let front = front.trim();
    if front.is_empty() {
        errors.front = Some("Front side is required".to_string());
    } else if front.chars().count() > MAX_CONTENT_LEN {
        errors.front = Some("Front side must not exceed 1000 characters".to_string());
    }

    let back = back.trim();
    if back.is_empty() {
        errors.back = Some("Back side is required".to_string());
    } else if back.chars().count() > MAX_CONTENT_LEN {
        errors.back = Some("Back side must not exceed 1000 characters".to_string());
    }

    if errors.is_empty() {
        Ok(CardContent {
            front: front.to_string(),
            back: back.to_string(),
        })
    } else {
        Err(errors)
    }
}
