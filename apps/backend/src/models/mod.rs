//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from cardbox-core
pub use cardbox_core::types::{Card, Difficulty};

// === Database Entity Types ===

/// Flashcard row in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct DbCard {
    pub id: i64,
    pub front: String,
    pub back: String,
    pub difficulty: String,
    pub study_count: i32,
    pub last_studied_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbCard {
    /// Convert to API card type.
    /// An unknown stored difficulty falls back to `not_studied`.
    pub fn to_api_card(&self) -> Card {
        Card {
            id: self.id,
            front: self.front.clone(),
            back: self.back.clone(),
            difficulty: self.difficulty.parse().unwrap_or_default(),
            study_count: self.study_count,
            last_studied_at: self.last_studied_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Study statistics over the whole collection
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudyStats {
    pub total: i64,
    pub not_studied: i64,
    pub easy: i64,
    pub medium: i64,
    pub hard: i64,
    pub total_studies: i64,
    pub avg_studies_per_card: f64,
}

// === API Request/Response Types ===

/// Body of create and update requests.
/// Missing fields default to empty so validation can report them by name.
#[derive(Debug, Serialize, Deserialize)]
pub struct CardPayload {
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateDifficultyPayload {
    #[serde(default)]
    pub difficulty: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub filter: Option<String>,
    pub difficulty: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Standard success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: &str) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.to_string()),
        }
    }
}

/// List envelope with pagination metadata
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}
