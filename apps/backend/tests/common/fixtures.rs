//! Test fixtures and factory functions for creating test data.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use cardbox_backend::db::Database;

/// JSON body for create and update requests.
pub fn card_payload(front: &str, back: &str) -> Value {
    json!({ "front": front, "back": back })
}

/// A timestamp the given number of minutes in the past.
pub fn studied_at(minutes_ago: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes_ago)
}

/// Insert a card directly with a full study state, bypassing the API.
///
/// Returns the assigned id.
pub async fn seed_card(
    db: &Database,
    front: &str,
    back: &str,
    difficulty: &str,
    study_count: i32,
    last_studied_at: Option<DateTime<Utc>>,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO flashcards (front, back, difficulty, study_count, last_studied_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(front)
    .bind(back)
    .bind(difficulty)
    .bind(study_count)
    .bind(last_studied_at)
    .fetch_one(db.pool())
    .await
    .expect("Failed to seed card")
}

/// Insert a plain unrated card and return its id.
pub async fn seed_unrated_card(db: &Database, front: &str, back: &str) -> i64 {
    seed_card(db, front, back, "not_studied", 0, None).await
}
