//! PostgreSQL card store

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::{ApiError, Result};
use crate::models::{DbCard, StudyStats};

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Card Store ===

    /// Get card by ID
    pub async fn get_card(&self, id: i64) -> Result<Option<DbCard>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, front, back, difficulty, study_count, last_studied_at, created_at, updated_at
            FROM flashcards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Get all cards, newest first
    pub async fn list_cards(&self) -> Result<Vec<DbCard>> {
        let cards = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, front, back, difficulty, study_count, last_studied_at, created_at, updated_at
            FROM flashcards
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cards)
    }

    /// Get cards with a given difficulty, newest first
    pub async fn list_cards_by_difficulty(&self, difficulty: &str) -> Result<Vec<DbCard>> {
        let cards = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, front, back, difficulty, study_count, last_studied_at, created_at, updated_at
            FROM flashcards
            WHERE difficulty = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(difficulty)
        .fetch_all(&self.pool)
        .await?;

        Ok(cards)
    }

    /// Insert a new card with the initial rating state
    pub async fn insert_card(&self, front: &str, back: &str) -> Result<DbCard> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            INSERT INTO flashcards (front, back)
            VALUES ($1, $2)
            RETURNING id, front, back, difficulty, study_count, last_studied_at, created_at, updated_at
            "#,
        )
        .bind(front)
        .bind(back)
        .fetch_one(&self.pool)
        .await?;

        Ok(card)
    }

    /// Update card content only; the rating state is untouched
    pub async fn update_card_content(
        &self,
        id: i64,
        front: &str,
        back: &str,
    ) -> Result<Option<DbCard>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            UPDATE flashcards
            SET front = $2,
                back = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, front, back, difficulty, study_count, last_studied_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(front)
        .bind(back)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Apply a rating to a card.
    ///
    /// A single UPDATE so concurrent ratings serialize on the row and the
    /// count never loses an increment. NOW() is evaluated once, so
    /// last_studied_at and updated_at get the same timestamp.
    pub async fn rate_card(&self, id: i64, difficulty: &str) -> Result<Option<DbCard>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            UPDATE flashcards
            SET difficulty = $2,
                study_count = study_count + 1,
                last_studied_at = NOW(),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, front, back, difficulty, study_count, last_studied_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(difficulty)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Move a card back to the not-studied column, clearing its counters
    pub async fn reset_card_rating(&self, id: i64) -> Result<Option<DbCard>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            UPDATE flashcards
            SET difficulty = 'not_studied',
                study_count = 0,
                last_studied_at = NULL,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, front, back, difficulty, study_count, last_studied_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Delete a card. Returns whether a row was removed.
    pub async fn delete_card(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM flashcards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // === Statistics ===

    /// Compute study statistics in one aggregate query
    pub async fn get_stats(&self) -> Result<StudyStats> {
        let stats = sqlx::query_as::<_, StudyStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE difficulty = 'not_studied') AS not_studied,
                COUNT(*) FILTER (WHERE difficulty = 'easy') AS easy,
                COUNT(*) FILTER (WHERE difficulty = 'medium') AS medium,
                COUNT(*) FILTER (WHERE difficulty = 'hard') AS hard,
                COALESCE(SUM(study_count), 0)::BIGINT AS total_studies,
                COALESCE(ROUND(AVG(study_count), 1), 0)::FLOAT8 AS avg_studies_per_card
            FROM flashcards
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }

    // === Seeding ===

    /// Count all cards
    pub async fn count_cards(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM flashcards")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert a sample card with a full study state.
    ///
    /// Rated cards get a last_studied_at so the rating-state invariant
    /// holds for seeded data too.
    pub async fn seed_card(&self, card: &SeedCard) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO flashcards (front, back, difficulty, study_count, last_studied_at)
            VALUES ($1, $2, $3, $4, CASE WHEN $4 > 0 THEN NOW() ELSE NULL END)
            "#,
        )
        .bind(card.front)
        .bind(card.back)
        .bind(card.difficulty)
        .bind(card.study_count)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Sample card used by the seed binary
pub struct SeedCard {
    pub front: &'static str,
    pub back: &'static str,
    pub difficulty: &'static str,
    pub study_count: i32,
}
