//! Flashcard CRUD, study and statistics endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use cardbox_core::ordering;
use cardbox_core::types::{Card, Difficulty};
use cardbox_core::validation::{validate_content, ValidationErrors};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

const DEFAULT_PER_PAGE: i64 = 10;
const MAX_PER_PAGE: i64 = 100;

const DIFFICULTY_MESSAGE: &str = "Difficulty must be one of: not_studied, easy, medium, hard";

/// GET /api/flashcards
///
/// `filter=study` returns the review sequence; `difficulty=<level>`
/// filters by class; the default is newest first. All variants paginate.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PagedResponse<Card>>> {
    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE);

    if page < 1 {
        return Err(ApiError::BadRequest(
            "Page must be greater than 0".to_string(),
        ));
    }
    if !(1..=MAX_PER_PAGE).contains(&per_page) {
        return Err(ApiError::BadRequest(
            "Per page must be between 1 and 100".to_string(),
        ));
    }

    let cards: Vec<Card> = if query.filter.as_deref() == Some("study") {
        let mut cards: Vec<Card> = state
            .db
            .list_cards()
            .await?
            .iter()
            .map(DbCard::to_api_card)
            .collect();
        ordering::sort_for_review(&mut cards);
        cards
    } else if let Some(raw) = &query.difficulty {
        let difficulty: Difficulty = raw
            .parse()
            .map_err(|_| ApiError::BadRequest(DIFFICULTY_MESSAGE.to_string()))?;
        state
            .db
            .list_cards_by_difficulty(difficulty.as_str())
            .await?
            .iter()
            .map(DbCard::to_api_card)
            .collect()
    } else {
        state
            .db
            .list_cards()
            .await?
            .iter()
            .map(DbCard::to_api_card)
            .collect()
    };

    Ok(Json(paginate(cards, page, per_page)))
}

/// GET /api/flashcards/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Card>>> {
    let id = parse_id(&id)?;
    let card = state
        .db
        .get_card(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Flashcard not found".to_string()))?;

    Ok(Json(ApiResponse::new(card.to_api_card())))
}

/// POST /api/flashcards
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CardPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Card>>)> {
    let content =
        validate_content(&payload.front, &payload.back).map_err(ApiError::Validation)?;
    let card = state.db.insert_card(&content.front, &content.back).await?;

    tracing::info!("Created flashcard {}", card.id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            card.to_api_card(),
            "Flashcard created successfully",
        )),
    ))
}

/// PUT /api/flashcards/:id
///
/// Edits content only; the rating state is untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CardPayload>,
) -> Result<Json<ApiResponse<Card>>> {
    let id = parse_id(&id)?;
    let content =
        validate_content(&payload.front, &payload.back).map_err(ApiError::Validation)?;
    let card = state
        .db
        .update_card_content(id, &content.front, &content.back)
        .await?
        .ok_or_else(|| ApiError::NotFound("Flashcard not found".to_string()))?;

    Ok(Json(ApiResponse::with_message(
        card.to_api_card(),
        "Flashcard updated successfully",
    )))
}

/// DELETE /api/flashcards/:id
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let id = parse_id(&id)?;
    if !state.db.delete_card(id).await? {
        return Err(ApiError::NotFound("Flashcard not found".to_string()));
    }

    Ok(Json(ApiResponse::with_message(
        (),
        "Flashcard deleted successfully",
    )))
}

/// PATCH /api/flashcards/:id/difficulty
///
/// A rating (`easy`, `medium`, `hard`) increments the study counters.
/// `not_studied` is the kanban board's administrative reset: it moves the
/// card back to the unrated column and clears the counters instead.
pub async fn update_difficulty(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateDifficultyPayload>,
) -> Result<Json<ApiResponse<Card>>> {
    let id = parse_id(&id)?;
    let difficulty: Difficulty = payload
        .difficulty
        .parse()
        .map_err(|_| ApiError::Validation(ValidationErrors::for_difficulty(DIFFICULTY_MESSAGE)))?;

    let card = if difficulty.is_rating() {
        state.db.rate_card(id, difficulty.as_str()).await?
    } else {
        state.db.reset_card_rating(id).await?
    }
    .ok_or_else(|| ApiError::NotFound("Flashcard not found".to_string()))?;

    Ok(Json(ApiResponse::new(card.to_api_card())))
}

/// GET /api/flashcards/stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<ApiResponse<StudyStats>>> {
    let stats = state.db.get_stats().await?;
    Ok(Json(ApiResponse::new(stats)))
}

/// Path ids must be positive integers; anything else is a 400.
fn parse_id(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::BadRequest("Invalid ID parameter".to_string())),
    }
}

fn paginate(cards: Vec<Card>, page: i64, per_page: i64) -> PagedResponse<Card> {
    let total = cards.len() as i64;
    let total_pages = (total + per_page - 1) / per_page;
    // page is only lower-bounded, so the offset must not overflow
    let start = (page - 1).saturating_mul(per_page);
    let data = cards
        .into_iter()
        .skip(usize::try_from(start).unwrap_or(usize::MAX))
        .take(per_page as usize)
        .collect();

    PagedResponse {
        success: true,
        data,
        total,
        page,
        per_page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn card(id: i64) -> Card {
        let now = Utc::now();
        Card {
            id,
            front: format!("front {id}"),
            back: format!("back {id}"),
            difficulty: Difficulty::NotStudied,
            study_count: 0,
            last_studied_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("99999").unwrap(), 99999);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_paginate_first_page() {
        let cards: Vec<Card> = (1..=15).map(card).collect();
        let page = paginate(cards, 1, 10);

        assert_eq!(page.data.len(), 10);
        assert_eq!(page.total, 15);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data[0].id, 1);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let cards: Vec<Card> = (1..=15).map(card).collect();
        let page = paginate(cards, 2, 10);

        assert_eq!(page.data.len(), 5);
        assert_eq!(page.data[0].id, 11);
    }

    #[test]
    fn test_paginate_past_the_end_is_empty() {
        let cards: Vec<Card> = (1..=3).map(card).collect();
        let page = paginate(cards, 5, 10);

        assert_eq!(page.data.len(), 0);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_empty_collection() {
        let page = paginate(Vec::new(), 1, 10);

        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_paginate_huge_page_is_empty() {
        let cards: Vec<Card> = (1..=3).map(card).collect();
        let page = paginate(cards, i64::MAX, 10);

        assert_eq!(page.data.len(), 0);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_exact_multiple() {
        let cards: Vec<Card> = (1..=20).map(card).collect();
        let page = paginate(cards, 2, 10);

        assert_eq!(page.data.len(), 10);
        assert_eq!(page.total_pages, 2);
    }
}
