//! Review ordering for study mode.
//!
//! The review sequence is a total order over the whole collection. Unrated
//! and poorly recalled cards surface first; well-known cards drift to the
//! tail. The order is deterministic for a given snapshot of the store.

use std::cmp::Ordering;

use crate::types::Card;

/// Compare two cards by review priority.
///
/// Priority, first differing key wins:
/// 1. difficulty class (`not_studied`, `hard`, `medium`, `easy`)
/// 2. study count, ascending
/// 3. cards never studied before cards with a `last_studied_at`
/// 4. `last_studied_at`, ascending (least recently reviewed first)
/// 5. id, ascending
///
/// Key 3 is trivially true inside the `not_studied` class; it keeps the
/// order total even if a writer ever leaves a rated card without a
/// timestamp.
pub fn review_cmp(a: &Card, b: &Card) -> Ordering {
    let key = |card: &Card| {
        (
            card.difficulty.class_rank(),
            card.study_count,
            card.last_studied_at.is_some(),
            card.last_studied_at,
            card.id,
        )
    };
    key(a).cmp(&key(b))
}

/// Sort cards in place into the review sequence.
pub fn sort_for_review(cards: &mut [Card]) {
    cards.sort_by(review_cmp);
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::Difficulty;

    fn card(
        id: i64,
        difficulty: Difficulty,
        study_count: i32,
        last_studied_minute: Option<i64>,
    ) -> Card {
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        Card {
            id,
            front: format!("front {id}"),
            back: format!("back {id}"),
            difficulty,
            study_count,
            last_studied_at: last_studied_minute.map(|m| base + Duration::minutes(m)),
            created_at: base,
            updated_at: base,
        }
    }

    fn ids_in_review_order(mut cards: Vec<Card>) -> Vec<i64> {
        sort_for_review(&mut cards);
        cards.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_unrated_then_hard_then_medium_then_easy() {
        let cards = vec![
            card(1, Difficulty::Easy, 5, Some(3)),
            card(2, Difficulty::NotStudied, 0, None),
            card(3, Difficulty::Hard, 1, Some(2)),
            card(4, Difficulty::Medium, 2, Some(1)),
            card(5, Difficulty::Hard, 1, Some(1)),
        ];
        assert_eq!(ids_in_review_order(cards), vec![2, 5, 3, 4, 1]);
    }

    #[test]
    fn test_lower_study_count_first_within_class() {
        let cards = vec![
            card(1, Difficulty::Medium, 4, Some(1)),
            card(2, Difficulty::Medium, 1, Some(2)),
            card(3, Difficulty::Medium, 2, Some(3)),
        ];
        assert_eq!(ids_in_review_order(cards), vec![2, 3, 1]);
    }

    #[test]
    fn test_least_recently_studied_first_within_count() {
        let cards = vec![
            card(1, Difficulty::Hard, 2, Some(30)),
            card(2, Difficulty::Hard, 2, Some(10)),
            card(3, Difficulty::Hard, 2, Some(20)),
        ];
        assert_eq!(ids_in_review_order(cards), vec![2, 3, 1]);
    }

    #[test]
    fn test_missing_timestamp_sorts_before_present() {
        // Tolerated even though a rated card should always have one.
        let cards = vec![
            card(1, Difficulty::Hard, 1, Some(1)),
            card(2, Difficulty::Hard, 1, None),
        ];
        assert_eq!(ids_in_review_order(cards), vec![2, 1]);
    }

    #[test]
    fn test_id_breaks_exact_ties() {
        let cards = vec![
            card(9, Difficulty::Easy, 3, Some(5)),
            card(4, Difficulty::Easy, 3, Some(5)),
            card(7, Difficulty::Easy, 3, Some(5)),
        ];
        assert_eq!(ids_in_review_order(cards), vec![4, 7, 9]);
    }

    #[test]
    fn test_order_is_total_and_deterministic() {
        let cards: Vec<Card> = (1..=12)
            .map(|id| {
                let difficulty = match id % 4 {
                    0 => Difficulty::NotStudied,
                    1 => Difficulty::Easy,
                    2 => Difficulty::Medium,
                    _ => Difficulty::Hard,
                };
                let count = if difficulty == Difficulty::NotStudied {
                    0
                } else {
                    (id % 3) as i32 + 1
                };
                let studied = (count > 0).then_some(id * 7 % 11);
                card(id, difficulty, count, studied)
            })
            .collect();

        let first = ids_in_review_order(cards.clone());
        let second = ids_in_review_order(cards);
        assert_eq!(first, second);

        let mut seen = first.clone();
        seen.sort_unstable();
        assert_eq!(seen, (1..=12).collect::<Vec<i64>>());
    }
}
