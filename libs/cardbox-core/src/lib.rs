//! Core domain logic for the Cardbox flashcard application.
//!
//! Provides:
//! - Shared types (Card, Difficulty)
//! - The review ordering comparator used by study mode
//! - Content validation for card fronts and backs

pub mod ordering;
pub mod types;
pub mod validation;

pub use ordering::{review_cmp, sort_for_review};
pub use types::{Card, Difficulty, ParseDifficultyError};
pub use validation::{validate_content, CardContent, ValidationErrors};
