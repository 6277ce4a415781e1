pub mod flashcards;
pub mod health;
