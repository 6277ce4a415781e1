//! Seeds the database with sample flashcards.
//!
//! Skips seeding when the table already has cards, so it is safe to run
//! on every deploy.

use cardbox_backend::db::{Database, SeedCard};

const SAMPLE_CARDS: &[SeedCard] = &[
    SeedCard {
        front: "What is a closure in Rust?",
        back: "An anonymous function that can capture variables from its enclosing scope, \
               by reference, by mutable reference, or by value.",
        difficulty: "medium",
        study_count: 2,
    },
    SeedCard {
        front: "What does REST stand for?",
        back: "Representational State Transfer, an architectural style for designing \
               networked applications.",
        difficulty: "easy",
        study_count: 3,
    },
    SeedCard {
        front: "What is the difference between PUT and PATCH in HTTP?",
        back: "PUT replaces the entire resource, while PATCH applies partial modifications.",
        difficulty: "medium",
        study_count: 1,
    },
    SeedCard {
        front: "What is dependency injection?",
        back: "A design pattern where dependencies are provided to a component rather than \
               created by it, promoting loose coupling.",
        difficulty: "hard",
        study_count: 4,
    },
    SeedCard {
        front: "What is a primary key?",
        back: "A unique identifier for a record in a database table. It cannot be NULL and \
               must be unique.",
        difficulty: "easy",
        study_count: 1,
    },
    SeedCard {
        front: "What is database normalization?",
        back: "Organizing data in a database to reduce redundancy and improve data integrity.",
        difficulty: "medium",
        study_count: 2,
    },
    SeedCard {
        front: "What is the difference between INNER JOIN and LEFT JOIN?",
        back: "INNER JOIN returns only matching rows from both tables; LEFT JOIN returns all \
               rows from the left table with NULLs where the right side has no match.",
        difficulty: "hard",
        study_count: 1,
    },
    SeedCard {
        front: "What is CORS?",
        back: "Cross-Origin Resource Sharing, a mechanism that controls whether a web page \
               from one origin may access resources from a different origin.",
        difficulty: "not_studied",
        study_count: 0,
    },
    SeedCard {
        front: "What is the difference between authentication and authorization?",
        back: "Authentication verifies who you are; authorization determines what you can access.",
        difficulty: "not_studied",
        study_count: 0,
    },
    SeedCard {
        front: "What is a JWT?",
        back: "A JSON Web Token, a compact, URL-safe way of representing claims transferred \
               between two parties.",
        difficulty: "not_studied",
        study_count: 0,
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let db = Database::connect(&database_url).await?;
    db.run_migrations().await?;

    if db.count_cards().await? > 0 {
        tracing::info!("Flashcards table is not empty, skipping seed");
        return Ok(());
    }

    for card in SAMPLE_CARDS {
        db.seed_card(card).await?;
    }

    tracing::info!("Seeded {} flashcards", SAMPLE_CARDS.len());

    Ok(())
}
