//! A small chat backend for home cooks.
//!
//! `POST /predict` takes a message and an optional ingredient list. When the
//! ingredients match a known recipe the recipe is returned directly; anything
//! else is answered by Google Gemini.
//!
//! # Example
//! ```
//! use recipe_chat::{Reply, RecipeBook, Responder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let responder = Responder::new(RecipeBook::builtin()?, None);
//! let ingredients = vec!["flour".to_string(), "milk".to_string(), "egg".to_string()];
//!
//! match responder.respond("What can I make?", &ingredients).await {
//!     Reply::Recipe(recipe) => println!("Try {}", recipe.name),
//!     Reply::Response(text) => println!("{}", text),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod markdown;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod recipes;
pub mod responder;
pub mod routes;
pub mod server;
pub mod substitutions;

pub use config::AppConfig;
pub use error::{AppError, GenerationError};
pub use markdown::clean_markdown_formatting;
pub use model::{Difficulty, Recipe};
pub use prompt::build_prompt;
pub use providers::{Generation, GoogleProvider, LlmProvider};
pub use recipes::RecipeBook;
pub use responder::{Reply, Responder};
pub use server::{router, AppState};
pub use substitutions::SubstitutionTable;
