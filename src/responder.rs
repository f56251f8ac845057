//! Turns a chat message (and optional ingredient list) into a reply.
//!
//! A recipe match is tried first; everything else goes to the text
//! generation provider. Generation problems never surface as errors: they are
//! folded into the reply text.

use crate::markdown::clean_markdown_formatting;
use crate::model::Recipe;
use crate::prompt::build_prompt;
use crate::providers::{Generation, LlmProvider};
use crate::recipes::RecipeBook;
use log::{debug, error, info, warn};
use rand::seq::SliceRandom;
use serde::Serialize;

/// Canned replies used when the model returns nothing usable
pub const FALLBACK_RESPONSES: [&str; 4] = [
    "I'm not sure what to suggest right now. Could you tell me a bit more about what you'd like to cook?",
    "Hmm, I couldn't come up with an answer for that. Try listing a few ingredients you have on hand!",
    "Sorry, I'm drawing a blank. Maybe ask me about a specific dish or ingredient?",
    "I didn't quite catch that. Could you rephrase your question?",
];

pub const MODEL_NOT_INITIALIZED: &str =
    "Error: AI model not initialized. Please check API key and configuration.";

pub const API_KEY_PROBLEM: &str =
    "Sorry, there was an issue with the API key or permissions. Please check the server logs.";

/// A successful reply, serialized as `{"recipe": ...}` or `{"response": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    Recipe(Recipe),
    Response(String),
}

pub struct Responder {
    recipes: RecipeBook,
    provider: Option<Box<dyn LlmProvider>>,
}

impl Responder {
    /// `provider` is `None` when no API key was available at startup
    pub fn new(recipes: RecipeBook, provider: Option<Box<dyn LlmProvider>>) -> Self {
        Self { recipes, provider }
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn respond(&self, message: &str, ingredients: &[String]) -> Reply {
        if let Some(recipe) = self.recipes.find_best_match(ingredients) {
            info!("Matched recipe '{}' from {} ingredients", recipe.name, ingredients.len());
            return Reply::Recipe(recipe.clone());
        }

        let ingredients = (!ingredients.is_empty()).then_some(ingredients);
        let prompt = build_prompt(message, ingredients);
        Reply::Response(self.generate_text(&prompt).await)
    }

    async fn generate_text(&self, prompt: &str) -> String {
        let Some(provider) = &self.provider else {
            warn!("Generation requested but no provider is configured");
            return MODEL_NOT_INITIALIZED.to_string();
        };

        debug!("Prompt for {}: {}", provider.provider_name(), prompt);

        match provider.generate(prompt).await {
            Ok(Generation::Text(text)) => {
                let cleaned = clean_markdown_formatting(&text);
                if cleaned.trim().is_empty() {
                    warn!("{} returned only formatting markers", provider.provider_name());
                    fallback_response().to_string()
                } else {
                    cleaned
                }
            }
            Ok(Generation::Blocked(reason)) => {
                warn!("{} blocked the reply: {}", provider.provider_name(), reason);
                fallback_response().to_string()
            }
            Ok(Generation::Empty) => {
                warn!("{} returned an empty reply", provider.provider_name());
                fallback_response().to_string()
            }
            Err(e) if e.is_auth_failure() => {
                error!("{} rejected the API key: {}", provider.provider_name(), e);
                API_KEY_PROBLEM.to_string()
            }
            Err(e) => {
                error!("Error calling {}: {}", provider.provider_name(), e);
                format!("Sorry, an error occurred while contacting the AI: {}", e)
            }
        }
    }
}

/// One of [`FALLBACK_RESPONSES`], chosen uniformly at random
pub fn fallback_response() -> &'static str {
    FALLBACK_RESPONSES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FALLBACK_RESPONSES[0])
}
