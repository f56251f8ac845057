//! The recipe list and the ingredient matcher.
//!
//! Recipes are loaded once at startup, either from the JSON document compiled
//! into the binary (`data/recipes.json`) or from a configured file.

use crate::error::AppError;
use crate::model::Recipe;
use std::path::Path;

const BUILTIN_RECIPES: &str = include_str!("../data/recipes.json");

/// A recipe only counts as a match when more than one user ingredient overlaps it.
pub const MIN_MATCHES: usize = 2;

/// Immutable, ordered list of recipes
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The recipes shipped with the binary
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_json("built-in recipes", BUILTIN_RECIPES)
    }

    /// Load a JSON array of recipes from disk
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&path.display().to_string(), &json)
    }

    fn from_json(name: &str, json: &str) -> Result<Self, AppError> {
        let recipes = serde_json::from_str(json).map_err(|source| AppError::DataError {
            name: name.to_string(),
            source,
        })?;
        Ok(Self::new(recipes))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Find the recipe sharing the most ingredients with `ingredients`.
    ///
    /// A user ingredient matches a recipe when it appears, case-insensitively,
    /// inside any of the recipe's ingredient lines ("egg" matches "2 eggs").
    /// Returns `None` unless the best score reaches [`MIN_MATCHES`]. Ties go to
    /// the recipe listed first.
    pub fn find_best_match<S: AsRef<str>>(&self, ingredients: &[S]) -> Option<&Recipe> {
        let wanted: Vec<String> = ingredients
            .iter()
            .map(|i| i.as_ref().trim().to_lowercase())
            .filter(|i| !i.is_empty())
            .collect();

        if wanted.len() < MIN_MATCHES {
            return None;
        }

        let mut best: Option<(&Recipe, usize)> = None;
        for recipe in &self.recipes {
            let score = match_count(recipe, &wanted);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((recipe, score));
            }
        }

        best.filter(|(_, score)| *score >= MIN_MATCHES)
            .map(|(recipe, _)| recipe)
    }
}

/// Number of (already lower-cased) user ingredients found in the recipe
fn match_count(recipe: &Recipe, wanted: &[String]) -> usize {
    let have: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|i| i.to_lowercase())
        .collect();

    wanted
        .iter()
        .filter(|w| have.iter().any(|h| h.contains(w.as_str())))
        .count()
}
