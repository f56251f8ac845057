//! Ingredient substitution lookup.
//!
//! Entries are kept in file order and the first key contained in the
//! requested ingredient wins, so more specific keys ("buttermilk") must be
//! listed before the general ones they contain ("milk").

use crate::error::AppError;
use serde::Deserialize;
use std::path::Path;

const BUILTIN_SUBSTITUTIONS: &str = include_str!("../data/substitutions.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Substitution {
    pub ingredient: String,
    pub substitutes: Vec<String>,
}

/// Ordered, read-only substitution table
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    entries: Vec<Substitution>,
}

impl SubstitutionTable {
    pub fn new(entries: Vec<Substitution>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| Substitution {
                ingredient: entry.ingredient.to_lowercase(),
                ..entry
            })
            .collect();
        Self { entries }
    }

    pub fn builtin() -> Result<Self, AppError> {
        Self::from_json("built-in substitutions", BUILTIN_SUBSTITUTIONS)
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&path.display().to_string(), &json)
    }

    fn from_json(name: &str, json: &str) -> Result<Self, AppError> {
        let entries = serde_json::from_str(json).map_err(|source| AppError::DataError {
            name: name.to_string(),
            source,
        })?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Substitutes for the first table key contained in `ingredient`
    pub fn lookup(&self, ingredient: &str) -> Option<&[String]> {
        let ingredient = ingredient.trim().to_lowercase();
        if ingredient.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| ingredient.contains(entry.ingredient.as_str()))
            .map(|entry| entry.substitutes.as_slice())
    }
}
