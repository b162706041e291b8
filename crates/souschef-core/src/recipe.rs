//! Recipe input model.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// One recipe: a display title plus its ordered instruction steps.
///
/// Supplied once at session creation and read-only thereafter. Where the
/// recipe came from (scraper, file, bundled data) is not this crate's
/// concern; it only requires at least one instruction to walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn new(title: impl Into<String>, instructions: Vec<String>) -> Result<Self, RecipeError> {
        let title = title.into();
        if instructions.is_empty() {
            return Err(RecipeError::NoInstructions { title });
        }
        Ok(Self {
            title,
            instructions,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, RecipeError> {
        let recipe: Self = serde_json::from_str(json)?;
        Self::new(recipe.title, recipe.instructions)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, RecipeError> {
        let json = std::fs::read_to_string(path).map_err(|source| RecipeError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn total_steps(&self) -> usize {
        self.instructions.len()
    }

    pub fn instruction(&self, index: usize) -> Option<&str> {
        self.instructions.get(index).map(String::as_str)
    }
}
