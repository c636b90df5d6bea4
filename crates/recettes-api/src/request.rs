//! Typed submission built from the raw form fields.

use std::collections::HashMap;

use recettes_core::{CategoryCounts, CoefficientTable, Error, Result};

/// Form field carrying the recipe name.
pub const RECIPE_FIELD: &str = "recette";

/// A validated submission: which recipe, and how many eaters per category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    /// Recipe name, surrounding whitespace removed.
    pub recipe: String,
    /// One count per category of the coefficient table.
    pub counts: CategoryCounts,
}

impl SubmitRequest {
    /// Validate raw form fields against the coefficient table.
    ///
    /// - `recette` is required and must not be blank.
    /// - Each known category is read as a non-negative integer; a missing
    ///   or empty field counts as zero.
    /// - Fields that are neither `recette` nor a known category are ignored.
    pub fn from_form(fields: &HashMap<String, String>, table: &CoefficientTable) -> Result<Self> {
        let recipe = fields
            .get(RECIPE_FIELD)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::missing_field(RECIPE_FIELD))?;

        let mut counts = CategoryCounts::new();
        for category in table.categories() {
            let count = match fields.get(category).map(|v| v.trim()) {
                None | Some("") => 0,
                Some(raw) => raw
                    .parse::<u32>()
                    .map_err(|_| Error::invalid_count(category, raw))?,
            };
            counts.set(category, count);
        }

        Ok(Self {
            recipe: recipe.to_string(),
            counts,
        })
    }
}
