use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::pipeline::catalog::RecipeCatalog;
use crate::pipeline::types::Recipe;

pub const DEFAULT_MAX_RECIPES: usize = 8;

/// Looks ingredients up in the catalog and returns the recipes they unlock.
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<RecipeCatalog>,
    max_recipes: usize,
}

impl RecommendationService {
    pub fn new(catalog: Arc<RecipeCatalog>) -> Self {
        Self {
            catalog,
            max_recipes: DEFAULT_MAX_RECIPES,
        }
    }

    pub fn with_max_recipes(mut self, max_recipes: usize) -> Self {
        self.max_recipes = max_recipes;
        self
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Recipes in first-seen order, unique by name, at most `max_recipes`.
    /// Unknown ingredients are skipped.
    pub fn recommend<S: AsRef<str>>(&self, ingredients: &[S]) -> Vec<Recipe> {
        let mut seen = HashSet::new();
        let mut recommendations = Vec::new();

        for ingredient in ingredients {
            let key = ingredient.as_ref().to_lowercase();
            let Some(recipes) = self.catalog.get(&key) else {
                debug!("No recipes filed under '{}'", key);
                continue;
            };

            for recipe in recipes {
                if recommendations.len() == self.max_recipes {
                    return recommendations;
                }
                if seen.insert(recipe.name.as_str()) {
                    recommendations.push(recipe.clone());
                }
            }
        }

        recommendations
    }
}
