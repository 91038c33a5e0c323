use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CatalogError;
use crate::pipeline::types::{Difficulty, Recipe};

/// Recipes keyed by the lowercase ingredient they are filed under.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeCatalog {
    entries: IndexMap<String, Vec<Recipe>>,
}

/// A recipe filed under a key it does not list among its ingredients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViolation {
    pub key: String,
    pub recipe: String,
}

/// Short card shown before any analysis has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedRecipe {
    pub name: &'static str,
    pub prep_time: &'static str,
    pub difficulty: Difficulty,
}

pub const FEATURED_RECIPES: [FeaturedRecipe; 3] = [
    FeaturedRecipe {
        name: "Quick Scrambled Eggs",
        prep_time: "5 mins",
        difficulty: Difficulty::Easy,
    },
    FeaturedRecipe {
        name: "Tomato Pasta",
        prep_time: "20 mins",
        difficulty: Difficulty::Easy,
    },
    FeaturedRecipe {
        name: "Grilled Chicken",
        prep_time: "30 mins",
        difficulty: Difficulty::Medium,
    },
];

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        use Difficulty::*;

        let mut catalog = Self::new();
        catalog.add(
            "tomato",
            vec![
                Recipe::new(
                    "Tomato Pasta",
                    &["tomato", "pasta", "garlic", "olive oil"],
                    "Cook pasta, sauté garlic, add tomatoes, mix with pasta",
                    "20 mins",
                    Easy,
                ),
                Recipe::new(
                    "Tomato Salad",
                    &["tomato", "onion", "cucumber"],
                    "Chop vegetables, mix with dressing",
                    "10 mins",
                    Easy,
                ),
            ],
        );
        catalog.add(
            "chicken",
            vec![
                Recipe::new(
                    "Grilled Chicken",
                    &["chicken", "herbs", "olive oil"],
                    "Marinate chicken, grill until cooked through",
                    "30 mins",
                    Medium,
                ),
                Recipe::new(
                    "Chicken Curry",
                    &["chicken", "onion", "tomato", "spices"],
                    "Cook onions, add chicken and spices, simmer",
                    "45 mins",
                    Medium,
                ),
            ],
        );
        catalog.add(
            "egg",
            vec![
                Recipe::new(
                    "Scrambled Eggs",
                    &["egg", "butter", "salt"],
                    "Beat eggs, cook in butter until fluffy",
                    "5 mins",
                    Easy,
                ),
                Recipe::new(
                    "Egg Fried Rice",
                    &["egg", "rice", "vegetables"],
                    "Cook rice, scramble eggs, mix together",
                    "15 mins",
                    Easy,
                ),
            ],
        );
        catalog.add(
            "carrot",
            vec![Recipe::new(
                "Carrot Soup",
                &["carrot", "onion", "broth"],
                "Cook carrots and onions, blend with broth",
                "25 mins",
                Easy,
            )],
        );
        catalog.add(
            "potato",
            vec![
                Recipe::new(
                    "Mashed Potatoes",
                    &["potato", "butter", "milk"],
                    "Boil potatoes, mash with butter and milk",
                    "20 mins",
                    Easy,
                ),
                Recipe::new(
                    "French Fries",
                    &["potato", "oil"],
                    "Cut potatoes, fry until golden",
                    "15 mins",
                    Easy,
                ),
            ],
        );
        catalog.add(
            "onion",
            vec![Recipe::new(
                "Onion Rings",
                &["onion", "flour", "oil"],
                "Slice onions, coat in batter, fry",
                "20 mins",
                Medium,
            )],
        );
        catalog.add(
            "cheese",
            vec![Recipe::new(
                "Grilled Cheese",
                &["cheese", "bread", "butter"],
                "Butter bread, add cheese, grill until golden",
                "10 mins",
                Easy,
            )],
        );
        catalog.add(
            "bread",
            vec![Recipe::new(
                "Toast",
                &["bread", "butter"],
                "Toast bread, spread with butter",
                "3 mins",
                Easy,
            )],
        );
        catalog.add(
            "milk",
            vec![Recipe::new(
                "Milkshake",
                &["milk", "ice cream", "sugar"],
                "Blend milk with ice cream and sugar",
                "5 mins",
                Easy,
            )],
        );
        catalog.add(
            "apple",
            vec![Recipe::new(
                "Apple Pie",
                &["apple", "sugar", "flour", "butter"],
                "Make pastry, fill with apples, bake",
                "60 mins",
                Hard,
            )],
        );
        catalog
    }

    /// Parses a JSON object of ingredient -> recipe list. Keys are lowercased.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: IndexMap<String, Vec<Recipe>> = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut catalog = Self::new();
        for (key, recipes) in raw {
            catalog.add(&key, recipes);
        }
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::ReadError(e, path.to_path_buf()))?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "Loaded recipe catalog from {} ({} ingredients)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Loads the catalog file when one is configured, else the built-in table.
    /// Key/ingredient mismatches are logged, not rejected.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::builtin(),
        };

        for violation in catalog.validate() {
            warn!(
                "Recipe '{}' is filed under '{}' but does not list it as an ingredient",
                violation.recipe, violation.key
            );
        }
        Ok(catalog)
    }

    /// Appends recipes under `ingredient`, merging with any existing entry.
    pub fn add(&mut self, ingredient: &str, recipes: Vec<Recipe>) {
        self.entries
            .entry(ingredient.trim().to_lowercase())
            .or_default()
            .extend(recipes);
    }

    pub fn get(&self, ingredient: &str) -> Option<&[Recipe]> {
        self.entries.get(ingredient).map(Vec::as_slice)
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Vec<CatalogViolation> {
        self.entries
            .iter()
            .flat_map(|(key, recipes)| {
                recipes
                    .iter()
                    .filter(move |recipe| !recipe.uses(key))
                    .map(move |recipe| CatalogViolation {
                        key: key.clone(),
                        recipe: recipe.name.clone(),
                    })
            })
            .collect()
    }
}
