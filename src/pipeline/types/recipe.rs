use std::fmt;

use serde::{Deserialize, Serialize};

use super::IngredientSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub prep_time: String,
    pub difficulty: Difficulty,
}

impl Recipe {
    pub fn new(
        name: &str,
        ingredients: &[&str],
        instructions: &str,
        prep_time: &str,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            instructions: instructions.to_string(),
            prep_time: prep_time.to_string(),
            difficulty,
        }
    }

    pub fn uses(&self, ingredient: &str) -> bool {
        let wanted = ingredient.to_lowercase();
        self.ingredients.iter().any(|i| i.to_lowercase() == wanted)
    }
}

/// A recommended recipe together with how much of it the fridge covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    /// Distinct required ingredients found in the detected set
    pub available: usize,
    /// Length of the recipe's ingredient list
    pub required: usize,
}

impl RecipeMatch {
    pub fn evaluate(recipe: Recipe, detected: &IngredientSet) -> Self {
        let required_set: IngredientSet = recipe.ingredients.iter().map(String::as_str).collect();
        let available = required_set.iter().filter(|i| detected.contains(i)).count();
        let required = recipe.ingredients.len();

        Self {
            recipe,
            available,
            required,
        }
    }

    pub fn has_all(&self) -> bool {
        self.available == self.required
    }

    pub fn missing(&self) -> usize {
        self.required.saturating_sub(self.available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tomato_salad() -> Recipe {
        Recipe::new(
            "Tomato Salad",
            &["tomato", "onion", "cucumber"],
            "Chop vegetables, mix with dressing",
            "10 mins",
            Difficulty::Easy,
        )
    }

    #[test]
    fn test_match_with_all_ingredients() {
        let detected: IngredientSet = ["cucumber", "onion", "tomato", "egg"].into_iter().collect();
        let m = RecipeMatch::evaluate(tomato_salad(), &detected);
        assert_eq!(m.available, 3);
        assert!(m.has_all());
        assert_eq!(m.missing(), 0);
    }

    #[test]
    fn test_match_reports_missing_count() {
        let detected: IngredientSet = ["tomato", "egg", "chicken"].into_iter().collect();
        let m = RecipeMatch::evaluate(tomato_salad(), &detected);
        assert_eq!(m.available, 1);
        assert_eq!(m.required, 3);
        assert!(!m.has_all());
        assert_eq!(m.missing(), 2);
    }

    #[test]
    fn test_difficulty_display_and_serde() {
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
        let parsed: Difficulty = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(parsed, Difficulty::Medium);
    }

    #[test]
    fn test_uses_is_case_insensitive() {
        assert!(tomato_salad().uses("Onion"));
        assert!(!tomato_salad().uses("garlic"));
    }

    #[test]
    fn test_uses_folds_non_ascii_case() {
        let strudel = Recipe::new(
            "Apfelstrudel",
            &["Äpfel", "Zucker", "Mehl"],
            "Roll dough, fill, bake",
            "50 mins",
            Difficulty::Medium,
        );
        assert!(strudel.uses("äpfel"));
        assert!(strudel.uses("ÄPFEL"));
    }
}
