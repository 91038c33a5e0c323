pub mod catalog;
pub mod services;
pub mod types;

pub use catalog::RecipeCatalog;
pub use services::{FridgeAnalysisService, RecommendationService};
pub use types::{AnalysisReport, ImageUpload, IngredientSet, Recipe, RecipeMatch};
