pub mod app;
pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{DetectionStrategy, Settings};
pub use error::{AppError, CatalogError};

pub use app::Session;
pub use pipeline::services::detection::{
    ColorHeuristicDetector, IngredientDetector, RandomSampleDetector,
};
pub use pipeline::{
    AnalysisReport, FridgeAnalysisService, ImageUpload, IngredientSet, Recipe, RecipeCatalog,
    RecipeMatch, RecommendationService,
};
