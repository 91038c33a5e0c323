pub mod analysis_service;
pub mod detection;
pub mod recommendation_service;

pub use analysis_service::FridgeAnalysisService;
pub use detection::{ColorHeuristicDetector, IngredientDetector, RandomSampleDetector};
pub use recommendation_service::RecommendationService;
