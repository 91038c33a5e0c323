use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use image::DynamicImage;
use tower::Service;
use tracing::{error, info};

use crate::config::Settings;
use crate::error::AppError;
use crate::pipeline::catalog::RecipeCatalog;
use crate::pipeline::services::detection::{IngredientDetector, detector_for};
use crate::pipeline::services::recommendation_service::RecommendationService;
use crate::pipeline::types::{AnalysisReport, ImageUpload, RecipeMatch};

/// Decode -> detect -> recommend, as one request/response step.
#[derive(Clone)]
pub struct FridgeAnalysisService {
    detector: Arc<dyn IngredientDetector>,
    recommender: RecommendationService,
}

impl FridgeAnalysisService {
    pub fn new(detector: Arc<dyn IngredientDetector>, recommender: RecommendationService) -> Self {
        Self {
            detector,
            recommender,
        }
    }

    pub fn from_settings(settings: &Settings, catalog: Arc<RecipeCatalog>) -> Self {
        Self::new(
            detector_for(&settings.detection),
            RecommendationService::new(catalog)
                .with_max_recipes(settings.recommendation.max_recipes),
        )
    }

    pub fn detector_name(&self) -> &'static str {
        self.detector.name()
    }

    /// Decode failures are returned as errors; no ingredient list is guessed.
    pub fn analyze(&self, upload: &ImageUpload) -> Result<AnalysisReport, AppError> {
        let image = upload.decode().inspect_err(|e| {
            error!("Could not decode {}: {}", upload.name, e);
        })?;
        Ok(self.analyze_image(upload.name.clone(), &image))
    }

    pub fn analyze_image(&self, source: String, image: &DynamicImage) -> AnalysisReport {
        let ingredients = self.detector.detect(image);
        let recipes = self.recommender.recommend(&ingredients.to_vec());

        info!(
            "{}: {} detected {} ingredients, {} recipes recommended",
            source,
            self.detector.name(),
            ingredients.len(),
            recipes.len()
        );

        let recommendations = recipes
            .into_iter()
            .map(|recipe| RecipeMatch::evaluate(recipe, &ingredients))
            .collect();

        AnalysisReport::new(source, self.detector.name(), ingredients, recommendations)
    }
}

impl Service<ImageUpload> for FridgeAnalysisService {
    type Response = AnalysisReport;
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), AppError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, upload: ImageUpload) -> Self::Future {
        let result = self.analyze(&upload);

        Box::pin(async move { result })
    }
}
