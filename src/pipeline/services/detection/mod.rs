//! Mock ingredient detectors.
//!
//! Neither strategy looks at what is actually in the photo. They stand in for
//! a trained vision model or an external vision API.

pub mod color_detector;
pub mod random_detector;

use std::sync::Arc;

use image::DynamicImage;

use crate::config::{DetectionSettings, DetectionStrategy};
use crate::pipeline::types::IngredientSet;

pub use color_detector::{ChannelMeans, ColorHeuristicDetector};
pub use random_detector::RandomSampleDetector;

/// Items that might plausibly be found in a fridge.
pub const COMMON_FOOD_ITEMS: [&str; 25] = [
    "tomato",
    "potato",
    "onion",
    "carrot",
    "bell pepper",
    "cucumber",
    "lettuce",
    "spinach",
    "broccoli",
    "cauliflower",
    "chicken",
    "beef",
    "fish",
    "egg",
    "milk",
    "cheese",
    "yogurt",
    "butter",
    "bread",
    "apple",
    "banana",
    "orange",
    "lemon",
    "garlic",
    "ginger",
];

pub trait IngredientDetector: Send + Sync {
    fn detect(&self, image: &DynamicImage) -> IngredientSet;

    fn name(&self) -> &'static str;
}

pub fn detector_for(settings: &DetectionSettings) -> Arc<dyn IngredientDetector> {
    match settings.strategy {
        DetectionStrategy::Color => {
            Arc::new(ColorHeuristicDetector::new().with_max_items(settings.max_ingredients))
        }
        DetectionStrategy::Random => Arc::new(RandomSampleDetector::new(
            settings.random_min,
            settings.random_max,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_vocabulary_has_no_duplicates() {
        let set: IngredientSet = COMMON_FOOD_ITEMS.into_iter().collect();
        assert_eq!(set.len(), COMMON_FOOD_ITEMS.len());
    }

    #[test]
    fn test_detector_for_strategy() {
        let mut settings = Settings::default().detection;
        assert_eq!(detector_for(&settings).name(), "ColorHeuristicDetector");

        settings.strategy = DetectionStrategy::Random;
        assert_eq!(detector_for(&settings).name(), "RandomSampleDetector");
    }
}
