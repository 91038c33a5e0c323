use image::DynamicImage;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::{COMMON_FOOD_ITEMS, IngredientDetector};
use crate::pipeline::types::IngredientSet;

/// Placeholder detector: draws a random handful of common fridge items and
/// ignores the image entirely.
pub struct RandomSampleDetector {
    min_items: usize,
    max_items: usize,
}

impl RandomSampleDetector {
    pub fn new(min_items: usize, max_items: usize) -> Self {
        let max_items = max_items.min(COMMON_FOOD_ITEMS.len());
        Self {
            min_items: min_items.min(max_items),
            max_items,
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> IngredientSet {
        let count = rng.random_range(self.min_items..=self.max_items);
        COMMON_FOOD_ITEMS
            .choose_multiple(rng, count)
            .copied()
            .collect()
    }
}

impl Default for RandomSampleDetector {
    fn default() -> Self {
        Self::new(3, 8)
    }
}

impl IngredientDetector for RandomSampleDetector {
    fn detect(&self, _image: &DynamicImage) -> IngredientSet {
        self.sample(&mut rand::rng())
    }

    fn name(&self) -> &'static str {
        "RandomSampleDetector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_size_within_bounds() {
        let detector = RandomSampleDetector::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let detected = detector.sample(&mut rng);
            assert!((3..=8).contains(&detected.len()));
            assert!(detected.iter().all(|i| COMMON_FOOD_ITEMS.contains(&i)));
        }
    }

    #[test]
    fn test_draws_are_without_replacement() {
        let detector = RandomSampleDetector::new(8, 8);
        for seed in 0..200 {
            let detected = detector.sample(&mut StdRng::seed_from_u64(seed));
            assert_eq!(detected.len(), 8, "seed {seed} repeated an item");
        }
    }

    #[test]
    fn test_same_seed_same_draw() {
        let detector = RandomSampleDetector::default();
        let a = detector.sample(&mut StdRng::seed_from_u64(42));
        let b = detector.sample(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounds_are_clamped_to_vocabulary() {
        let detector = RandomSampleDetector::new(40, 100);
        let detected = detector.sample(&mut StdRng::seed_from_u64(1));
        assert_eq!(detected.len(), COMMON_FOOD_ITEMS.len());
    }
}
