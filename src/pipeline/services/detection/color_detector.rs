use image::{DynamicImage, RgbImage};
use tracing::debug;

use super::IngredientDetector;
use crate::pipeline::types::IngredientSet;

const RED_ITEMS: [&str; 2] = ["tomato", "apple"];
const GREEN_ITEMS: [&str; 3] = ["lettuce", "cucumber", "broccoli"];
const BLUE_ITEMS: [&str; 2] = ["milk", "cheese"];
/// Always reported, whatever the colors say.
pub const FALLBACK_ITEMS: [&str; 3] = ["egg", "chicken", "onion"];

pub const DEFAULT_MAX_ITEMS: usize = 6;

/// Mean value of each RGB channel over every pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMeans {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ChannelMeans {
    /// Returns None for an image without pixels.
    pub fn of(image: &RgbImage) -> Option<Self> {
        let count = image.width() as u64 * image.height() as u64;
        if count == 0 {
            return None;
        }

        let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
        for px in image.pixels() {
            r += px[0] as u64;
            g += px[1] as u64;
            b += px[2] as u64;
        }

        let n = count as f64;
        Some(Self {
            red: r as f64 / n,
            green: g as f64 / n,
            blue: b as f64 / n,
        })
    }

    pub fn red_dominant(&self) -> bool {
        self.red > self.green && self.red > self.blue
    }

    pub fn green_dominant(&self) -> bool {
        self.green > self.red && self.green > self.blue
    }

    pub fn blue_dominant(&self) -> bool {
        self.blue > self.red && self.blue > self.green
    }
}

/// Guesses ingredients from whichever color channel dominates the photo.
pub struct ColorHeuristicDetector {
    max_items: usize,
}

impl ColorHeuristicDetector {
    pub fn new() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
        }
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn detect_from_means(&self, means: Option<ChannelMeans>) -> IngredientSet {
        let mut detected = IngredientSet::new();

        if let Some(means) = means {
            if means.red_dominant() {
                detected.extend(RED_ITEMS);
            }
            if means.green_dominant() {
                detected.extend(GREEN_ITEMS);
            }
            if means.blue_dominant() {
                detected.extend(BLUE_ITEMS);
            }
        }

        detected.extend(FALLBACK_ITEMS);
        detected.truncate(self.max_items);
        detected
    }
}

impl Default for ColorHeuristicDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientDetector for ColorHeuristicDetector {
    fn detect(&self, image: &DynamicImage) -> IngredientSet {
        let means = ChannelMeans::of(&image.to_rgb8());
        debug!("Channel means: {:?}", means);
        self.detect_from_means(means)
    }

    fn name(&self) -> &'static str {
        "ColorHeuristicDetector"
    }
}
