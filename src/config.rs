use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::AppError;
use crate::pipeline::services::detection::COMMON_FOOD_ITEMS;

pub const DEFAULT_CONFIG_FILE: &str = "fridge.toml";
pub const ENV_PREFIX: &str = "FRIDGE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DetectionStrategy {
    /// Channel-mean color heuristic
    Color,
    /// Random draw from the common food vocabulary
    Random,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub detection: DetectionSettings,
    pub recommendation: RecommendationSettings,
    pub catalog: CatalogSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectionSettings {
    pub strategy: DetectionStrategy,
    pub max_ingredients: usize,
    pub random_min: usize,
    pub random_max: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecommendationSettings {
    pub max_recipes: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub window_title: String,
    pub processing_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            strategy: DetectionStrategy::Color,
            max_ingredients: 6,
            random_min: 3,
            random_max: 8,
        }
    }
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self { max_recipes: 8 }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_title: "Smart Fridge Food Recommender".to_string(),
            processing_delay_ms: 2000,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Layers defaults, an optional settings file and `FRIDGE__*` environment
    /// variables, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let file = path
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let settings: Settings = config::Config::builder()
            .add_source(config::File::with_name(&file).required(path.is_some()))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let detection = &self.detection;
        if detection.max_ingredients == 0 {
            return Err(AppError::InvalidSettings(
                "detection.max_ingredients must be greater than 0".to_string(),
            ));
        }
        if detection.random_min == 0 || detection.random_min > detection.random_max {
            return Err(AppError::InvalidSettings(format!(
                "detection.random_min ({}) must be between 1 and random_max ({})",
                detection.random_min, detection.random_max
            )));
        }
        if detection.random_max > COMMON_FOOD_ITEMS.len() {
            return Err(AppError::InvalidSettings(format!(
                "detection.random_max ({}) exceeds the {} known food items",
                detection.random_max,
                COMMON_FOOD_ITEMS.len()
            )));
        }
        if self.logging.level.parse::<Level>().is_err() {
            return Err(AppError::InvalidSettings(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }
        if self.recommendation.max_recipes == 0 {
            return Err(AppError::InvalidSettings(
                "recommendation.max_recipes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Falls back to INFO; `validate` rejects unknown levels up front.
    pub fn log_level(&self) -> Level {
        self.logging.level.parse().unwrap_or(Level::INFO)
    }
}
