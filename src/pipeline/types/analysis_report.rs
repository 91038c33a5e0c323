use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{IngredientSet, RecipeMatch};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub source: String,
    pub analyzed_at: DateTime<Utc>,
    pub detector: String,
    pub ingredients: IngredientSet,
    pub recommendations: Vec<RecipeMatch>,
}

impl AnalysisReport {
    pub fn new(
        source: String,
        detector: &str,
        ingredients: IngredientSet,
        recommendations: Vec<RecipeMatch>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            analyzed_at: Utc::now(),
            detector: detector.to_string(),
            ingredients,
            recommendations,
        }
    }

    pub fn has_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }

    /// Writes the report as pretty JSON followed by a newline.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), AppError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
