mod analysis_report;
mod image_upload;
mod ingredient_set;
mod recipe;

pub use analysis_report::AnalysisReport;
pub use image_upload::ImageUpload;
pub use ingredient_set::{IngredientSet, title_case};
pub use recipe::{Difficulty, Recipe, RecipeMatch};
