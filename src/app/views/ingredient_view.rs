use crate::app::views::View;
use crate::pipeline::types::{IngredientSet, title_case};

const COLUMNS: usize = 3;

/// Detected ingredients laid out as a confirmation grid.
pub struct IngredientsView<'a> {
    ingredients: &'a IngredientSet,
}

impl<'a> IngredientsView<'a> {
    pub fn new(ingredients: &'a IngredientSet) -> Self {
        Self { ingredients }
    }
}

impl View for IngredientsView<'_> {
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.heading("🥬 Detected Ingredients");

        egui::Grid::new("detected_ingredients")
            .num_columns(COLUMNS)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for (i, ingredient) in self.ingredients.iter().enumerate() {
                    ui.colored_label(
                        egui::Color32::from_rgb(46, 160, 67),
                        format!("✓ {}", title_case(ingredient)),
                    );
                    if (i + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    }
}
