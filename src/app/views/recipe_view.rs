use crate::app::views::View;
use crate::pipeline::catalog::FEATURED_RECIPES;
use crate::pipeline::types::RecipeMatch;

pub fn coverage_label(recipe_match: &RecipeMatch) -> String {
    if recipe_match.has_all() {
        "✅ You have all ingredients!".to_string()
    } else {
        format!("📝 Need {} more ingredient(s)", recipe_match.missing())
    }
}

/// Recommended recipes as collapsible cards.
pub struct RecipeListView<'a> {
    recommendations: &'a [RecipeMatch],
}

impl<'a> RecipeListView<'a> {
    pub fn new(recommendations: &'a [RecipeMatch]) -> Self {
        Self { recommendations }
    }

    fn draw_card(ui: &mut egui::Ui, recipe_match: &RecipeMatch) {
        let recipe = &recipe_match.recipe;
        egui::CollapsingHeader::new(format!("🍽️ {} ({})", recipe.name, recipe.difficulty))
            .show(ui, |ui| {
                ui.columns(2, |cols| {
                    cols[0].label(egui::RichText::new("Ingredients needed:").strong());
                    cols[0].label(recipe.ingredients.join(", "));
                    cols[0].label(egui::RichText::new("Instructions:").strong());
                    cols[0].label(&recipe.instructions);

                    cols[1].label(format!("Prep Time: {}", recipe.prep_time));
                    cols[1].label(format!("Difficulty: {}", recipe.difficulty));
                    let color = if recipe_match.has_all() {
                        egui::Color32::from_rgb(46, 160, 67)
                    } else {
                        egui::Color32::from_rgb(56, 132, 244)
                    };
                    cols[1].colored_label(color, coverage_label(recipe_match));
                });
            });
    }

    /// Shown before the first analysis.
    pub fn draw_featured(ui: &mut egui::Ui) {
        ui.heading("🌟 Popular Recipes");
        for featured in FEATURED_RECIPES {
            ui.label(format!(
                "• {} - {} ({})",
                featured.name, featured.prep_time, featured.difficulty
            ));
        }
    }
}

impl View for RecipeListView<'_> {
    fn draw(&mut self, ui: &mut egui::Ui) {
        ui.heading("👨‍🍳 Recommended Recipes");

        if self.recommendations.is_empty() {
            ui.label(
                "No recipes found for the detected ingredients. Try uploading a different image!",
            );
            return;
        }

        for recipe_match in self.recommendations {
            Self::draw_card(ui, recipe_match);
        }
    }
}
