pub mod ingredient_view;
pub mod recipe_view;

pub use ingredient_view::IngredientsView;
pub use recipe_view::{RecipeListView, coverage_label};

pub trait View {
    fn draw(&mut self, ui: &mut egui::Ui);
}
