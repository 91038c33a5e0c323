pub mod fridge_app;
pub mod session;
pub mod views;

pub use fridge_app::FridgeApp;
pub use session::Session;
