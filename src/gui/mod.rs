pub mod app;
pub mod carousel_view;
pub mod footer;
pub mod settings_panel;
pub mod theme;
pub mod top_bar;

pub use app::PrismApp;
