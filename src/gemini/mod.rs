pub mod api;
pub mod theme_cards;

pub use api::{
    GeminiClient,
    GenerateContentRequest,
    TextGenerator,
};
pub use theme_cards::{
    parse_cards,
    ThemeFetcher,
};

/// The fetcher the app runs against the hosted model.
pub type GeminiThemeFetcher = ThemeFetcher<GeminiClient>;
