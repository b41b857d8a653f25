use serde::Deserialize;
use serde_json::json;
use tracing::{
    error,
    info,
};

use super::api::{
    GenerateContentRequest,
    TextGenerator,
};
use crate::{
    carousel::{
        Card,
        CardSource,
        Rgb,
        Theme,
    },
    core::PrismError,
};

/// One element of the model's JSON answer. Anything else the model adds,
/// an `index` included, is ignored.
#[derive(Debug, Deserialize)]
struct GeneratedCard {
    title: String,
    description: String,
    color: Rgb,
}

pub fn theme_prompt(theme: Theme, count: u32) -> String {
    format!(
        "Generate {count} creative card concepts for a 3D carousel with the theme: {theme}. \n  \
         For each card, provide a title, a short description (max 10 words), and a vibrant RGB \
         color (e.g., \"142, 249, 252\"). \n  \
         Make them look beautiful in a light mode UI."
    )
}

pub fn card_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "color": { "type": "STRING", "description": "RGB string format 'R, G, B'" }
            },
            "required": ["title", "description", "color"]
        }
    })
}

/// Maps the model's text into a collection, stamping each card with its
/// position. Malformed text is logged and becomes an empty collection.
pub fn parse_cards(text: &str) -> Vec<Card> {
    match serde_json::from_str::<Vec<GeneratedCard>>(text) {
        Ok(raw) => raw
            .into_iter()
            .enumerate()
            .map(|(index, item)| Card {
                index,
                color: item.color,
                title: item.title,
                description: item.description,
                image: None,
            })
            .collect(),
        Err(e) => {
            error!(error = %e, "Failed to parse Gemini response");
            Vec::new()
        }
    }
}

/// Requests a themed card collection from a text model.
#[derive(Debug, Clone)]
pub struct ThemeFetcher<G> {
    generator: G,
}

impl<G: TextGenerator> ThemeFetcher<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Exactly one attempt. Service errors propagate, an unparseable answer
    /// yields an empty collection, and a missing answer counts as `"[]"`.
    pub async fn generate_theme_cards(
        &self,
        theme: Theme,
        count: u32,
    ) -> Result<Vec<Card>, PrismError> {
        let request = GenerateContentRequest::json(theme_prompt(theme, count), card_schema());
        let text = self.generator.generate(&request).await?.unwrap_or_else(|| "[]".to_string());

        let cards = parse_cards(&text);
        info!(theme = %theme, requested = count, received = cards.len(), "Theme cards generated");
        Ok(cards)
    }
}

impl<G: TextGenerator> CardSource for ThemeFetcher<G> {
    async fn fetch_cards(&self, theme: Theme, count: u32) -> Result<Vec<Card>, PrismError> {
        self.generate_theme_cards(theme, count).await
    }
}
