use super::models::{
    Card,
    Rgb,
};

const SEED: [(Rgb, &str, &str); 10] = [
    (Rgb::new(142, 249, 252), "Cyan Drift", "Crystal clear aesthetic of the future."),
    (Rgb::new(142, 252, 204), "Mint Frost", "Refreshing breeze in digital space."),
    (Rgb::new(142, 252, 157), "Lime Glow", "Energy radiating through neon light."),
    (Rgb::new(215, 252, 142), "Lemon Burst", "Zesty colors for a bright interface."),
    (Rgb::new(252, 252, 142), "Sunshine", "Warmth and clarity in every pixel."),
    (Rgb::new(252, 208, 142), "Amber Wave", "Rich golden tones of sunset."),
    (Rgb::new(252, 142, 142), "Coral Peak", "Soft red hues of mountain tops."),
    (Rgb::new(252, 142, 239), "Magenta Sky", "Mystical shades of the twilight hour."),
    (Rgb::new(204, 142, 252), "Violet Fog", "Ethereal purple mist around you."),
    (Rgb::new(142, 202, 252), "Sky Blue", "Infinite horizons in your display."),
];

/// The collection shown before anything has been generated.
pub fn seed_cards() -> Vec<Card> {
    SEED.iter()
        .enumerate()
        .map(|(index, (color, title, description))| Card {
            index,
            color: *color,
            title: title.to_string(),
            description: description.to_string(),
            image: None,
        })
        .collect()
}
