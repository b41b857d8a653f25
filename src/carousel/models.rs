use std::{
    fmt,
    ops::RangeInclusive,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::PrismError;

/// Card color, written on the wire as `"R, G, B"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = PrismError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels: Vec<u8> = s
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| PrismError::InvalidColor(s.to_string()))?;

        match channels.as_slice() {
            [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
            _ => Err(PrismError::InvalidColor(s.to_string())),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = PrismError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub index: usize, // angular slot, always the position in the collection
    pub color: Rgb,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Theme {
    Aurora,
    #[default]
    Pastel,
    Ocean,
    Desert,
    Cyber,
}

impl Theme {
    pub const ALL: [Theme; 5] =
        [Theme::Aurora, Theme::Pastel, Theme::Ocean, Theme::Desert, Theme::Cyber];

    /// Upper-case name, as sent to the generator.
    pub fn key(&self) -> &'static str {
        match self {
            Theme::Aurora => "AURORA",
            Theme::Pastel => "PASTEL",
            Theme::Ocean => "OCEAN",
            Theme::Desert => "DESERT",
            Theme::Cyber => "CYBER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Aurora => "Aurora",
            Theme::Pastel => "Pastel",
            Theme::Ocean => "Ocean",
            Theme::Desert => "Desert",
            Theme::Cyber => "Cyber",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Numeric parameters for the carousel's geometry and timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    pub quantity: u32,      // cards requested from the generator
    pub duration: f32,      // seconds per full revolution
    pub perspective: f32,   // px, viewer distance
    pub rotate_x: f32,      // degrees of tilt
    pub width: f32,         // px
    pub height: f32,        // px
    pub radius_offset: f32, // px, added to width + height for the ring radius
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            quantity: 10,
            duration: 20.0,
            perspective: 1000.0,
            rotate_x: -15.0,
            width: 140.0,
            height: 200.0,
            radius_offset: 50.0,
        }
    }
}

impl CarouselConfig {
    pub fn get(&self, field: ConfigField) -> f32 {
        match field {
            ConfigField::Quantity => self.quantity as f32,
            ConfigField::Duration => self.duration,
            ConfigField::Perspective => self.perspective,
            ConfigField::RotateX => self.rotate_x,
            ConfigField::Width => self.width,
            ConfigField::Height => self.height,
            ConfigField::RadiusOffset => self.radius_offset,
        }
    }

    /// Writes exactly one field. Bounds are not enforced here.
    pub fn set(&mut self, field: ConfigField, value: f32) {
        match field {
            ConfigField::Quantity => self.quantity = value.max(0.0).round() as u32,
            ConfigField::Duration => self.duration = value,
            ConfigField::Perspective => self.perspective = value,
            ConfigField::RotateX => self.rotate_x = value,
            ConfigField::Width => self.width = value,
            ConfigField::Height => self.height = value,
            ConfigField::RadiusOffset => self.radius_offset = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Quantity,
    Duration,
    Perspective,
    RotateX,
    Width,
    Height,
    RadiusOffset,
}

impl ConfigField {
    /// Order of the sliders in the settings panel.
    pub const SLIDERS: [ConfigField; 7] = [
        ConfigField::Perspective,
        ConfigField::RotateX,
        ConfigField::Duration,
        ConfigField::RadiusOffset,
        ConfigField::Width,
        ConfigField::Height,
        ConfigField::Quantity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::Quantity => "Card Count",
            ConfigField::Duration => "Duration (s)",
            ConfigField::Perspective => "Perspective",
            ConfigField::RotateX => "Rotation X",
            ConfigField::Width => "Card Width",
            ConfigField::Height => "Card Height",
            ConfigField::RadiusOffset => "Radius Offset",
        }
    }

    /// Advisory range for the slider widget.
    pub fn bounds(&self) -> RangeInclusive<f32> {
        match self {
            ConfigField::Quantity => 3.0..=24.0,
            ConfigField::Duration => 5.0..=60.0,
            ConfigField::Perspective => 400.0..=2000.0,
            ConfigField::RotateX => -45.0..=45.0,
            ConfigField::Width => 80.0..=300.0,
            ConfigField::Height => 120.0..=400.0,
            ConfigField::RadiusOffset => -100.0..=300.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_parsing() {
        assert_eq!("142, 249, 252".parse::<Rgb>().unwrap(), Rgb::new(142, 249, 252));
        assert_eq!("0,0,255".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 255));
        assert_eq!(" 1 , 2 , 3 ".parse::<Rgb>().unwrap(), Rgb::new(1, 2, 3));

        assert!("256, 0, 0".parse::<Rgb>().is_err());
        assert!("-1, 0, 0".parse::<Rgb>().is_err());
        assert!("10, 20".parse::<Rgb>().is_err());
        assert!("10, 20, 30, 40".parse::<Rgb>().is_err());
        assert!("#ff00ff".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgb_serde_uses_string_form() {
        let json = serde_json::to_string(&Rgb::new(252, 142, 239)).unwrap();
        assert_eq!(json, "\"252, 142, 239\"");

        let parsed: Rgb = serde_json::from_str("\"204, 142, 252\"").unwrap();
        assert_eq!(parsed, Rgb::new(204, 142, 252));

        assert!(serde_json::from_str::<Rgb>("\"red\"").is_err());
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(Theme::default(), Theme::Pastel);
        assert_eq!(Theme::Cyber.to_string(), "CYBER");
        assert_eq!(Theme::Ocean.label(), "Ocean");
        assert_eq!(serde_json::to_string(&Theme::Desert).unwrap(), "\"DESERT\"");
        assert_eq!(Theme::ALL.len(), 5);
    }

    #[test]
    fn test_config_set_touches_one_field() {
        let before = CarouselConfig::default();
        let mut after = before;
        after.set(ConfigField::Width, 180.0);

        assert_eq!(after.width, 180.0);
        assert_eq!(after.height, before.height);
        assert_eq!(after.quantity, before.quantity);
        assert_eq!(after.get(ConfigField::Width), 180.0);
    }

    #[test]
    fn test_quantity_rounds_and_floors_at_zero() {
        let mut config = CarouselConfig::default();
        config.set(ConfigField::Quantity, 12.6);
        assert_eq!(config.quantity, 13);
        config.set(ConfigField::Quantity, -4.0);
        assert_eq!(config.quantity, 0);
    }

    #[test]
    fn test_default_values_sit_inside_slider_bounds() {
        let config = CarouselConfig::default();
        for field in ConfigField::SLIDERS {
            assert!(
                field.bounds().contains(&config.get(field)),
                "{:?} default outside its bounds",
                field
            );
        }
    }
}
