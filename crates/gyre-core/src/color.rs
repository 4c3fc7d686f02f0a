use derive_more::{Deref, From, Into};
use palette::{Srgb, Srgba, WithAlpha};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stroke color. Parsed from `#rgb`, `#rrggbb` or an SVG color name.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, SerializeDisplay, DeserializeFromStr)]
pub struct Color(Srgba<f64>);

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unrecognized color '{0}'")]
pub struct ColorError(String);

impl Color {
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self(Srgba::new(red, green, blue, 1.0))
    }

    pub fn into_components(self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rgb = if s.starts_with('#') {
            Srgb::<u8>::from_str(s).ok()
        } else {
            palette::named::from_str(&s.to_ascii_lowercase())
        };

        rgb.map(|c| Self(c.into_format::<f64>().with_alpha(1.0)))
            .ok_or_else(|| ColorError(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to_byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, _) = self.into_components();
        write!(f, "#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        let cases = vec![
            ("#ff0000", "#ff0000"),
            ("#F00", "#ff0000"),
            ("  #101014 ", "#101014"),
            ("white", "#ffffff"),
            ("RebeccaPurple", "#663399"),
        ];

        for (input, expected) in cases {
            let color: Color = input.parse().unwrap();
            assert_eq!(color.to_string(), expected, "parsing {input}");
        }
    }

    #[test]
    fn test_color_rejects_garbage() {
        assert!("#12".parse::<Color>().is_err());
        assert!("not-a-color".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_is_opaque() {
        let (_, _, _, a) = "navy".parse::<Color>().unwrap().into_components();
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_color_deserialization() {
        let color: Color = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(color, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#00ff00\"");
    }
}
