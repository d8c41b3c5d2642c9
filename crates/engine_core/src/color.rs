//! Color handling for markers, shells, and materials.
//!
//! The location catalog and scene styling use `#RRGGBB` hex tags; this
//! module parses them into linear-ish float RGB for the renderer.

use glam::Vec3;
use thiserror::Error;

/// Error parsing a `#RRGGBB` hex color tag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color tag must be 7 characters like #60A5FA, got {0:?}")]
    BadLength(String),
    #[error("color tag must start with '#', got {0:?}")]
    MissingHash(String),
    #[error("invalid hex digits in color tag {0:?}")]
    BadHex(String),
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Create a color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex tag.
    pub fn from_hex(tag: &str) -> Result<Self, ColorParseError> {
        if !tag.starts_with('#') {
            return Err(ColorParseError::MissingHash(tag.to_string()));
        }
        if tag.len() != 7 {
            return Err(ColorParseError::BadLength(tag.to_string()));
        }
        // Length is in bytes; a multibyte tag must fail as bad hex, not
        // panic on a char boundary below.
        if !tag.is_ascii() {
            return Err(ColorParseError::BadHex(tag.to_string()));
        }
        let parse = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::BadHex(tag.to_string()))
        };
        Ok(Self {
            r: parse(&tag[1..3])?,
            g: parse(&tag[3..5])?,
            b: parse(&tag[5..7])?,
        })
    }

    /// Convert to float RGB in [0, 1].
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Convert to float RGBA in [0, 1] with the given alpha.
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        let v = self.to_vec3();
        [v.x, v.y, v.z, alpha]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_tag() {
        let c = Color::from_hex("#60A5FA").unwrap();
        assert_eq!(c, Color::rgb(0x60, 0xA5, 0xFA));
    }

    #[test]
    fn rejects_missing_hash() {
        assert_eq!(
            Color::from_hex("60A5FA"),
            Err(ColorParseError::MissingHash("60A5FA".to_string()))
        );
    }

    #[test]
    fn rejects_short_tag() {
        assert!(matches!(
            Color::from_hex("#FFF"),
            Err(ColorParseError::BadLength(_))
        ));
    }

    #[test]
    fn rejects_multibyte_tag_without_panicking() {
        // "#€123" is 7 bytes but not 7 ASCII hex digits.
        assert!(matches!(
            Color::from_hex("#\u{20AC}123"),
            Err(ColorParseError::BadHex(_))
        ));
    }

    #[test]
    fn rejects_bad_digits() {
        assert!(matches!(
            Color::from_hex("#GGGGGG"),
            Err(ColorParseError::BadHex(_))
        ));
    }

    #[test]
    fn converts_to_unit_floats() {
        let v = Color::WHITE.to_vec3();
        assert_eq!(v, Vec3::ONE);
        let rgba = Color::rgb(0, 0, 0).to_rgba(0.5);
        assert_eq!(rgba, [0.0, 0.0, 0.0, 0.5]);
    }
}
