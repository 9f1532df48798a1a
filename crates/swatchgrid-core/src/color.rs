//! Packed ARGB color values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0}")]
    MissingHash(String),
    #[error("Expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("Invalid hex digits in color: {0}")]
    InvalidDigit(String),
}

/// A color packed as `0xAARRGGBB`.
///
/// The picker never interprets colors beyond drawing and reporting them, so
/// this is a thin wrapper over the packed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Create a color from its packed ARGB value.
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Create an opaque color from RGB components.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xFF)
    }

    /// Create a color from RGBA components.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The packed ARGB value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Components as `[r, g, b, a]`.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Parse `#RRGGBB` (opaque) or `#AARRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(hex.to_string()))?;

        let opaque = match digits.len() {
            6 => true,
            8 => false,
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        // from_str_radix also accepts a leading sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))?;

        Ok(if opaque {
            Self(0xFF00_0000 | value)
        } else {
            Self(value)
        })
    }

    /// Format as `#AARRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Color(0x80FF_4081);
        assert_eq!(c.a(), 0x80);
        assert_eq!(c.r(), 0xFF);
        assert_eq!(c.g(), 0x40);
        assert_eq!(c.b(), 0x81);
        assert_eq!(c.to_rgba8(), [0xFF, 0x40, 0x81, 0x80]);
    }

    #[test]
    fn test_from_rgb_is_opaque() {
        assert_eq!(Color::from_rgb(0x3F, 0x51, 0xB5), Color(0xFF3F_51B5));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::from_hex("#3F51B5"), Ok(Color(0xFF3F_51B5)));
        assert_eq!(Color::from_hex("#803f51b5"), Ok(Color(0x803F_51B5)));
        assert_eq!("#FFFFFF".parse::<Color>(), Ok(Color::WHITE));
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(matches!(
            Color::from_hex("3F51B5"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert_eq!(Color::from_hex("#FFF"), Err(ColorParseError::InvalidLength(3)));
        assert_eq!(
            Color::from_hex("#FFFFFFFFF"),
            Err(ColorParseError::InvalidLength(9))
        );
        assert!(matches!(
            Color::from_hex("#GG0000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::from_hex("#+FFFFF"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_display_matches_hex() {
        let c = Color(0xFFE9_1E63);
        assert_eq!(c.to_string(), "#FFE91E63");
        assert_eq!(c.to_hex(), "#FFE91E63");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color(0xFF00_9688)).unwrap();
        assert_eq!(json, "\"#FF009688\"");

        let back: Color = serde_json::from_str("\"#009688\"").unwrap();
        assert_eq!(back, Color(0xFF00_9688));

        assert!(serde_json::from_str::<Color>("\"teal\"").is_err());
    }
}
