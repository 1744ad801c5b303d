//! Hex color parsing.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use image::Rgba;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An opaque sRGB color written as `#RRGGBB`.
///
/// Only the six-digit form is accepted. Shorthand (`#fff`), named colors and
/// alpha suffixes are rejected with [`Error::InvalidColor`].
///
/// # Example
///
/// ```
/// use pwa_assets::HexColor;
///
/// let color = HexColor::parse("#658479").unwrap();
/// assert_eq!(color.rgb(), (0x65, 0x84, 0x79));
/// assert_eq!(color.to_string(), "#658479");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::<u8> {
            red: r,
            green: g,
            blue: b,
            standard: PhantomData,
        })
    }

    /// Parses a `#RRGGBB` string (hex digits in either case).
    pub fn parse(value: &str) -> Result<Self> {
        let digits = value
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| Error::InvalidColor(value.to_string()))?;

        let rgb: Srgb<u8> = digits
            .parse()
            .map_err(|_| Error::InvalidColor(value.to_string()))?;
        Ok(Self(rgb))
    }

    /// Returns the `(r, g, b)` components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.0.red, self.0.green, self.0.blue)
    }

    /// Returns the color as a fully opaque RGBA pixel.
    pub fn to_rgba(&self) -> Rgba<u8> {
        Rgba([self.0.red, self.0.green, self.0.blue, 255])
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for HexColor {
    fn schema_name() -> String {
        "HexColor".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        <String as schemars::JsonSchema>::json_schema(generator)
    }
}
