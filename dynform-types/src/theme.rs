//! Theme passed explicitly to renderers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An sRGB colour, written as `#rrggbb` in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid colour '{value}', expected #rrggbb"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Colours and spacing shared by all renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub error: Color,
    pub chip_background: Color,
    pub chip_text: Color,

    /// Base spacing unit in pixels.
    pub spacing: f32,

    /// Maximum width of the form card in pixels.
    pub max_width: f32,
}

impl Theme {
    /// `n` spacing units in pixels.
    pub fn spacing(&self, n: f32) -> f32 {
        self.spacing * n
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x20, 0x71, 0x78),
            secondary: Color::rgb(0x48, 0x48, 0x48),
            error: Color::rgb(0xd3, 0x2f, 0x2f),
            chip_background: Color::rgb(0x66, 0xbc, 0xb5),
            chip_text: Color::rgb(0xf8, 0xf8, 0xf8),
            spacing: 8.0,
            max_width: 700.0,
        }
    }
}
