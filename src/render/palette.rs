use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected #rrggbb or #rgb")]
pub struct ParseColorError(String);

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
                Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| err())
                };
                Ok(Color::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Label color for symbols missing from the palette.
pub const DEFAULT_LABEL_COLOR: Color = Color::rgb(0x80, 0x80, 0x80);

/// Label text color for an element drawn on a light background.
///
/// Follows the CPK convention, with hydrogen, carbon and the pale hues
/// darkened so the symbol stays legible on white.
pub fn element_color(symbol: &str) -> Color {
    match symbol {
        "H" => Color::rgb(0x55, 0x55, 0x55),
        "C" => Color::rgb(0x20, 0x20, 0x20),
        "N" => Color::rgb(0x30, 0x50, 0xf8),
        "O" => Color::rgb(0xff, 0x0d, 0x0d),
        "F" => Color::rgb(0x50, 0xb0, 0x30),
        "Cl" => Color::rgb(0x1f, 0xa0, 0x1f),
        "Br" => Color::rgb(0xa6, 0x29, 0x29),
        "I" => Color::rgb(0x94, 0x00, 0x94),
        "S" => Color::rgb(0xc8, 0xa0, 0x00),
        "P" => Color::rgb(0xff, 0x80, 0x00),
        "B" => Color::rgb(0xe0, 0x70, 0x70),
        "Si" => Color::rgb(0xb0, 0x90, 0x70),
        "Se" => Color::rgb(0xd0, 0x80, 0x00),
        "Li" => Color::rgb(0xcc, 0x80, 0xff),
        "Na" => Color::rgb(0xab, 0x5c, 0xf2),
        "K" => Color::rgb(0x8f, 0x40, 0xd4),
        "Mg" => Color::rgb(0x5a, 0xa0, 0x00),
        "Ca" => Color::rgb(0x2e, 0xa0, 0x00),
        "Al" => Color::rgb(0xbf, 0xa6, 0xa6),
        "Fe" => Color::rgb(0xe0, 0x66, 0x33),
        "Cu" => Color::rgb(0xc8, 0x80, 0x33),
        "Zn" => Color::rgb(0x7d, 0x80, 0xb0),
        "He" | "Ne" | "Ar" | "Kr" | "Xe" => Color::rgb(0x40, 0xa0, 0xc0),
        _ => DEFAULT_LABEL_COLOR,
    }
}
