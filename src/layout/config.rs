//! Configuration for the layout and drawing pipeline.
//!
//! A [`LayoutConfig`] is grouped into three tables that mirror the TOML
//! layout accepted by [`load_config`]:
//!
//! - [`GeometryConfig`] (`[layout]`) — bond length used by the VSEPR fallback
//! - [`CanvasConfig`] (`[canvas]`) — surface size and padding margin
//! - [`StyleConfig`] (`[style]`) — stroke widths, dot and label geometry, colors
//!
//! Every field has a default, so a custom file only needs the values it changes:
//!
//! ```
//! use lewis_layout::load_config;
//!
//! let config = load_config(Some("[canvas]\nwidth = 640.0\n")).unwrap();
//! assert_eq!(config.canvas.width, 640.0);
//! assert_eq!(config.canvas.height, 300.0);
//! assert_eq!(config.layout.bond_length, 35.0);
//! ```

use serde::Deserialize;

use super::error::Error;
use crate::render::Color;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub layout: GeometryConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeometryConfig {
    /// Distance between bonded atoms placed by the VSEPR fallback, in layout units.
    #[serde(default = "default_bond_length")]
    pub bond_length: f64,
}

fn default_bond_length() -> f64 {
    35.0
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            bond_length: default_bond_length(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    /// Margin kept free on every side of the surface.
    #[serde(default = "default_padding")]
    pub padding: f64,
}

fn default_width() -> f64 {
    400.0
}
fn default_height() -> f64 {
    300.0
}
fn default_padding() -> f64 {
    40.0
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StyleConfig {
    /// Perpendicular distance between the strokes of a multiple bond.
    #[serde(default = "default_bond_spacing")]
    pub bond_spacing: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Maximum angular distance (degrees) at which a bond occupies a domain slot.
    #[serde(default = "default_lone_pair_tolerance_deg")]
    pub lone_pair_tolerance_deg: f64,
    /// Distance from the atom center to the middle of a lone-pair dot pair.
    #[serde(default = "default_lone_pair_distance")]
    pub lone_pair_distance: f64,
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,
    /// Center-to-center distance between the two dots of a pair.
    #[serde(default = "default_dot_gap")]
    pub dot_gap: f64,
    /// Radius of the background disc behind each element label.
    #[serde(default = "default_label_radius")]
    pub label_radius: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_bond_color")]
    pub bond_color: Color,
    #[serde(default = "default_dot_color")]
    pub dot_color: Color,
    #[serde(default = "default_background")]
    pub background: Color,
}

fn default_bond_spacing() -> f64 {
    4.0
}
fn default_stroke_width() -> f64 {
    1.5
}
fn default_lone_pair_tolerance_deg() -> f64 {
    45.0
}
fn default_lone_pair_distance() -> f64 {
    17.0
}
fn default_dot_radius() -> f64 {
    1.8
}
fn default_dot_gap() -> f64 {
    5.0
}
fn default_label_radius() -> f64 {
    10.0
}
fn default_font_size() -> f64 {
    14.0
}
fn default_bond_color() -> Color {
    Color::rgb(0x33, 0x33, 0x33)
}
fn default_dot_color() -> Color {
    Color::rgb(0x22, 0x22, 0x22)
}
fn default_background() -> Color {
    Color::WHITE
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            bond_spacing: default_bond_spacing(),
            stroke_width: default_stroke_width(),
            lone_pair_tolerance_deg: default_lone_pair_tolerance_deg(),
            lone_pair_distance: default_lone_pair_distance(),
            dot_radius: default_dot_radius(),
            dot_gap: default_dot_gap(),
            label_radius: default_label_radius(),
            font_size: default_font_size(),
            bond_color: default_bond_color(),
            dot_color: default_dot_color(),
            background: default_background(),
        }
    }
}

impl StyleConfig {
    #[inline]
    pub fn lone_pair_tolerance(&self) -> f64 {
        self.lone_pair_tolerance_deg.to_radians()
    }
}

impl LayoutConfig {
    /// Checks that every value leaves the pipeline something meaningful to do.
    pub fn validate(&self) -> Result<(), Error> {
        positive("layout.bond_length", self.layout.bond_length)?;
        positive("canvas.width", self.canvas.width)?;
        positive("canvas.height", self.canvas.height)?;
        non_negative("canvas.padding", self.canvas.padding)?;

        let usable = self.canvas.width.min(self.canvas.height) - 2.0 * self.canvas.padding;
        if usable <= 0.0 {
            return Err(Error::invalid_config(
                "canvas.padding",
                format!(
                    "padding {} leaves no drawing area on a {}x{} surface",
                    self.canvas.padding, self.canvas.width, self.canvas.height
                ),
            ));
        }

        let tol = self.style.lone_pair_tolerance_deg;
        if !(tol > 0.0 && tol <= 180.0) {
            return Err(Error::invalid_config(
                "style.lone_pair_tolerance_deg",
                format!("{tol} is outside (0, 180]"),
            ));
        }

        non_negative("style.bond_spacing", self.style.bond_spacing)?;
        positive("style.stroke_width", self.style.stroke_width)?;
        non_negative("style.lone_pair_distance", self.style.lone_pair_distance)?;
        positive("style.dot_radius", self.style.dot_radius)?;
        non_negative("style.dot_gap", self.style.dot_gap)?;
        non_negative("style.label_radius", self.style.label_radius)?;
        positive("style.font_size", self.style.font_size)?;

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_config(field, format!("{value} must be > 0")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_config(field, format!("{value} must be >= 0")))
    }
}

/// Returns the default configuration, or parses and validates custom TOML.
pub fn load_config(custom_toml: Option<&str>) -> Result<LayoutConfig, Error> {
    match custom_toml {
        Some(toml) => {
            let config: LayoutConfig = toml::from_str(toml)?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(LayoutConfig::default()),
    }
}
