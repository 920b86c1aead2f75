//! Container configuration and declarative attribute parsing.
//!
//! A flow container reads its spacing and padding from a small TOML or
//! JSON attribute table:
//!
//! ```toml
//! density = 2.0
//! row_spacing = "8dp"
//! column_spacing = 12
//! padding = "4dp"
//! padding_left = "16px"
//! ```
//!
//! Values are pixels when given as bare numbers, or dimension strings with a
//! `px` or `dp` suffix. Missing attributes default to zero.

use std::fmt;

use serde::Deserialize;

use flow_types::error::{FlowError, Result};
use flow_types::geometry::Edges;

/// Spacing and padding for one flow container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayoutConfig {
    /// Vertical gap between consecutive rows.
    pub row_spacing: i32,
    /// Horizontal gap between neighbours in the same row.
    pub column_spacing: i32,
    /// The container's own inset.
    pub padding: Edges,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row_spacing(mut self, spacing: i32) -> Self {
        self.row_spacing = spacing;
        self
    }

    pub fn with_column_spacing(mut self, spacing: i32) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Set row and column spacing together.
    pub fn with_spacing(self, row: i32, column: i32) -> Self {
        self.with_row_spacing(row).with_column_spacing(column)
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Copy with negative spacing and padding folded to zero.
    ///
    /// Logs a warning when anything had to be clamped.
    pub fn sanitized(&self) -> Self {
        if self.row_spacing < 0 || self.column_spacing < 0 || self.padding.has_negative() {
            log::warn!("negative spacing or padding in {self:?}, clamping to zero");
        }
        Self {
            row_spacing: self.row_spacing.max(0),
            column_spacing: self.column_spacing.max(0),
            padding: self.padding.clamped(),
        }
    }

    /// Parse a TOML attribute table.
    pub fn from_toml(src: &str) -> Result<Self> {
        let attrs: LayoutAttributes = toml::from_str(src)?;
        attrs.resolve()
    }

    /// Parse a JSON attribute object.
    pub fn from_json(src: &str) -> Result<Self> {
        let attrs: LayoutAttributes = serde_json::from_str(src)?;
        attrs.resolve()
    }
}

/// Raw container attributes as they appear in the source document.
#[derive(Debug, Clone, Deserialize)]
struct LayoutAttributes {
    #[serde(default = "default_density")]
    density: f64,
    #[serde(default)]
    row_spacing: Option<AttrValue>,
    #[serde(default)]
    column_spacing: Option<AttrValue>,
    #[serde(default)]
    padding: Option<AttrValue>,
    #[serde(default)]
    padding_left: Option<AttrValue>,
    #[serde(default)]
    padding_top: Option<AttrValue>,
    #[serde(default)]
    padding_right: Option<AttrValue>,
    #[serde(default)]
    padding_bottom: Option<AttrValue>,
}

pub(crate) fn default_density() -> f64 {
    1.0
}

impl LayoutAttributes {
    fn resolve(&self) -> Result<LayoutConfig> {
        let density = check_density(self.density)?;
        let px = |name: &str, value: &Option<AttrValue>| -> Result<Option<i32>> {
            value
                .as_ref()
                .map(|v| attr_pixels(name, v, density))
                .transpose()
        };

        let uniform = px("padding", &self.padding)?.unwrap_or(0);
        let config = LayoutConfig {
            row_spacing: px("row_spacing", &self.row_spacing)?.unwrap_or(0),
            column_spacing: px("column_spacing", &self.column_spacing)?.unwrap_or(0),
            padding: Edges {
                top: px("padding_top", &self.padding_top)?.unwrap_or(uniform),
                right: px("padding_right", &self.padding_right)?.unwrap_or(uniform),
                bottom: px("padding_bottom", &self.padding_bottom)?.unwrap_or(uniform),
                left: px("padding_left", &self.padding_left)?.unwrap_or(uniform),
            },
        };
        log::debug!("parsed layout config {config:?} at density {density}");
        Ok(config)
    }
}

pub(crate) fn check_density(density: f64) -> Result<f64> {
    if density.is_finite() && density > 0.0 {
        Ok(density)
    } else {
        Err(FlowError::Config(format!(
            "density must be a positive number, got {density}"
        )))
    }
}

/// An attribute value before unit conversion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum AttrValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    pub(crate) fn to_dimension(&self, name: &str) -> Result<Dimension> {
        match self {
            Self::Int(v) => Ok(Dimension::Px(*v as f64)),
            Self::Float(v) if !v.is_finite() => Err(FlowError::attribute(name, v.to_string())),
            Self::Float(v) => Ok(Dimension::Px(*v)),
            Self::Text(s) => Dimension::parse(s).ok_or_else(|| FlowError::attribute(name, s)),
        }
    }
}

/// A length with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Physical pixels.
    Px(f64),
    /// Density-independent pixels, scaled by the display density.
    Dp(f64),
}

impl Dimension {
    /// Parse `"12"`, `"12px"`, `"8dp"` or `"8dip"`. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (number, ctor): (&str, fn(f64) -> Self) = if let Some(n) = s.strip_suffix("dip") {
            (n, Self::Dp)
        } else if let Some(n) = s.strip_suffix("dp") {
            (n, Self::Dp)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, Self::Px)
        } else {
            (s, Self::Px)
        };
        let value: f64 = number.trim_end().parse().ok()?;
        value.is_finite().then(|| ctor(value))
    }

    /// Value in (fractional) pixels at the given density.
    pub fn to_pixels(self, density: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Dp(v) => v * density,
        }
    }

    /// Whole pixels for use as a size or offset.
    ///
    /// Rounds half up, and a non-zero length never collapses to zero: any
    /// positive length is at least one pixel.
    pub fn pixel_size(self, density: f64) -> i64 {
        let value = self.to_pixels(density);
        let rounded = (value + 0.5).floor() as i64;
        if rounded != 0 || value == 0.0 {
            rounded
        } else if value > 0.0 {
            1
        } else {
            -1
        }
    }

    fn to_pixel_size(self, density: f64, name: &str) -> Result<i32> {
        i32::try_from(self.pixel_size(density))
            .map_err(|_| FlowError::attribute(name, self.to_string()))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Dp(v) => write!(f, "{v}dp"),
        }
    }
}

/// Convert an attribute to whole pixels.
pub(crate) fn attr_pixels(name: &str, value: &AttrValue, density: f64) -> Result<i32> {
    value.to_dimension(name)?.to_pixel_size(density, name)
}
