//! Per-child layout parameters: requested size and margins.

use serde::Deserialize;

use flow_types::error::Result;
use flow_types::geometry::Edges;

use crate::config::{AttrValue, attr_pixels, check_density, default_density};

/// How a child asks to be sized along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChildDimension {
    /// A fixed size in pixels.
    Exact(i32),
    /// As large as the parent allows.
    MatchParent,
    /// As large as the child's content.
    #[default]
    WrapContent,
}

/// Layout parameters a flow container keeps for each child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ChildParams {
    pub margins: Edges,
    pub width: ChildDimension,
    pub height: ChildDimension,
}

impl ChildParams {
    /// A child with a fixed size request and no margins.
    pub fn fixed(width: i32, height: i32) -> Self {
        Self {
            width: ChildDimension::Exact(width),
            height: ChildDimension::Exact(height),
            ..Self::default()
        }
    }

    pub fn with_margins(mut self, margins: Edges) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_width(mut self, width: ChildDimension) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: ChildDimension) -> Self {
        self.height = height;
        self
    }

    /// Parse a TOML attribute table.
    pub fn from_toml(src: &str) -> Result<Self> {
        let attrs: ChildAttributes = toml::from_str(src)?;
        attrs.resolve()
    }

    /// Parse a JSON attribute object.
    pub fn from_json(src: &str) -> Result<Self> {
        let attrs: ChildAttributes = serde_json::from_str(src)?;
        attrs.resolve()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ChildAttributes {
    #[serde(default = "default_density")]
    density: f64,
    #[serde(default)]
    width: Option<AttrValue>,
    #[serde(default)]
    height: Option<AttrValue>,
    #[serde(default)]
    margin: Option<AttrValue>,
    #[serde(default)]
    margin_left: Option<AttrValue>,
    #[serde(default)]
    margin_top: Option<AttrValue>,
    #[serde(default)]
    margin_right: Option<AttrValue>,
    #[serde(default)]
    margin_bottom: Option<AttrValue>,
}

impl ChildAttributes {
    fn resolve(&self) -> Result<ChildParams> {
        let density = check_density(self.density)?;
        let px = |name: &str, value: &Option<AttrValue>, fallback: i32| -> Result<i32> {
            match value {
                Some(v) => attr_pixels(name, v, density),
                None => Ok(fallback),
            }
        };

        let uniform = px("margin", &self.margin, 0)?;
        Ok(ChildParams {
            margins: Edges {
                top: px("margin_top", &self.margin_top, uniform)?,
                right: px("margin_right", &self.margin_right, uniform)?,
                bottom: px("margin_bottom", &self.margin_bottom, uniform)?,
                left: px("margin_left", &self.margin_left, uniform)?,
            },
            width: dimension("width", self.width.as_ref(), density)?,
            height: dimension("height", self.height.as_ref(), density)?,
        })
    }
}

fn dimension(name: &str, value: Option<&AttrValue>, density: f64) -> Result<ChildDimension> {
    let Some(value) = value else {
        return Ok(ChildDimension::WrapContent);
    };
    if let AttrValue::Text(s) = value {
        match s.trim() {
            "match_parent" | "fill_parent" => return Ok(ChildDimension::MatchParent),
            "wrap_content" => return Ok(ChildDimension::WrapContent),
            _ => {},
        }
    }
    attr_pixels(name, value, density).map(ChildDimension::Exact)
}
