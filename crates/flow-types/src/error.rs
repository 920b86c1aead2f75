//! Error types for flow-layout.
//!
//! Layout itself never fails; errors only come out of the configuration
//! boundary where declarative attributes are parsed.

/// Errors produced while reading layout configuration.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid value for attribute `{name}`: {value:?}")]
    Attribute { name: String, value: String },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlowError {
    /// Build an [`FlowError::Attribute`] from any string-like pair.
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FlowError>;
