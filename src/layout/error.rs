//! Error types for layout configuration.
//!
//! Laying out and drawing a molecule never fails: missing data degrades to
//! defaults instead. The only fallible step is turning user-supplied
//! configuration into a [`LayoutConfig`](super::LayoutConfig), which is
//! checked once up front so the pipeline itself can stay infallible.

use thiserror::Error;

/// Errors produced while loading or validating a layout configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse the configuration TOML.
    #[error("failed to parse layout configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is outside the range the layout can work with.
    #[error("invalid layout configuration value for '{field}': {detail}")]
    InvalidConfig {
        /// Dotted path of the offending field (e.g. `canvas.padding`).
        field: &'static str,
        /// Description of the problem.
        detail: String,
    },
}

impl Error {
    /// Creates an [`InvalidConfig`](Error::InvalidConfig) error.
    ///
    /// # Arguments
    ///
    /// * `field` — Dotted path of the offending field
    /// * `detail` — Description of the problem
    pub fn invalid_config(field: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            detail: detail.into(),
        }
    }
}
