use std::fs;

use anyhow::{Context, Result};

use lewis_layout::{LayoutConfig, load_config};

use crate::cli::LayoutOptions;

/// Builds the layout configuration: defaults, then `--config`, then per-flag overrides.
pub fn build_layout_config(opts: &LayoutOptions) -> Result<LayoutConfig> {
    let custom = opts
        .config
        .as_ref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))
        })
        .transpose()?;

    let mut config = load_config(custom.as_deref()).context("Invalid layout configuration")?;

    if let Some(width) = opts.width {
        config.canvas.width = width;
    }
    if let Some(height) = opts.height {
        config.canvas.height = height;
    }
    if let Some(padding) = opts.padding {
        config.canvas.padding = padding;
    }
    if let Some(bond_length) = opts.bond_length {
        config.layout.bond_length = bond_length;
    }

    config
        .validate()
        .context("Invalid layout option on the command line")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> LayoutOptions {
        LayoutOptions {
            config: None,
            width: None,
            height: None,
            padding: None,
            bond_length: None,
        }
    }

    #[test]
    fn defaults_without_options() {
        let config = build_layout_config(&options()).unwrap();
        assert_eq!(config.canvas.width, 400.0);
        assert_eq!(config.layout.bond_length, 35.0);
    }

    #[test]
    fn flags_override_defaults() {
        let opts = LayoutOptions {
            width: Some(800.0),
            bond_length: Some(50.0),
            ..options()
        };
        let config = build_layout_config(&opts).unwrap();
        assert_eq!(config.canvas.width, 800.0);
        assert_eq!(config.canvas.height, 300.0);
        assert_eq!(config.layout.bond_length, 50.0);
    }

    #[test]
    fn overrides_are_validated() {
        let opts = LayoutOptions {
            padding: Some(500.0),
            ..options()
        };
        assert!(build_layout_config(&opts).is_err());
    }
}
