//! Declarative theme configuration
//!
//! Themes can be configured from a TOML document: initial mode, per-mode
//! palette overrides as literal color strings, and the font family table.
//!
//! ```toml
//! initial_mode = "dark"
//!
//! [colors.light]
//! primary = "#FF5500"
//! border = "rgba(153, 153, 153, 0.24)"
//!
//! [colors.dark]
//! primary = "#CC4400"
//!
//! [font_family]
//! base = "Inter"
//! ```
//!
//! Unknown token names and unparseable color literals are logged and
//! skipped; configuration never fails for color content, only for malformed
//! TOML.

use std::collections::HashMap;

use alpha_core::Color;
use serde::Deserialize;

use crate::theme::{ColorMode, ColorOverrides, ThemeBundle};
use crate::tokens::{ColorToken, FontFamilyTokens};

/// Theme configuration document
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub initial_mode: ModeName,
    #[serde(default)]
    pub colors: ModeColorConfig,
    #[serde(default)]
    pub font_family: FontFamilyConfig,
}

/// Mode name as written in configuration
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModeName {
    #[default]
    Light,
    Dark,
}

impl From<ModeName> for ColorMode {
    fn from(value: ModeName) -> Self {
        match value {
            ModeName::Light => ColorMode::Light,
            ModeName::Dark => ColorMode::Dark,
        }
    }
}

/// Per-mode color override tables (token name -> literal color string)
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ModeColorConfig {
    #[serde(default)]
    pub light: HashMap<String, String>,
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

/// Font family table
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FontFamilyConfig {
    pub base: Option<String>,
    pub custom: Option<String>,
    pub regular: Option<String>,
    pub bold: Option<String>,
    pub semi_bold: Option<String>,
    pub light: Option<String>,
    pub medium: Option<String>,
    pub extra_light: Option<String>,
    pub italic: Option<String>,
    pub extra_bold: Option<String>,
}

impl From<FontFamilyConfig> for FontFamilyTokens {
    fn from(config: FontFamilyConfig) -> Self {
        FontFamilyTokens {
            base: config.base,
            custom: config.custom,
            regular: config.regular,
            bold: config.bold,
            semi_bold: config.semi_bold,
            light: config.light,
            medium: config.medium,
            extra_light: config.extra_light,
            italic: config.italic,
            extra_bold: config.extra_bold,
        }
    }
}

/// Theme configuration failure
#[derive(Debug, thiserror::Error)]
pub enum ThemeConfigError {
    #[error("malformed theme config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ThemeConfig {
    /// Parse a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Initial color mode named by the config
    pub fn initial_mode(&self) -> ColorMode {
        self.initial_mode.into()
    }

    /// Build the theme bundle described by this config
    pub fn into_bundle(self) -> ThemeBundle {
        let mut overrides = ColorOverrides::default();
        collect_overrides(&self.colors.light, &mut overrides.light);
        collect_overrides(&self.colors.dark, &mut overrides.dark);
        ThemeBundle::new(overrides, self.font_family.into())
    }
}

fn collect_overrides(
    entries: &HashMap<String, String>,
    out: &mut rustc_hash::FxHashMap<ColorToken, Color>,
) {
    for (name, literal) in entries {
        let Some(token) = ColorToken::from_name(name) else {
            tracing::warn!(%name, "ignoring unknown color token in theme config");
            continue;
        };
        match Color::parse(literal) {
            Ok(color) => {
                out.insert(token, color);
            }
            Err(_) => {
                tracing::warn!(%name, %literal, "ignoring unparseable color in theme config");
            }
        }
    }
}
