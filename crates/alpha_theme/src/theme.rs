//! Theme definition and light/dark bundling

use alpha_core::Color;
use rustc_hash::FxHashMap;

use crate::palettes;
use crate::tokens::{ColorToken, ColorTokens, FontFamilyTokens};

/// Active color scheme
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn toggle(&self) -> ColorMode {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

/// Per-mode palette overrides (token -> replacement color)
#[derive(Clone, Debug, Default)]
pub struct ColorOverrides {
    pub light: FxHashMap<ColorToken, Color>,
    pub dark: FxHashMap<ColorToken, Color>,
}

impl ColorOverrides {
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    fn for_mode(&self, mode: ColorMode) -> &FxHashMap<ColorToken, Color> {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// One resolved theme variant
#[derive(Clone, Debug)]
pub struct Theme {
    mode: ColorMode,
    colors: ColorTokens,
    fonts: FontFamilyTokens,
}

impl Theme {
    pub fn new(mode: ColorMode, colors: ColorTokens, fonts: FontFamilyTokens) -> Self {
        Self {
            mode,
            colors,
            fonts,
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    pub fn fonts(&self) -> &FontFamilyTokens {
        &self.fonts
    }
}

/// Light/dark theme pair
///
/// Built once at startup; the variant for the active mode is swapped in
/// wholesale on mode switches.
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    light: Theme,
    dark: Theme,
}

impl ThemeBundle {
    /// Built-in palettes with optional per-mode overrides and font config
    pub fn new(overrides: ColorOverrides, fonts: FontFamilyTokens) -> Self {
        let mut light = palettes::light();
        for (token, color) in overrides.for_mode(ColorMode::Light) {
            light.set(*token, *color);
        }

        let mut dark = palettes::dark();
        for (token, color) in overrides.for_mode(ColorMode::Dark) {
            dark.set(*token, *color);
        }

        Self {
            light: Theme::new(ColorMode::Light, light, fonts.clone()),
            dark: Theme::new(ColorMode::Dark, dark, fonts),
        }
    }

    pub fn for_mode(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        Self::new(ColorOverrides::default(), FontFamilyTokens::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ColorMode::Light.toggle(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggle(), ColorMode::Light);
    }

    #[test]
    fn test_bundle_applies_overrides_per_mode() {
        let mut overrides = ColorOverrides::default();
        overrides
            .light
            .insert(ColorToken::Primary, Color::from_hex(0xFF5500));

        let bundle = ThemeBundle::new(overrides, FontFamilyTokens::default());
        assert_eq!(
            bundle
                .for_mode(ColorMode::Light)
                .colors()
                .get(ColorToken::Primary),
            Color::from_hex(0xFF5500)
        );
        // Dark variant untouched
        assert_eq!(
            bundle
                .for_mode(ColorMode::Dark)
                .colors()
                .get(ColorToken::Primary),
            palettes::keys::PRIMARY
        );
    }
}
