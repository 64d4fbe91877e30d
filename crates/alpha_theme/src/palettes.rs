//! Built-in color palettes
//!
//! The shared brand/neutral keys plus the light and dark scheme variants.
//! Channel values are carried exactly from the reference palette.

use crate::tokens::ColorTokens;
use alpha_core::Color;

/// Shared palette keys (identical across schemes unless overridden)
pub mod keys {
    use alpha_core::Color;

    pub const PRIMARY: Color = Color::rgb(0.0, 149.0 / 255.0, 224.0 / 255.0);
    pub const PRIMARY_LIGHT: Color =
        Color::rgba(87.0 / 255.0, 164.0 / 255.0, 1.0, 26.0 / 255.0);
    pub const PRIMARY_SHADE: Color = Color::rgb(178.0 / 255.0, 221.0 / 255.0, 248.0 / 255.0);
    pub const SECONDARY: Color = Color::rgb(16.0 / 255.0, 36.0 / 255.0, 65.0 / 255.0);
    pub const TERTIARY: Color = Color::rgb(190.0 / 255.0, 190.0 / 255.0, 190.0 / 255.0);

    pub const DANGER: Color = Color::rgb(254.0 / 255.0, 0.0, 0.0);
    pub const DANGER_LIGHT: Color = Color::rgba(1.0, 0.0, 51.0 / 255.0, 30.0 / 255.0);
    pub const SUCCESS: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const WARNING: Color = Color::rgb(250.0 / 255.0, 164.0 / 255.0, 23.0 / 255.0);
    pub const WARNING_LIGHT: Color =
        Color::rgba(250.0 / 255.0, 164.0 / 255.0, 23.0 / 255.0, 0.08);

    pub const MEDIUM: Color = Color::rgb(146.0 / 255.0, 148.0 / 255.0, 156.0 / 255.0);
    pub const MEDIUM_SHADE: Color = Color::rgb(230.0 / 255.0, 236.0 / 255.0, 240.0 / 255.0);
    pub const MEDIUM_TINT: Color = Color::rgb(157.0 / 255.0, 159.0 / 255.0, 166.0 / 255.0);
    pub const DARK: Color = Color::rgb(36.0 / 255.0, 37.0 / 255.0, 38.0 / 255.0);
    pub const DARK_SHADE: Color = Color::rgb(58.0 / 255.0, 59.0 / 255.0, 60.0 / 255.0);
    pub const DARK_TINT: Color = Color::rgb(25.0 / 255.0, 26.0 / 255.0, 27.0 / 255.0);
    pub const LIGHT: Color = Color::WHITE;
    pub const LIGHT_SHADE: Color = Color::rgb(249.0 / 255.0, 249.0 / 255.0, 253.0 / 255.0);
    pub const LIGHT_TINT: Color = Color::rgb(245.0 / 255.0, 246.0 / 255.0, 249.0 / 255.0);

    pub const MODAL: Color = Color::rgba(0.0, 0.0, 0.0, 0.5);
    pub const OVERLAY: Color = Color::rgba(0.0, 0.0, 0.0, 0.21);
    pub const TRANSPARENT: Color =
        Color::rgba(245.0 / 255.0, 246.0 / 255.0, 249.0 / 255.0, 0.0);

    pub const PLACEHOLDER: Color = MEDIUM;
    pub const DIM: Color = Color::rgb(21.0 / 255.0, 32.0 / 255.0, 43.0 / 255.0);
    pub const ORANGE: Color = Color::rgb(247.0 / 255.0, 213.0 / 255.0, 173.0 / 255.0);
    pub const WOOD: Color = Color::rgb(246.0 / 255.0, 239.0 / 255.0, 214.0 / 255.0);
    pub const BLACK: Color = Color::BLACK;
    pub const COVER: Color = Color::rgb(67.0 / 255.0, 76.0 / 255.0, 109.0 / 255.0);
}

/// Light-scheme palette
pub fn light() -> ColorTokens {
    ColorTokens {
        primary: keys::PRIMARY,
        primary_light: keys::PRIMARY_LIGHT,
        primary_shade: keys::PRIMARY_SHADE,
        secondary: keys::SECONDARY,
        tertiary: keys::TERTIARY,
        danger: keys::DANGER,
        danger_light: keys::DANGER_LIGHT,
        success: keys::SUCCESS,
        warning: keys::WARNING,
        warning_light: keys::WARNING_LIGHT,
        medium: keys::MEDIUM,
        medium_shade: keys::MEDIUM_SHADE,
        medium_tint: keys::MEDIUM_TINT,
        dark: keys::DARK,
        dark_shade: keys::DARK_SHADE,
        dark_tint: keys::DARK_TINT,
        light: keys::LIGHT,
        light_shade: keys::LIGHT_SHADE,
        light_tint: keys::LIGHT_TINT,
        modal: keys::MODAL,
        overlay: keys::OVERLAY,
        transparent: keys::TRANSPARENT,
        placeholder: keys::PLACEHOLDER,
        dim: keys::DIM,
        orange: keys::ORANGE,
        wood: keys::WOOD,
        black: keys::BLACK,
        cover: keys::COVER,
        text: keys::BLACK,
        text2: Color::rgb(99.0 / 255.0, 106.0 / 255.0, 100.0 / 255.0),
        background: keys::LIGHT,
        border: Color::rgba(153.0 / 255.0, 153.0 / 255.0, 153.0 / 255.0, 0.24),
        shade: Color::rgba(113.0 / 255.0, 159.0 / 255.0, 228.0 / 255.0, 0.12),
        touchable: keys::MEDIUM_SHADE,
        gap: keys::LIGHT_SHADE,
        tint: keys::LIGHT_TINT,
        check: keys::PRIMARY,
        navigation: keys::LIGHT_SHADE,
        progress: keys::MEDIUM_SHADE,
        chat: keys::PRIMARY,
        spotlight: Color::rgb(241.0 / 255.0, 246.0 / 255.0, 250.0 / 255.0),
    }
}

/// Dark-scheme palette
pub fn dark() -> ColorTokens {
    ColorTokens {
        // Brand light washes read as surfaces in dark mode
        primary_light: keys::DARK_SHADE,
        medium_shade: keys::DARK_SHADE,
        text: Color::rgb(244.0 / 255.0, 245.0 / 255.0, 248.0 / 255.0),
        text2: Color::rgb(145.0 / 255.0, 148.0 / 255.0, 155.0 / 255.0),
        background: keys::DARK,
        border: Color::rgb(56.0 / 255.0, 68.0 / 255.0, 77.0 / 255.0),
        shade: keys::DARK_SHADE,
        touchable: keys::DARK_TINT,
        gap: keys::DARK_TINT,
        tint: keys::DARK_TINT,
        check: keys::LIGHT,
        navigation: keys::DARK_TINT,
        progress: keys::DARK_SHADE,
        chat: Color::WHITE,
        spotlight: Color::rgb(24.0 / 255.0, 24.0 / 255.0, 25.0 / 255.0),
        ..light()
    }
}
