//! Semantic color tokens

use alpha_core::Color;

/// Semantic color token keys
///
/// String-typed props use the lower-camel names (`"primary"`,
/// `"primaryLight"`, `"text2"`, ...) via [`ColorToken::from_name`].
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryLight,
    PrimaryShade,
    Secondary,
    Tertiary,

    // Semantic colors
    Danger,
    DangerLight,
    Success,
    Warning,
    WarningLight,

    // Neutral ramps
    Medium,
    MediumShade,
    MediumTint,
    Dark,
    DarkShade,
    DarkTint,
    Light,
    LightShade,
    LightTint,

    // Scrims
    Modal,
    Overlay,
    Transparent,

    // Fixed accents
    Placeholder,
    Dim,
    Orange,
    Wood,
    Black,
    Cover,

    // Scheme-dependent surfaces
    Text,
    Text2,
    Background,
    Border,
    Shade,
    Touchable,
    Gap,
    Tint,
    Check,
    Navigation,
    Progress,
    Chat,
    Spotlight,
}

impl ColorToken {
    /// All tokens, in palette order
    pub const ALL: [ColorToken; 41] = [
        ColorToken::Primary,
        ColorToken::PrimaryLight,
        ColorToken::PrimaryShade,
        ColorToken::Secondary,
        ColorToken::Tertiary,
        ColorToken::Danger,
        ColorToken::DangerLight,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::WarningLight,
        ColorToken::Medium,
        ColorToken::MediumShade,
        ColorToken::MediumTint,
        ColorToken::Dark,
        ColorToken::DarkShade,
        ColorToken::DarkTint,
        ColorToken::Light,
        ColorToken::LightShade,
        ColorToken::LightTint,
        ColorToken::Modal,
        ColorToken::Overlay,
        ColorToken::Transparent,
        ColorToken::Placeholder,
        ColorToken::Dim,
        ColorToken::Orange,
        ColorToken::Wood,
        ColorToken::Black,
        ColorToken::Cover,
        ColorToken::Text,
        ColorToken::Text2,
        ColorToken::Background,
        ColorToken::Border,
        ColorToken::Shade,
        ColorToken::Touchable,
        ColorToken::Gap,
        ColorToken::Tint,
        ColorToken::Check,
        ColorToken::Navigation,
        ColorToken::Progress,
        ColorToken::Chat,
        ColorToken::Spotlight,
    ];

    /// The string key used by string-typed color props
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryLight => "primaryLight",
            ColorToken::PrimaryShade => "primaryShade",
            ColorToken::Secondary => "secondary",
            ColorToken::Tertiary => "tertiary",
            ColorToken::Danger => "danger",
            ColorToken::DangerLight => "dangerLight",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::WarningLight => "warningLight",
            ColorToken::Medium => "medium",
            ColorToken::MediumShade => "mediumShade",
            ColorToken::MediumTint => "mediumTint",
            ColorToken::Dark => "dark",
            ColorToken::DarkShade => "darkShade",
            ColorToken::DarkTint => "darkTint",
            ColorToken::Light => "light",
            ColorToken::LightShade => "lightShade",
            ColorToken::LightTint => "lightTint",
            ColorToken::Modal => "modal",
            ColorToken::Overlay => "overlay",
            ColorToken::Transparent => "transparent",
            ColorToken::Placeholder => "placeholder",
            ColorToken::Dim => "dim",
            ColorToken::Orange => "orange",
            ColorToken::Wood => "wood",
            ColorToken::Black => "black",
            ColorToken::Cover => "cover",
            ColorToken::Text => "text",
            ColorToken::Text2 => "text2",
            ColorToken::Background => "background",
            ColorToken::Border => "border",
            ColorToken::Shade => "shade",
            ColorToken::Touchable => "touchable",
            ColorToken::Gap => "gap",
            ColorToken::Tint => "tint",
            ColorToken::Check => "check",
            ColorToken::Navigation => "navigation",
            ColorToken::Progress => "progress",
            ColorToken::Chat => "chat",
            ColorToken::Spotlight => "spotlight",
        }
    }

    /// Look up a token by its string key
    pub fn from_name(name: &str) -> Option<ColorToken> {
        ColorToken::ALL.iter().copied().find(|t| t.name() == name)
    }
}

/// Complete set of semantic color values for one color mode
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_light: Color,
    pub primary_shade: Color,
    pub secondary: Color,
    pub tertiary: Color,

    pub danger: Color,
    pub danger_light: Color,
    pub success: Color,
    pub warning: Color,
    pub warning_light: Color,

    pub medium: Color,
    pub medium_shade: Color,
    pub medium_tint: Color,
    pub dark: Color,
    pub dark_shade: Color,
    pub dark_tint: Color,
    pub light: Color,
    pub light_shade: Color,
    pub light_tint: Color,

    pub modal: Color,
    pub overlay: Color,
    pub transparent: Color,

    pub placeholder: Color,
    pub dim: Color,
    pub orange: Color,
    pub wood: Color,
    pub black: Color,
    pub cover: Color,

    pub text: Color,
    pub text2: Color,
    pub background: Color,
    pub border: Color,
    pub shade: Color,
    pub touchable: Color,
    pub gap: Color,
    pub tint: Color,
    pub check: Color,
    pub navigation: Color,
    pub progress: Color,
    pub chat: Color,
    pub spotlight: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryLight => self.primary_light,
            ColorToken::PrimaryShade => self.primary_shade,
            ColorToken::Secondary => self.secondary,
            ColorToken::Tertiary => self.tertiary,
            ColorToken::Danger => self.danger,
            ColorToken::DangerLight => self.danger_light,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::WarningLight => self.warning_light,
            ColorToken::Medium => self.medium,
            ColorToken::MediumShade => self.medium_shade,
            ColorToken::MediumTint => self.medium_tint,
            ColorToken::Dark => self.dark,
            ColorToken::DarkShade => self.dark_shade,
            ColorToken::DarkTint => self.dark_tint,
            ColorToken::Light => self.light,
            ColorToken::LightShade => self.light_shade,
            ColorToken::LightTint => self.light_tint,
            ColorToken::Modal => self.modal,
            ColorToken::Overlay => self.overlay,
            ColorToken::Transparent => self.transparent,
            ColorToken::Placeholder => self.placeholder,
            ColorToken::Dim => self.dim,
            ColorToken::Orange => self.orange,
            ColorToken::Wood => self.wood,
            ColorToken::Black => self.black,
            ColorToken::Cover => self.cover,
            ColorToken::Text => self.text,
            ColorToken::Text2 => self.text2,
            ColorToken::Background => self.background,
            ColorToken::Border => self.border,
            ColorToken::Shade => self.shade,
            ColorToken::Touchable => self.touchable,
            ColorToken::Gap => self.gap,
            ColorToken::Tint => self.tint,
            ColorToken::Check => self.check,
            ColorToken::Navigation => self.navigation,
            ColorToken::Progress => self.progress,
            ColorToken::Chat => self.chat,
            ColorToken::Spotlight => self.spotlight,
        }
    }

    /// Replace the value for one token
    pub fn set(&mut self, token: ColorToken, color: Color) {
        match token {
            ColorToken::Primary => self.primary = color,
            ColorToken::PrimaryLight => self.primary_light = color,
            ColorToken::PrimaryShade => self.primary_shade = color,
            ColorToken::Secondary => self.secondary = color,
            ColorToken::Tertiary => self.tertiary = color,
            ColorToken::Danger => self.danger = color,
            ColorToken::DangerLight => self.danger_light = color,
            ColorToken::Success => self.success = color,
            ColorToken::Warning => self.warning = color,
            ColorToken::WarningLight => self.warning_light = color,
            ColorToken::Medium => self.medium = color,
            ColorToken::MediumShade => self.medium_shade = color,
            ColorToken::MediumTint => self.medium_tint = color,
            ColorToken::Dark => self.dark = color,
            ColorToken::DarkShade => self.dark_shade = color,
            ColorToken::DarkTint => self.dark_tint = color,
            ColorToken::Light => self.light = color,
            ColorToken::LightShade => self.light_shade = color,
            ColorToken::LightTint => self.light_tint = color,
            ColorToken::Modal => self.modal = color,
            ColorToken::Overlay => self.overlay = color,
            ColorToken::Transparent => self.transparent = color,
            ColorToken::Placeholder => self.placeholder = color,
            ColorToken::Dim => self.dim = color,
            ColorToken::Orange => self.orange = color,
            ColorToken::Wood => self.wood = color,
            ColorToken::Black => self.black = color,
            ColorToken::Cover => self.cover = color,
            ColorToken::Text => self.text = color,
            ColorToken::Text2 => self.text2 = color,
            ColorToken::Background => self.background = color,
            ColorToken::Border => self.border = color,
            ColorToken::Shade => self.shade = color,
            ColorToken::Touchable => self.touchable = color,
            ColorToken::Gap => self.gap = color,
            ColorToken::Tint => self.tint = color,
            ColorToken::Check => self.check = color,
            ColorToken::Navigation => self.navigation = color,
            ColorToken::Progress => self.progress = color,
            ColorToken::Chat => self.chat = color,
            ColorToken::Spotlight => self.spotlight = color,
        }
    }

    /// Resolve a color string against this palette.
    ///
    /// Token names take the palette value; anything else is parsed as a
    /// literal color. Strings that are neither resolve to `None` and the
    /// style field is omitted downstream. Never fails.
    pub fn resolve(&self, name: &str) -> Option<Color> {
        if let Some(token) = ColorToken::from_name(name) {
            return Some(self.get(token));
        }
        Color::parse(name).ok()
    }
}
