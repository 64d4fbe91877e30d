//! Font family tokens
//!
//! Maps semantic weights to concrete font family names. A `base` name
//! generates the whole weight ramp (`"Inter"` -> `"Inter-Bold"`); explicit
//! per-weight entries and a `custom` family override generation.

/// Semantic font weight
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
    SemiBold,
    Light,
    Medium,
    ExtraLight,
    Italic,
    ExtraBold,
    /// Resolves to the configured custom family
    Custom,
}

impl FontWeight {
    /// Suffix appended to a base family name
    pub fn suffix(&self) -> &'static str {
        match self {
            FontWeight::Regular => "Regular",
            FontWeight::Bold => "Bold",
            FontWeight::SemiBold => "SemiBold",
            FontWeight::Light => "Light",
            FontWeight::Medium => "Medium",
            FontWeight::ExtraLight => "ExtraLight",
            FontWeight::Italic => "Italic",
            FontWeight::ExtraBold => "ExtraBold",
            FontWeight::Custom => "Custom",
        }
    }
}

/// Default family ramp used when nothing is configured
const FALLBACK_BASE: &str = "NunitoSans";

/// Weight-to-family mapping
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontFamilyTokens {
    /// Base family name; generates `"{base}-{Weight}"` for every weight
    pub base: Option<String>,
    /// Family returned for [`FontWeight::Custom`]
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

impl FontFamilyTokens {
    /// Build a ramp from a base family name
    pub fn from_base(base: impl Into<String>) -> Self {
        Self {
            base: Some(base.into()),
            ..Default::default()
        }
    }

    /// Resolve the family name for a weight.
    ///
    /// Order: custom family for `Custom`, generated `base-Weight`, the
    /// explicit per-weight entry, then the built-in fallback ramp.
    pub fn family(&self, weight: FontWeight) -> String {
        if weight == FontWeight::Custom {
            if let Some(custom) = &self.custom {
                return custom.clone();
            }
        }

        if let Some(base) = &self.base {
            return format!("{base}-{}", weight.suffix());
        }

        let explicit = match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
            FontWeight::SemiBold => &self.semi_bold,
            FontWeight::Light => &self.light,
            FontWeight::Medium => &self.medium,
            FontWeight::ExtraLight => &self.extra_light,
            FontWeight::Italic => &self.italic,
            FontWeight::ExtraBold => &self.extra_bold,
            FontWeight::Custom => &self.custom,
        };

        explicit
            .clone()
            .unwrap_or_else(|| format!("{FALLBACK_BASE}-{}", weight.suffix()))
    }

    /// Overlay another config; set fields in `other` win
    pub fn merge(&self, other: &FontFamilyTokens) -> FontFamilyTokens {
        FontFamilyTokens {
            base: other.base.clone().or_else(|| self.base.clone()),
            custom: other.custom.clone().or_else(|| self.custom.clone()),
            regular: other.regular.clone().or_else(|| self.regular.clone()),
            bold: other.bold.clone().or_else(|| self.bold.clone()),
            semi_bold: other.semi_bold.clone().or_else(|| self.semi_bold.clone()),
            light: other.light.clone().or_else(|| self.light.clone()),
            medium: other.medium.clone().or_else(|| self.medium.clone()),
            extra_light: other
                .extra_light
                .clone()
                .or_else(|| self.extra_light.clone()),
            italic: other.italic.clone().or_else(|| self.italic.clone()),
            extra_bold: other.extra_bold.clone().or_else(|| self.extra_bold.clone()),
        }
    }
}
