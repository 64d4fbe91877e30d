//! Typography props and the adaptive font-size expander

use alpha_core::Viewport;
use alpha_theme::{ColorTokens, FontFamilyTokens, FontWeight};

use crate::color_ref::ColorRef;
use crate::resolved::ResolvedTextStyle;

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Auto,
    Left,
    Right,
    Center,
    Justify,
}

/// Text case transform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextTransform {
    #[default]
    None,
    Capitalize,
    Uppercase,
    Lowercase,
}

/// Text decoration lines
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
    UnderlineLineThrough,
}

/// Adaptive font sizing parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveSize {
    /// Viewport width the base size was designed against
    pub reference_width: f32,
    pub min_size: f32,
    pub max_size: f32,
}

impl Default for AdaptiveSize {
    fn default() -> Self {
        Self {
            reference_width: 375.0,
            min_size: 12.0,
            max_size: 32.0,
        }
    }
}

/// Narrow-device multiplier
const SMALL_DEVICE_FACTOR: f32 = 0.95;
/// Wide-device multiplier
const BIG_DEVICE_FACTOR: f32 = 1.05;

/// Scale a base font size to the current viewport.
///
/// Scales by `width / reference_width`, rounds to the nearest device pixel,
/// applies the device-class multiplier, then clamps to `[min, max]`.
pub fn adaptive_font_size(size: f32, viewport: &Viewport, params: &AdaptiveSize) -> f32 {
    if params.reference_width <= 0.0 {
        return size;
    }

    let scale = viewport.width / params.reference_width;
    let mut adjusted = viewport.round_to_pixel(size * scale);

    if viewport.is_small_device() {
        adjusted *= SMALL_DEVICE_FACTOR;
    } else if viewport.is_big_device() {
        adjusted *= BIG_DEVICE_FACTOR;
    }

    adjusted.clamp(params.min_size, params.max_size)
}

/// Typography shorthand props for text leaves
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypographyStyle {
    pub color: Option<ColorRef>,
    pub size: Option<f32>,
    pub weight: Option<FontWeight>,
    /// Explicit family, bypassing the weight mapping
    pub font_family: Option<String>,
    pub align: Option<TextAlign>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub transform: Option<TextTransform>,
    pub decoration: Option<TextDecoration>,
    pub italic: Option<bool>,
    /// Scale `size` against the viewport when set
    pub adaptive: Option<AdaptiveSize>,
}

impl TypographyStyle {
    pub fn merge(&self, other: &TypographyStyle) -> TypographyStyle {
        TypographyStyle {
            color: other.color.clone().or_else(|| self.color.clone()),
            size: other.size.or(self.size),
            weight: other.weight.or(self.weight),
            font_family: other
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            align: other.align.or(self.align),
            line_height: other.line_height.or(self.line_height),
            letter_spacing: other.letter_spacing.or(self.letter_spacing),
            transform: other.transform.or(self.transform),
            decoration: other.decoration.or(self.decoration),
            italic: other.italic.or(self.italic),
            adaptive: other.adaptive.or(self.adaptive),
        }
    }
}

/// Expand typography props into a resolved text style
pub fn expand_typography(
    typography: &TypographyStyle,
    colors: &ColorTokens,
    fonts: &FontFamilyTokens,
    viewport: &Viewport,
) -> ResolvedTextStyle {
    let weight = typography.weight.unwrap_or_default();
    let font_family = typography
        .font_family
        .clone()
        .unwrap_or_else(|| fonts.family(weight));

    let font_size = typography.size.map(|size| match &typography.adaptive {
        Some(params) => adaptive_font_size(size, viewport, params),
        None => size,
    });

    ResolvedTextStyle {
        font_family: Some(font_family),
        font_size,
        color: typography.color.as_ref().and_then(|c| c.resolve(colors)),
        text_align: typography.align,
        line_height: typography.line_height,
        letter_spacing: typography.letter_spacing,
        text_transform: typography.transform,
        text_decoration: typography.decoration,
        italic: typography.italic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpha_theme::palettes;

    #[test]
    fn test_adaptive_scale_up_clamps_to_max() {
        let viewport = Viewport::new(750.0, 1334.0);
        let params = AdaptiveSize::default();
        // raw scale 2.0 -> 32, big-device x1.05 -> 33.6, clamped to 32
        assert_eq!(adaptive_font_size(16.0, &viewport, &params), 32.0);
    }

    #[test]
    fn test_adaptive_scale_down_floors_at_min() {
        let viewport = Viewport::new(187.5, 400.0);
        let params = AdaptiveSize::default();
        // raw scale 0.5 -> 8, small-device x0.95 -> 7.6, floored at 12
        assert_eq!(adaptive_font_size(16.0, &viewport, &params), 12.0);
    }

    #[test]
    fn test_adaptive_mid_range_device_untouched() {
        let viewport = Viewport::new(375.0, 812.0);
        let params = AdaptiveSize::default();
        assert_eq!(adaptive_font_size(16.0, &viewport, &params), 16.0);
    }

    #[test]
    fn test_adaptive_rounds_to_device_pixels() {
        let viewport = Viewport::new(400.0, 800.0).with_scale_factor(2.0);
        let params = AdaptiveSize {
            max_size: 100.0,
            ..Default::default()
        };
        // 16 * 400/375 = 17.0666 -> 17.0 at 2x density
        assert_eq!(adaptive_font_size(16.0, &viewport, &params), 17.0);
    }

    #[test]
    fn test_expand_uses_weight_mapping() {
        let colors = palettes::light();
        let fonts = FontFamilyTokens::default();
        let viewport = Viewport::default();

        let style = expand_typography(
            &TypographyStyle {
                weight: Some(FontWeight::Bold),
                size: Some(14.0),
                ..Default::default()
            },
            &colors,
            &fonts,
            &viewport,
        );
        assert_eq!(style.font_family.as_deref(), Some("NunitoSans-Bold"));
        assert_eq!(style.font_size, Some(14.0));
    }

    #[test]
    fn test_explicit_family_bypasses_mapping() {
        let colors = palettes::light();
        let fonts = FontFamilyTokens::from_base("Inter");
        let viewport = Viewport::default();

        let style = expand_typography(
            &TypographyStyle {
                font_family: Some("SpaceMono-Regular".into()),
                weight: Some(FontWeight::Bold),
                ..Default::default()
            },
            &colors,
            &fonts,
            &viewport,
        );
        assert_eq!(style.font_family.as_deref(), Some("SpaceMono-Regular"));
    }

    #[test]
    fn test_color_token_resolution() {
        let colors = palettes::light();
        let fonts = FontFamilyTokens::default();
        let viewport = Viewport::default();

        let style = expand_typography(
            &TypographyStyle {
                color: Some("danger".into()),
                ..Default::default()
            },
            &colors,
            &fonts,
            &viewport,
        );
        assert_eq!(
            style.color,
            Some(colors.get(alpha_theme::ColorToken::Danger))
        );
    }
}
