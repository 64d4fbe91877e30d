//! Text leaf

use alpha_style::text::expand_typography;
use alpha_style::{
    resolve, AdaptiveSize, ColorRef, Component, ResolvedStyle, ResolvedTextStyle, StyleIntent,
    TextAlign, TextDecoration, TextTransform, TypographyStyle, UiContext,
};
use alpha_theme::FontWeight;

use crate::leaf::impl_intent_builders;

/// Text prop record
///
/// `color` means text color here and defaults to the `text` token; use
/// `bg` for the background.
#[derive(Clone, Debug, Default)]
pub struct TextProps {
    content: String,
    props: StyleIntent,
    typography: TypographyStyle,
    number_of_lines: Option<u32>,
    selectable: bool,
}

impl_intent_builders!(TextProps);

impl TextProps {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text color (token name or literal)
    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.typography.color = Some(color.into());
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.typography.size = Some(size);
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.typography.weight = Some(weight);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.typography.font_family = Some(family.into());
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.typography.align = Some(align);
        self
    }

    pub fn line_height(mut self, value: f32) -> Self {
        self.typography.line_height = Some(value);
        self
    }

    pub fn letter_spacing(mut self, value: f32) -> Self {
        self.typography.letter_spacing = Some(value);
        self
    }

    pub fn tt(mut self, transform: TextTransform) -> Self {
        self.typography.transform = Some(transform);
        self
    }

    pub fn td(mut self, decoration: TextDecoration) -> Self {
        self.typography.decoration = Some(decoration);
        self
    }

    pub fn italic(mut self) -> Self {
        self.typography.italic = Some(true);
        self
    }

    /// Scale the size against the viewport with default parameters
    pub fn adaptive(mut self) -> Self {
        self.typography.adaptive = Some(AdaptiveSize::default());
        self
    }

    /// Scale the size against the viewport with explicit parameters
    pub fn adaptive_with(mut self, params: AdaptiveSize) -> Self {
        self.typography.adaptive = Some(params);
        self
    }

    pub fn number_of_lines(mut self, lines: u32) -> Self {
        self.number_of_lines = Some(lines);
        self
    }

    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Resolve layout and text styles for this render pass
    pub fn resolve(&self, ctx: &UiContext) -> (ResolvedStyle, ResolvedTextStyle) {
        let layout = resolve(ctx, Component::Text, &self.props);

        let mut typography = self.typography.clone();
        if typography.color.is_none() {
            typography.color = Some("text".into());
        }

        let theme = ctx.theme().theme();
        let text = expand_typography(
            &typography,
            theme.colors(),
            theme.fonts(),
            &ctx.viewport(),
        );
        (layout, text)
    }
}

/// Create a text leaf
pub fn text(content: impl Into<String>) -> TextProps {
    TextProps::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpha_core::Viewport;
    use alpha_style::UiConfig;
    use alpha_theme::ColorToken;

    #[test]
    fn test_text_color_defaults_to_text_token() {
        let ctx = UiContext::new(UiConfig::default());
        let (_, style) = text("hello").resolve(&ctx);
        assert_eq!(style.color, Some(ctx.theme().color(ColorToken::Text)));
    }

    #[test]
    fn test_weight_maps_to_family() {
        let ctx = UiContext::new(UiConfig::default());
        let (_, style) = text("hello").weight(FontWeight::SemiBold).resolve(&ctx);
        assert_eq!(style.font_family.as_deref(), Some("NunitoSans-SemiBold"));
    }

    #[test]
    fn test_adaptive_sizing_follows_viewport() {
        let ctx = UiContext::new(UiConfig::default());
        ctx.set_viewport(Viewport::new(750.0, 1334.0));

        let (_, style) = text("hello").text_size(16.0).adaptive().resolve(&ctx);
        assert_eq!(style.font_size, Some(32.0));
    }

    #[test]
    fn test_spacing_goes_to_layout_style() {
        let ctx = UiContext::new(UiConfig::default());
        let (layout, _) = text("hello").mt(10.0).ph(4.0).resolve(&ctx);
        assert_eq!(layout.margin_top, Some(10.0));
        assert_eq!(layout.padding_left, Some(4.0));
    }
}
