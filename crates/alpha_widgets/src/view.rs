//! Box leaf

use alpha_style::{resolve, ColorRef, Component, ResolvedStyle, StyleIntent, UiContext};

use crate::leaf::impl_intent_builders;

/// Generic box prop record
#[derive(Clone, Debug, Default)]
pub struct ViewProps {
    props: StyleIntent,
}

impl_intent_builders!(ViewProps);

impl ViewProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Background color (token name or literal)
    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.props = self.props.color(color);
        self
    }

    pub fn wrap(mut self) -> Self {
        self.props = self.props.wrap();
        self
    }

    pub fn overflow(mut self, overflow: taffy::style::Overflow) -> Self {
        self.props = self.props.overflow(overflow);
        self
    }

    pub fn intent(&self) -> &StyleIntent {
        &self.props
    }

    /// Resolve into the concrete style for this render pass
    pub fn resolve(&self, ctx: &UiContext) -> ResolvedStyle {
        resolve(ctx, Component::View, &self.props)
    }
}

/// Create a box leaf
pub fn view() -> ViewProps {
    ViewProps::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpha_style::{FlexIntent, UiConfig};
    use alpha_theme::ColorToken;

    #[test]
    fn test_view_resolves_shorthands() {
        let ctx = UiContext::new(UiConfig::default());
        let style = view()
            .color("primary")
            .fd(FlexIntent::FlexBetween)
            .ph(16.0)
            .size(32.0)
            .br(16.0)
            .resolve(&ctx);

        assert_eq!(
            style.background_color,
            Some(ctx.theme().color(ColorToken::Primary))
        );
        assert_eq!(style.width, Some(32.0));
        assert_eq!(style.padding_left, Some(16.0));
        assert_eq!(style.border_radius, Some(16.0));
        assert_eq!(
            style.justify_content,
            Some(taffy::style::JustifyContent::SpaceBetween)
        );
    }

    #[test]
    fn test_view_picks_up_component_defaults() {
        let ctx = UiContext::new(UiConfig::default());
        ctx.configure_component_defaults([(Component::View, StyleIntent::new().p(4.0))]);

        let style = view().resolve(&ctx);
        assert_eq!(style.padding_top, Some(4.0));
    }
}
