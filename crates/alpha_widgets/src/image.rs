//! Image leaf
//!
//! Image loading itself belongs to the host; this record only carries the
//! source reference and fit mode alongside the box style.

use alpha_style::{resolve, Component, ResolvedStyle, StyleIntent, UiContext};

use crate::leaf::impl_intent_builders;

/// How the image fills its box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeMode {
    #[default]
    Cover,
    Contain,
    Stretch,
    Center,
}

/// Image prop record
#[derive(Clone, Debug, Default)]
pub struct ImageProps {
    source: String,
    resize_mode: ResizeMode,
    props: StyleIntent,
}

impl_intent_builders!(ImageProps);

impl ImageProps {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn resize_mode(mut self, mode: ResizeMode) -> Self {
        self.resize_mode = mode;
        self
    }

    pub fn mode(&self) -> ResizeMode {
        self.resize_mode
    }

    pub fn resolve(&self, ctx: &UiContext) -> ResolvedStyle {
        resolve(ctx, Component::Image, &self.props)
    }
}

/// Create an image leaf
pub fn image(source: impl Into<String>) -> ImageProps {
    ImageProps::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpha_style::UiConfig;

    #[test]
    fn test_image_carries_source_and_style() {
        let ctx = UiContext::new(UiConfig::default());
        let img = image("https://example.com/a.png")
            .resize_mode(ResizeMode::Contain)
            .size(64.0)
            .br(8.0);

        assert_eq!(img.source(), "https://example.com/a.png");
        assert_eq!(img.mode(), ResizeMode::Contain);

        let style = img.resolve(&ctx);
        assert_eq!(style.width, Some(64.0));
        assert_eq!(style.border_radius, Some(8.0));
    }
}
