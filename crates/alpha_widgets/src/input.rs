//! Text input leaf

use alpha_style::{resolve, ColorRef, Component, ResolvedStyle, StyleIntent, UiContext};

use crate::leaf::impl_intent_builders;
use crate::tokens::INPUT_TOKENS;

/// Text input prop record
#[derive(Clone, Debug, Default)]
pub struct InputProps {
    props: StyleIntent,
    placeholder: Option<String>,
    secure: bool,
    multiline: bool,
    editable: bool,
    max_length: Option<u32>,
    error: bool,
}

impl_intent_builders!(InputProps);

impl InputProps {
    pub fn new() -> Self {
        Self {
            editable: true,
            ..Default::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Mask typed characters
    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Render in the errored state (danger border)
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Background color (token name or literal)
    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.props = self.props.color(color);
        self
    }

    /// Resolve the field chrome for this render pass
    pub fn resolve(&self, ctx: &UiContext) -> ResolvedStyle {
        let tokens = INPUT_TOKENS;
        let mut chrome = StyleIntent::new()
            .br(tokens.control.radius)
            .bw(tokens.control.border_width)
            .bc(if self.error { "danger" } else { "border" })
            .ph(tokens.text_field.padding_horizontal)
            .pv(tokens.text_field.padding_vertical);
        if !self.editable {
            chrome = chrome.opacity(tokens.control.disabled_opacity);
        }

        resolve(ctx, Component::Input, &chrome.merge(&self.props))
    }
}

/// Create a text input leaf
pub fn input() -> InputProps {
    InputProps::new()
}
