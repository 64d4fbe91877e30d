//! Password field
//!
//! A masked text field with an immediate visibility toggle — a plain
//! boolean flip, no animation — plus focus tracking that drives the border
//! color.

use alpha_core::Color;
use alpha_style::{resolve, Component, ResolvedStyle, StyleIntent, UiContext};
use alpha_theme::ColorToken;

use crate::tokens::INPUT_TOKENS;

/// Password field instance
pub struct PasswordField {
    masked: bool,
    focused: bool,
    error: bool,
    placeholder: Option<String>,
}

impl PasswordField {
    pub fn new() -> Self {
        Self {
            masked: true,
            focused: false,
            error: false,
            placeholder: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    // ========== State ==========

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Flip visibility; takes effect immediately
    pub fn toggle_visibility(&mut self) {
        self.masked = !self.masked;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    // ========== Styling ==========

    /// Border color for the current state: error beats focus beats rest
    pub fn border_color(&self, ctx: &UiContext) -> Color {
        let token = if self.error {
            ColorToken::Danger
        } else if self.focused {
            ColorToken::Primary
        } else {
            ColorToken::Border
        };
        ctx.theme().color(token)
    }

    /// Resolve the field chrome
    pub fn resolve(&self, ctx: &UiContext) -> ResolvedStyle {
        let tokens = INPUT_TOKENS;
        let chrome = StyleIntent::new()
            .br(tokens.control.radius)
            .bw(tokens.control.border_width)
            .bc(self.border_color(ctx))
            .pl(tokens.text_field.padding_horizontal)
            .fd(alpha_style::FlexIntent::FlexCenter);
        resolve(ctx, Component::Password, &chrome)
    }
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new()
    }
}
