//! Color-valued props
//!
//! A color prop is either a semantic token, a concrete color, or a raw
//! string resolved at expansion time ("look up in palette, else treat as a
//! literal value"). Resolution never fails; a string that is neither token
//! nor literal resolves to nothing and the field is omitted.

use alpha_core::Color;
use alpha_theme::{ColorToken, ColorTokens};

/// A color-valued prop before resolution
#[derive(Clone, Debug, PartialEq)]
pub enum ColorRef {
    /// Semantic palette token
    Token(ColorToken),
    /// Concrete color value
    Literal(Color),
    /// Raw string, resolved against the active palette at expansion time
    Named(String),
}

impl ColorRef {
    /// Resolve against a palette
    pub fn resolve(&self, colors: &ColorTokens) -> Option<Color> {
        match self {
            ColorRef::Token(token) => Some(colors.get(*token)),
            ColorRef::Literal(color) => Some(*color),
            ColorRef::Named(name) => colors.resolve(name),
        }
    }
}

impl From<ColorToken> for ColorRef {
    fn from(token: ColorToken) -> Self {
        ColorRef::Token(token)
    }
}

impl From<Color> for ColorRef {
    fn from(color: Color) -> Self {
        ColorRef::Literal(color)
    }
}

impl From<&str> for ColorRef {
    fn from(name: &str) -> Self {
        ColorRef::Named(name.to_string())
    }
}

impl From<String> for ColorRef {
    fn from(name: String) -> Self {
        ColorRef::Named(name)
    }
}
