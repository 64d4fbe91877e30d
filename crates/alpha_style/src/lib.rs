//! Alpha UI Style Pipeline
//!
//! The shared prop-resolution pipeline every renderable leaf goes through:
//!
//! ```text
//! UiContext ──▶ resolve(component, intent) ──▶ expanders ──▶ ResolvedStyle
//! ```
//!
//! Callers describe styling with a [`StyleIntent`]: a composition of small
//! optional sub-groups (spacing, flex, dimensions, border, position,
//! visual). [`resolve`] merges four precedence layers — component defaults
//! from the context, the caller's intent, shorthand expansion, and the
//! explicit `style` override — into one flat [`ResolvedStyle`] the host
//! renderer consumes.
//!
//! Resolution is pure and synchronous; it never fails. Unknown color
//! strings fall through to literal interpretation and unusable values are
//! silently omitted.
//!
//! # Example
//!
//! ```rust
//! use alpha_style::{resolve, Component, FlexIntent, StyleIntent, UiConfig, UiContext};
//!
//! let ctx = UiContext::new(UiConfig::default());
//! let intent = StyleIntent::new()
//!     .color("primary")
//!     .fd(FlexIntent::FlexItem)
//!     .ph(16.0)
//!     .pt(8.0)
//!     .br(10.0);
//!
//! let style = resolve(&ctx, Component::View, &intent);
//! assert_eq!(style.padding_left, Some(16.0));
//! assert_eq!(style.padding_top, Some(8.0));
//! ```

pub mod color_ref;
pub mod context;
pub mod flex;
pub mod intent;
pub mod position;
pub mod resolved;
pub mod resolver;
pub mod spacing;
pub mod text;

pub use color_ref::ColorRef;
pub use context::{ComponentDefaults, UiConfig, UiContext};
pub use flex::FlexIntent;
pub use intent::{
    BorderLineStyle, BorderStyle, DimensionStyle, FlexStyle, PositionStyle, SpacingStyle,
    StyleIntent, VisualStyle,
};
pub use resolved::{ResolvedStyle, ResolvedTextStyle};
pub use resolver::{resolve, Component};
pub use text::{
    adaptive_font_size, AdaptiveSize, TextAlign, TextDecoration, TextTransform, TypographyStyle,
};
