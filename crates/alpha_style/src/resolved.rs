//! Resolved primitive styles
//!
//! The flat style records the host renderer consumes. Every field is
//! optional: unset fields are omitted, set fields override when overlaid.
//! Overlay order is the resolver's precedence order — later layers win.

use alpha_core::Color;
use alpha_theme::ElevationShadow;
use taffy::style::{AlignItems, FlexDirection, FlexWrap, JustifyContent, Overflow, Position};

use crate::intent::BorderLineStyle;
use crate::text::{TextAlign, TextDecoration, TextTransform};

/// Fully expanded box style
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyle {
    // Flex container
    pub flex: Option<f32>,
    pub flex_direction: Option<FlexDirection>,
    pub align_items: Option<AlignItems>,
    pub justify_content: Option<JustifyContent>,
    pub align_self: Option<AlignItems>,
    pub flex_wrap: Option<FlexWrap>,
    pub gap: Option<f32>,

    // Dimensions
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,

    // Padding
    pub padding_top: Option<f32>,
    pub padding_bottom: Option<f32>,
    pub padding_left: Option<f32>,
    pub padding_right: Option<f32>,

    // Margin
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub margin_left: Option<f32>,
    pub margin_right: Option<f32>,

    // Border
    pub border_radius: Option<f32>,
    pub border_top_left_radius: Option<f32>,
    pub border_top_right_radius: Option<f32>,
    pub border_bottom_left_radius: Option<f32>,
    pub border_bottom_right_radius: Option<f32>,
    pub border_width: Option<f32>,
    pub border_top_width: Option<f32>,
    pub border_bottom_width: Option<f32>,
    pub border_left_width: Option<f32>,
    pub border_right_width: Option<f32>,
    pub border_color: Option<Color>,
    pub border_top_color: Option<Color>,
    pub border_bottom_color: Option<Color>,
    pub border_left_color: Option<Color>,
    pub border_right_color: Option<Color>,
    pub border_style: Option<BorderLineStyle>,

    // Position
    pub position: Option<Position>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,

    // Visual
    pub background_color: Option<Color>,
    pub opacity: Option<f32>,
    pub overflow: Option<Overflow>,
    pub z_index: Option<i32>,
    pub shadow: Option<ElevationShadow>,
}

impl ResolvedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay another style on top of this one; set fields in `other` win
    pub fn overlay(&self, other: &ResolvedStyle) -> ResolvedStyle {
        ResolvedStyle {
            flex: other.flex.or(self.flex),
            flex_direction: other.flex_direction.or(self.flex_direction),
            align_items: other.align_items.or(self.align_items),
            justify_content: other.justify_content.or(self.justify_content),
            align_self: other.align_self.or(self.align_self),
            flex_wrap: other.flex_wrap.or(self.flex_wrap),
            gap: other.gap.or(self.gap),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            min_width: other.min_width.or(self.min_width),
            max_width: other.max_width.or(self.max_width),
            min_height: other.min_height.or(self.min_height),
            max_height: other.max_height.or(self.max_height),
            padding_top: other.padding_top.or(self.padding_top),
            padding_bottom: other.padding_bottom.or(self.padding_bottom),
            padding_left: other.padding_left.or(self.padding_left),
            padding_right: other.padding_right.or(self.padding_right),
            margin_top: other.margin_top.or(self.margin_top),
            margin_bottom: other.margin_bottom.or(self.margin_bottom),
            margin_left: other.margin_left.or(self.margin_left),
            margin_right: other.margin_right.or(self.margin_right),
            border_radius: other.border_radius.or(self.border_radius),
            border_top_left_radius: other.border_top_left_radius.or(self.border_top_left_radius),
            border_top_right_radius: other
                .border_top_right_radius
                .or(self.border_top_right_radius),
            border_bottom_left_radius: other
                .border_bottom_left_radius
                .or(self.border_bottom_left_radius),
            border_bottom_right_radius: other
                .border_bottom_right_radius
                .or(self.border_bottom_right_radius),
            border_width: other.border_width.or(self.border_width),
            border_top_width: other.border_top_width.or(self.border_top_width),
            border_bottom_width: other.border_bottom_width.or(self.border_bottom_width),
            border_left_width: other.border_left_width.or(self.border_left_width),
            border_right_width: other.border_right_width.or(self.border_right_width),
            border_color: other.border_color.or(self.border_color),
            border_top_color: other.border_top_color.or(self.border_top_color),
            border_bottom_color: other.border_bottom_color.or(self.border_bottom_color),
            border_left_color: other.border_left_color.or(self.border_left_color),
            border_right_color: other.border_right_color.or(self.border_right_color),
            border_style: other.border_style.or(self.border_style),
            position: other.position.or(self.position),
            top: other.top.or(self.top),
            right: other.right.or(self.right),
            bottom: other.bottom.or(self.bottom),
            left: other.left.or(self.left),
            background_color: other.background_color.or(self.background_color),
            opacity: other.opacity.or(self.opacity),
            overflow: other.overflow.or(self.overflow),
            z_index: other.z_index.or(self.z_index),
            shadow: other.shadow.or(self.shadow),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ResolvedStyle::default()
    }
}

/// Fully expanded text style
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedTextStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub color: Option<Color>,
    pub text_align: Option<TextAlign>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub text_transform: Option<TextTransform>,
    pub text_decoration: Option<TextDecoration>,
    pub italic: Option<bool>,
}

impl ResolvedTextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay another text style; set fields in `other` win
    pub fn overlay(&self, other: &ResolvedTextStyle) -> ResolvedTextStyle {
        ResolvedTextStyle {
            font_family: other.font_family.clone().or_else(|| self.font_family.clone()),
            font_size: other.font_size.or(self.font_size),
            color: other.color.or(self.color),
            text_align: other.text_align.or(self.text_align),
            line_height: other.line_height.or(self.line_height),
            letter_spacing: other.letter_spacing.or(self.letter_spacing),
            text_transform: other.text_transform.or(self.text_transform),
            text_decoration: other.text_decoration.or(self.text_decoration),
            italic: other.italic.or(self.italic),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ResolvedTextStyle::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_prefers_other() {
        let base = ResolvedStyle {
            padding_top: Some(8.0),
            width: Some(100.0),
            ..Default::default()
        };
        let over = ResolvedStyle {
            padding_top: Some(12.0),
            ..Default::default()
        };

        let merged = base.overlay(&over);
        assert_eq!(merged.padding_top, Some(12.0));
        assert_eq!(merged.width, Some(100.0));
    }

    #[test]
    fn test_unset_fields_do_not_clobber() {
        let base = ResolvedStyle {
            background_color: Some(Color::BLACK),
            ..Default::default()
        };
        let merged = base.overlay(&ResolvedStyle::default());
        assert_eq!(merged.background_color, Some(Color::BLACK));
    }

    #[test]
    fn test_is_empty() {
        assert!(ResolvedStyle::new().is_empty());
        assert!(!ResolvedStyle {
            opacity: Some(1.0),
            ..Default::default()
        }
        .is_empty());
    }
}
