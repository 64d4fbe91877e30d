//! Flex-intent expander
//!
//! Named layout intents map to a fixed `{direction, align_items,
//! justify_content}` triple. Table-driven, one intent to one triple; intents
//! do not compose.

use taffy::style::{AlignItems, FlexDirection, JustifyContent};

use crate::intent::FlexStyle;
use crate::resolved::ResolvedStyle;

/// Named flex layout intents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlexIntent {
    /// Row, centered on both axes
    FlexCenter,
    /// Row, centered main axis only
    FlexJustify,
    /// Row, centered cross axis only
    FlexItem,
    /// Reversed row, centered cross axis
    FlexItemReverse,
    /// Row, centered cross axis, space-between main axis
    FlexBetween,
    /// Row, centered cross axis, space-evenly main axis
    FlexEvenly,
    /// Reversed row, centered cross axis, space-between main axis
    FlexBetweenReverse,
    /// Row, centered cross axis, space-evenly main axis
    FlexSpace,
    /// Plain row
    FlexRow,
    /// Plain reversed row
    FlexRowReverse,
    /// Column, centered on both axes
    ColCenter,
    /// Column, space-between main axis
    ColBetween,
    /// Plain reversed column
    ColReverse,
    /// Column, space-evenly main axis
    ColEvenly,
}

type FlexTriple = (
    FlexDirection,
    Option<AlignItems>,
    Option<JustifyContent>,
);

impl FlexIntent {
    /// The direction/align/justify triple for this intent
    pub fn triple(&self) -> FlexTriple {
        match self {
            FlexIntent::FlexCenter => (
                FlexDirection::Row,
                Some(AlignItems::Center),
                Some(JustifyContent::Center),
            ),
            FlexIntent::FlexJustify => (FlexDirection::Row, None, Some(JustifyContent::Center)),
            FlexIntent::FlexItem => (FlexDirection::Row, Some(AlignItems::Center), None),
            FlexIntent::FlexItemReverse => {
                (FlexDirection::RowReverse, Some(AlignItems::Center), None)
            }
            FlexIntent::FlexBetween => (
                FlexDirection::Row,
                Some(AlignItems::Center),
                Some(JustifyContent::SpaceBetween),
            ),
            FlexIntent::FlexEvenly => (
                FlexDirection::Row,
                Some(AlignItems::Center),
                Some(JustifyContent::SpaceEvenly),
            ),
            FlexIntent::FlexBetweenReverse => (
                FlexDirection::RowReverse,
                Some(AlignItems::Center),
                Some(JustifyContent::SpaceBetween),
            ),
            // Kept as a distinct name for compatibility; same triple as
            // FlexEvenly
            FlexIntent::FlexSpace => (
                FlexDirection::Row,
                Some(AlignItems::Center),
                Some(JustifyContent::SpaceEvenly),
            ),
            FlexIntent::FlexRow => (FlexDirection::Row, None, None),
            FlexIntent::FlexRowReverse => (FlexDirection::RowReverse, None, None),
            FlexIntent::ColCenter => (
                FlexDirection::Column,
                Some(AlignItems::Center),
                Some(JustifyContent::Center),
            ),
            FlexIntent::ColBetween => (
                FlexDirection::Column,
                None,
                Some(JustifyContent::SpaceBetween),
            ),
            FlexIntent::ColReverse => (FlexDirection::ColumnReverse, None, None),
            FlexIntent::ColEvenly => (
                FlexDirection::Column,
                None,
                Some(JustifyContent::SpaceEvenly),
            ),
        }
    }
}

/// Expand flex shorthands into `out`
pub fn expand_flex(flex: &FlexStyle, out: &mut ResolvedStyle) {
    out.flex = flex.flex;
    out.align_self = flex.align_self;
    out.gap = flex.gap;
    if flex.wrap == Some(true) {
        out.flex_wrap = Some(taffy::style::FlexWrap::Wrap);
    }

    if let Some(intent) = flex.fd {
        let (direction, align_items, justify_content) = intent.triple();
        out.flex_direction = Some(direction);
        out.align_items = align_items;
        out.justify_content = justify_content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_both_axes() {
        let (direction, align, justify) = FlexIntent::FlexCenter.triple();
        assert_eq!(direction, FlexDirection::Row);
        assert_eq!(align, Some(AlignItems::Center));
        assert_eq!(justify, Some(JustifyContent::Center));
    }

    #[test]
    fn test_row_with_centered_cross_axis() {
        let (direction, align, justify) = FlexIntent::FlexItem.triple();
        assert_eq!(direction, FlexDirection::Row);
        assert_eq!(align, Some(AlignItems::Center));
        assert_eq!(justify, None);
    }

    #[test]
    fn test_column_space_between_leaves_cross_axis_alone() {
        let (direction, align, justify) = FlexIntent::ColBetween.triple();
        assert_eq!(direction, FlexDirection::Column);
        assert_eq!(align, None);
        assert_eq!(justify, Some(JustifyContent::SpaceBetween));
    }

    #[test]
    fn test_flex_space_matches_flex_evenly() {
        assert_eq!(FlexIntent::FlexSpace.triple(), FlexIntent::FlexEvenly.triple());
    }

    #[test]
    fn test_expand_without_intent_sets_no_direction() {
        let mut out = ResolvedStyle::default();
        expand_flex(
            &FlexStyle {
                flex: Some(1.0),
                ..Default::default()
            },
            &mut out,
        );
        assert_eq!(out.flex, Some(1.0));
        assert_eq!(out.flex_direction, None);
    }

    #[test]
    fn test_expand_wrap() {
        let mut out = ResolvedStyle::default();
        expand_flex(
            &FlexStyle {
                wrap: Some(true),
                ..Default::default()
            },
            &mut out,
        );
        assert_eq!(out.flex_wrap, Some(taffy::style::FlexWrap::Wrap));
    }
}
