//! Position and inset expander
//!
//! A single `inset` expands to all four edges; `inset_x`/`inset_y` expand to
//! two edges each. Explicit per-edge values always take precedence over any
//! inset-derived value for that edge. Setting any edge, inset, or the
//! `absolute` flag forces absolute positioning.

use taffy::style::Position;

use crate::intent::PositionStyle;
use crate::resolved::ResolvedStyle;

/// Expand position shorthands into `out`
pub fn expand_position(position: &PositionStyle, out: &mut ResolvedStyle) {
    if position.is_empty() {
        return;
    }

    out.top = position.top.or(position.inset_y).or(position.inset);
    out.bottom = position.bottom.or(position.inset_y).or(position.inset);
    out.left = position.left.or(position.inset_x).or(position.inset);
    out.right = position.right.or(position.inset_x).or(position.inset);

    out.position = Some(Position::Absolute);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(position: PositionStyle) -> ResolvedStyle {
        let mut out = ResolvedStyle::default();
        expand_position(&position, &mut out);
        out
    }

    #[test]
    fn test_inset_expands_to_all_edges() {
        let out = expand(PositionStyle {
            inset: Some(0.0),
            ..Default::default()
        });
        assert_eq!(out.top, Some(0.0));
        assert_eq!(out.bottom, Some(0.0));
        assert_eq!(out.left, Some(0.0));
        assert_eq!(out.right, Some(0.0));
        assert_eq!(out.position, Some(Position::Absolute));
    }

    #[test]
    fn test_axis_insets_expand_to_two_edges() {
        let out = expand(PositionStyle {
            inset_x: Some(10.0),
            ..Default::default()
        });
        assert_eq!(out.left, Some(10.0));
        assert_eq!(out.right, Some(10.0));
        assert_eq!(out.top, None);

        let out = expand(PositionStyle {
            inset_y: Some(5.0),
            ..Default::default()
        });
        assert_eq!(out.top, Some(5.0));
        assert_eq!(out.bottom, Some(5.0));
        assert_eq!(out.left, None);
    }

    #[test]
    fn test_explicit_edge_beats_inset_per_edge() {
        // Each edge independently: the explicit value wins, the remaining
        // edges still come from the inset
        let out = expand(PositionStyle {
            inset: Some(0.0),
            top: Some(40.0),
            ..Default::default()
        });
        assert_eq!(out.top, Some(40.0));
        assert_eq!(out.bottom, Some(0.0));
        assert_eq!(out.left, Some(0.0));
        assert_eq!(out.right, Some(0.0));

        let out = expand(PositionStyle {
            inset_x: Some(8.0),
            left: Some(2.0),
            ..Default::default()
        });
        assert_eq!(out.left, Some(2.0));
        assert_eq!(out.right, Some(8.0));
    }

    #[test]
    fn test_axis_inset_beats_full_inset() {
        let out = expand(PositionStyle {
            inset: Some(0.0),
            inset_y: Some(12.0),
            ..Default::default()
        });
        assert_eq!(out.top, Some(12.0));
        assert_eq!(out.bottom, Some(12.0));
        assert_eq!(out.left, Some(0.0));
    }

    #[test]
    fn test_any_edge_forces_absolute() {
        let out = expand(PositionStyle {
            top: Some(10.0),
            ..Default::default()
        });
        assert_eq!(out.position, Some(Position::Absolute));
        assert_eq!(out.bottom, None);
    }

    #[test]
    fn test_absolute_flag_alone() {
        let out = expand(PositionStyle {
            absolute: Some(true),
            ..Default::default()
        });
        assert_eq!(out.position, Some(Position::Absolute));
        assert_eq!(out.top, None);
    }

    #[test]
    fn test_empty_position_leaves_style_untouched() {
        let out = expand(PositionStyle::default());
        assert_eq!(out.position, None);
    }
}
