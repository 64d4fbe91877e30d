//! Spacing expander
//!
//! Expands padding/margin shorthands into per-edge primitive fields with a
//! fixed precedence: directional beats axis beats general, regardless of
//! the order fields were written. `px`/`py` (`mx`/`my`) are axis aliases
//! consulted only when `ph`/`pv` (`mh`/`mv`) are unset.

use crate::intent::SpacingStyle;
use crate::resolved::ResolvedStyle;

/// Expand spacing shorthands into `out`
pub fn expand_spacing(spacing: &SpacingStyle, out: &mut ResolvedStyle) {
    let pad = spacing.padding.or(spacing.p);
    let pad_h = spacing.ph.or(spacing.px);
    let pad_v = spacing.pv.or(spacing.py);

    out.padding_top = spacing.pt.or(pad_v).or(pad);
    out.padding_bottom = spacing.pb.or(pad_v).or(pad);
    out.padding_left = spacing.pl.or(pad_h).or(pad);
    out.padding_right = spacing.pr.or(pad_h).or(pad);

    let mar = spacing.margin.or(spacing.m);
    let mar_h = spacing.mh.or(spacing.mx);
    let mar_v = spacing.mv.or(spacing.my);

    out.margin_top = spacing.mt.or(mar_v).or(mar);
    out.margin_bottom = spacing.mb.or(mar_v).or(mar);
    out.margin_left = spacing.ml.or(mar_h).or(mar);
    out.margin_right = spacing.mr.or(mar_h).or(mar);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(spacing: SpacingStyle) -> ResolvedStyle {
        let mut out = ResolvedStyle::default();
        expand_spacing(&spacing, &mut out);
        out
    }

    #[test]
    fn test_general_fills_every_edge() {
        let out = expand(SpacingStyle {
            p: Some(8.0),
            m: Some(4.0),
            ..Default::default()
        });
        assert_eq!(out.padding_top, Some(8.0));
        assert_eq!(out.padding_bottom, Some(8.0));
        assert_eq!(out.padding_left, Some(8.0));
        assert_eq!(out.padding_right, Some(8.0));
        assert_eq!(out.margin_top, Some(4.0));
        assert_eq!(out.margin_right, Some(4.0));
    }

    #[test]
    fn test_axis_overrides_general() {
        let out = expand(SpacingStyle {
            p: Some(8.0),
            ph: Some(16.0),
            ..Default::default()
        });
        assert_eq!(out.padding_left, Some(16.0));
        assert_eq!(out.padding_right, Some(16.0));
        assert_eq!(out.padding_top, Some(8.0));
        assert_eq!(out.padding_bottom, Some(8.0));
    }

    #[test]
    fn test_directional_overrides_axis_and_general() {
        let out = expand(SpacingStyle {
            p: Some(8.0),
            pv: Some(12.0),
            pt: Some(20.0),
            ..Default::default()
        });
        assert_eq!(out.padding_top, Some(20.0));
        assert_eq!(out.padding_bottom, Some(12.0));
        assert_eq!(out.padding_left, Some(8.0));
    }

    #[test]
    fn test_directional_wins_regardless_of_declaration_order() {
        // Identical precedence whether the record was built axis-first or
        // directional-first
        let axis_first = expand(SpacingStyle {
            mv: Some(10.0),
            mt: Some(2.0),
            ..Default::default()
        });
        let directional_first = expand(SpacingStyle {
            mt: Some(2.0),
            mv: Some(10.0),
            ..Default::default()
        });
        assert_eq!(axis_first, directional_first);
        assert_eq!(axis_first.margin_top, Some(2.0));
        assert_eq!(axis_first.margin_bottom, Some(10.0));
    }

    #[test]
    fn test_alias_axis_fields_are_subordinate() {
        // px is consulted only when ph is unset
        let out = expand(SpacingStyle {
            ph: Some(16.0),
            px: Some(99.0),
            ..Default::default()
        });
        assert_eq!(out.padding_left, Some(16.0));

        let out = expand(SpacingStyle {
            px: Some(99.0),
            ..Default::default()
        });
        assert_eq!(out.padding_left, Some(99.0));

        let out = expand(SpacingStyle {
            my: Some(7.0),
            ..Default::default()
        });
        assert_eq!(out.margin_top, Some(7.0));
        assert_eq!(out.margin_bottom, Some(7.0));
    }

    #[test]
    fn test_padding_prop_beats_p_shortcut() {
        let out = expand(SpacingStyle {
            padding: Some(20.0),
            p: Some(8.0),
            ..Default::default()
        });
        assert_eq!(out.padding_top, Some(20.0));
    }

    #[test]
    fn test_unset_fields_stay_unset() {
        let out = expand(SpacingStyle::default());
        assert_eq!(out.padding_top, None);
        assert_eq!(out.margin_left, None);
    }
}
