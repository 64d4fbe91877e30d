//! Style intent
//!
//! The caller-facing shorthand record, modeled as a composition of small
//! optional sub-groups instead of one flat bag of fields. Each group merges
//! independently (set fields in the overlaying group win) and expands
//! through its own pure function.
//!
//! Builder methods keep the ergonomic shorthand names (`p`, `ph`, `br`,
//! `bc`, `fd`, ...) that leaf props expose.

use alpha_core::Color;
use taffy::style::{AlignItems, Overflow};

use crate::color_ref::ColorRef;
use crate::flex::FlexIntent;
use crate::resolved::ResolvedStyle;

/// Padding and margin shorthands
///
/// Directional fields beat axis fields beat the general value; `px`/`py`
/// are accepted as aliases subordinate to `ph`/`pv` (same for margins).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpacingStyle {
    pub padding: Option<f32>,
    pub p: Option<f32>,
    pub ph: Option<f32>,
    pub pv: Option<f32>,
    pub px: Option<f32>,
    pub py: Option<f32>,
    pub pt: Option<f32>,
    pub pb: Option<f32>,
    pub pl: Option<f32>,
    pub pr: Option<f32>,

    pub margin: Option<f32>,
    pub m: Option<f32>,
    pub mh: Option<f32>,
    pub mv: Option<f32>,
    pub mx: Option<f32>,
    pub my: Option<f32>,
    pub mt: Option<f32>,
    pub mb: Option<f32>,
    pub ml: Option<f32>,
    pub mr: Option<f32>,
}

impl SpacingStyle {
    pub fn merge(&self, other: &SpacingStyle) -> SpacingStyle {
        SpacingStyle {
            padding: other.padding.or(self.padding),
            p: other.p.or(self.p),
            ph: other.ph.or(self.ph),
            pv: other.pv.or(self.pv),
            px: other.px.or(self.px),
            py: other.py.or(self.py),
            pt: other.pt.or(self.pt),
            pb: other.pb.or(self.pb),
            pl: other.pl.or(self.pl),
            pr: other.pr.or(self.pr),
            margin: other.margin.or(self.margin),
            m: other.m.or(self.m),
            mh: other.mh.or(self.mh),
            mv: other.mv.or(self.mv),
            mx: other.mx.or(self.mx),
            my: other.my.or(self.my),
            mt: other.mt.or(self.mt),
            mb: other.mb.or(self.mb),
            ml: other.ml.or(self.ml),
            mr: other.mr.or(self.mr),
        }
    }
}

/// Flex container shorthands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexStyle {
    pub flex: Option<f32>,
    /// Named layout intent expanded to a direction/align/justify triple
    pub fd: Option<FlexIntent>,
    pub align_self: Option<AlignItems>,
    pub wrap: Option<bool>,
    pub gap: Option<f32>,
}

impl FlexStyle {
    pub fn merge(&self, other: &FlexStyle) -> FlexStyle {
        FlexStyle {
            flex: other.flex.or(self.flex),
            fd: other.fd.or(self.fd),
            align_self: other.align_self.or(self.align_self),
            wrap: other.wrap.or(self.wrap),
            gap: other.gap.or(self.gap),
        }
    }
}

/// Width/height shorthands
///
/// `size` sets both axes; per-axis precedence is the fixed chain
/// `size ?? width ?? w` (and `size ?? height ?? h`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DimensionStyle {
    pub size: Option<f32>,
    pub width: Option<f32>,
    pub w: Option<f32>,
    pub height: Option<f32>,
    pub h: Option<f32>,
    pub min_w: Option<f32>,
    pub max_w: Option<f32>,
    pub min_h: Option<f32>,
    pub max_h: Option<f32>,
}

impl DimensionStyle {
    pub fn merge(&self, other: &DimensionStyle) -> DimensionStyle {
        DimensionStyle {
            size: other.size.or(self.size),
            width: other.width.or(self.width),
            w: other.w.or(self.w),
            height: other.height.or(self.height),
            h: other.h.or(self.h),
            min_w: other.min_w.or(self.min_w),
            max_w: other.max_w.or(self.max_w),
            min_h: other.min_h.or(self.min_h),
            max_h: other.max_h.or(self.max_h),
        }
    }
}

/// Border line rendering style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderLineStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
}

/// Border shorthands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderStyle {
    /// Uniform corner radius
    pub br: Option<f32>,
    pub btlr: Option<f32>,
    pub btrr: Option<f32>,
    pub bblr: Option<f32>,
    pub bbrr: Option<f32>,
    /// Uniform border width
    pub bw: Option<f32>,
    pub btw: Option<f32>,
    pub bbw: Option<f32>,
    pub blw: Option<f32>,
    pub brw: Option<f32>,
    /// Uniform border color
    pub bc: Option<ColorRef>,
    pub btc: Option<ColorRef>,
    pub bbc: Option<ColorRef>,
    pub blc: Option<ColorRef>,
    pub brc: Option<ColorRef>,
    pub bs: Option<BorderLineStyle>,
}

impl BorderStyle {
    pub fn merge(&self, other: &BorderStyle) -> BorderStyle {
        BorderStyle {
            br: other.br.or(self.br),
            btlr: other.btlr.or(self.btlr),
            btrr: other.btrr.or(self.btrr),
            bblr: other.bblr.or(self.bblr),
            bbrr: other.bbrr.or(self.bbrr),
            bw: other.bw.or(self.bw),
            btw: other.btw.or(self.btw),
            bbw: other.bbw.or(self.bbw),
            blw: other.blw.or(self.blw),
            brw: other.brw.or(self.brw),
            bc: other.bc.clone().or_else(|| self.bc.clone()),
            btc: other.btc.clone().or_else(|| self.btc.clone()),
            bbc: other.bbc.clone().or_else(|| self.bbc.clone()),
            blc: other.blc.clone().or_else(|| self.blc.clone()),
            brc: other.brc.clone().or_else(|| self.brc.clone()),
            bs: other.bs.or(self.bs),
        }
    }
}

/// Absolute positioning and inset shorthands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionStyle {
    /// Force absolute positioning without setting any edge
    pub absolute: Option<bool>,
    /// All four edges
    pub inset: Option<f32>,
    /// Left and right
    pub inset_x: Option<f32>,
    /// Top and bottom
    pub inset_y: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
}

impl PositionStyle {
    pub fn merge(&self, other: &PositionStyle) -> PositionStyle {
        PositionStyle {
            absolute: other.absolute.or(self.absolute),
            inset: other.inset.or(self.inset),
            inset_x: other.inset_x.or(self.inset_x),
            inset_y: other.inset_y.or(self.inset_y),
            top: other.top.or(self.top),
            right: other.right.or(self.right),
            bottom: other.bottom.or(self.bottom),
            left: other.left.or(self.left),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == PositionStyle::default()
    }
}

/// Background, opacity, elevation, and stacking shorthands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualStyle {
    /// Background color (token name or literal)
    pub color: Option<ColorRef>,
    pub opacity: Option<f32>,
    /// Shadow depth level into the elevation table
    pub elevation: Option<u8>,
    pub overflow: Option<Overflow>,
    pub z_index: Option<i32>,
}

impl VisualStyle {
    pub fn merge(&self, other: &VisualStyle) -> VisualStyle {
        VisualStyle {
            color: other.color.clone().or_else(|| self.color.clone()),
            opacity: other.opacity.or(self.opacity),
            elevation: other.elevation.or(self.elevation),
            overflow: other.overflow.or(self.overflow),
            z_index: other.z_index.or(self.z_index),
        }
    }
}

/// The complete shorthand style record for one leaf invocation
///
/// Immutable per render pass; merge layers produce new values instead of
/// mutating shared state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleIntent {
    pub spacing: SpacingStyle,
    pub flex: FlexStyle,
    pub dimensions: DimensionStyle,
    pub border: BorderStyle,
    pub position: PositionStyle,
    pub visual: VisualStyle,
    /// Explicit style override, overlaid after expansion (always wins)
    pub style: Option<ResolvedStyle>,
}

impl StyleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another intent on top of this one; `other` wins per field
    pub fn merge(&self, other: &StyleIntent) -> StyleIntent {
        StyleIntent {
            spacing: self.spacing.merge(&other.spacing),
            flex: self.flex.merge(&other.flex),
            dimensions: self.dimensions.merge(&other.dimensions),
            border: self.border.merge(&other.border),
            position: self.position.merge(&other.position),
            visual: self.visual.merge(&other.visual),
            style: other.style.clone().or_else(|| self.style.clone()),
        }
    }

    // =========================================================================
    // Spacing
    // =========================================================================

    pub fn p(mut self, value: f32) -> Self {
        self.spacing.p = Some(value);
        self
    }

    pub fn padding(mut self, value: f32) -> Self {
        self.spacing.padding = Some(value);
        self
    }

    pub fn ph(mut self, value: f32) -> Self {
        self.spacing.ph = Some(value);
        self
    }

    pub fn pv(mut self, value: f32) -> Self {
        self.spacing.pv = Some(value);
        self
    }

    pub fn px(mut self, value: f32) -> Self {
        self.spacing.px = Some(value);
        self
    }

    pub fn py(mut self, value: f32) -> Self {
        self.spacing.py = Some(value);
        self
    }

    pub fn pt(mut self, value: f32) -> Self {
        self.spacing.pt = Some(value);
        self
    }

    pub fn pb(mut self, value: f32) -> Self {
        self.spacing.pb = Some(value);
        self
    }

    pub fn pl(mut self, value: f32) -> Self {
        self.spacing.pl = Some(value);
        self
    }

    pub fn pr(mut self, value: f32) -> Self {
        self.spacing.pr = Some(value);
        self
    }

    pub fn m(mut self, value: f32) -> Self {
        self.spacing.m = Some(value);
        self
    }

    pub fn margin(mut self, value: f32) -> Self {
        self.spacing.margin = Some(value);
        self
    }

    pub fn mh(mut self, value: f32) -> Self {
        self.spacing.mh = Some(value);
        self
    }

    pub fn mv(mut self, value: f32) -> Self {
        self.spacing.mv = Some(value);
        self
    }

    pub fn mt(mut self, value: f32) -> Self {
        self.spacing.mt = Some(value);
        self
    }

    pub fn mb(mut self, value: f32) -> Self {
        self.spacing.mb = Some(value);
        self
    }

    pub fn ml(mut self, value: f32) -> Self {
        self.spacing.ml = Some(value);
        self
    }

    pub fn mr(mut self, value: f32) -> Self {
        self.spacing.mr = Some(value);
        self
    }

    // =========================================================================
    // Flex
    // =========================================================================

    pub fn flex(mut self, value: f32) -> Self {
        self.flex.flex = Some(value);
        self
    }

    /// Named flex-direction intent
    pub fn fd(mut self, intent: FlexIntent) -> Self {
        self.flex.fd = Some(intent);
        self
    }

    pub fn align(mut self, align: AlignItems) -> Self {
        self.flex.align_self = Some(align);
        self
    }

    pub fn wrap(mut self) -> Self {
        self.flex.wrap = Some(true);
        self
    }

    pub fn gap(mut self, value: f32) -> Self {
        self.flex.gap = Some(value);
        self
    }

    // =========================================================================
    // Dimensions
    // =========================================================================

    /// Square size shortcut; wins over `width`/`w` and `height`/`h`
    pub fn size(mut self, value: f32) -> Self {
        self.dimensions.size = Some(value);
        self
    }

    pub fn width(mut self, value: f32) -> Self {
        self.dimensions.width = Some(value);
        self
    }

    pub fn w(mut self, value: f32) -> Self {
        self.dimensions.w = Some(value);
        self
    }

    pub fn height(mut self, value: f32) -> Self {
        self.dimensions.height = Some(value);
        self
    }

    pub fn h(mut self, value: f32) -> Self {
        self.dimensions.h = Some(value);
        self
    }

    pub fn min_w(mut self, value: f32) -> Self {
        self.dimensions.min_w = Some(value);
        self
    }

    pub fn max_w(mut self, value: f32) -> Self {
        self.dimensions.max_w = Some(value);
        self
    }

    pub fn min_h(mut self, value: f32) -> Self {
        self.dimensions.min_h = Some(value);
        self
    }

    pub fn max_h(mut self, value: f32) -> Self {
        self.dimensions.max_h = Some(value);
        self
    }

    // =========================================================================
    // Border
    // =========================================================================

    pub fn br(mut self, radius: f32) -> Self {
        self.border.br = Some(radius);
        self
    }

    pub fn btlr(mut self, radius: f32) -> Self {
        self.border.btlr = Some(radius);
        self
    }

    pub fn btrr(mut self, radius: f32) -> Self {
        self.border.btrr = Some(radius);
        self
    }

    pub fn bblr(mut self, radius: f32) -> Self {
        self.border.bblr = Some(radius);
        self
    }

    pub fn bbrr(mut self, radius: f32) -> Self {
        self.border.bbrr = Some(radius);
        self
    }

    pub fn bw(mut self, width: f32) -> Self {
        self.border.bw = Some(width);
        self
    }

    pub fn btw(mut self, width: f32) -> Self {
        self.border.btw = Some(width);
        self
    }

    pub fn bbw(mut self, width: f32) -> Self {
        self.border.bbw = Some(width);
        self
    }

    pub fn blw(mut self, width: f32) -> Self {
        self.border.blw = Some(width);
        self
    }

    pub fn brw(mut self, width: f32) -> Self {
        self.border.brw = Some(width);
        self
    }

    pub fn bc(mut self, color: impl Into<ColorRef>) -> Self {
        self.border.bc = Some(color.into());
        self
    }

    pub fn btc(mut self, color: impl Into<ColorRef>) -> Self {
        self.border.btc = Some(color.into());
        self
    }

    pub fn bbc(mut self, color: impl Into<ColorRef>) -> Self {
        self.border.bbc = Some(color.into());
        self
    }

    pub fn blc(mut self, color: impl Into<ColorRef>) -> Self {
        self.border.blc = Some(color.into());
        self
    }

    pub fn brc(mut self, color: impl Into<ColorRef>) -> Self {
        self.border.brc = Some(color.into());
        self
    }

    pub fn bs(mut self, style: BorderLineStyle) -> Self {
        self.border.bs = Some(style);
        self
    }

    // =========================================================================
    // Position
    // =========================================================================

    pub fn absolute(mut self) -> Self {
        self.position.absolute = Some(true);
        self
    }

    pub fn inset(mut self, value: f32) -> Self {
        self.position.inset = Some(value);
        self
    }

    pub fn inset_x(mut self, value: f32) -> Self {
        self.position.inset_x = Some(value);
        self
    }

    pub fn inset_y(mut self, value: f32) -> Self {
        self.position.inset_y = Some(value);
        self
    }

    pub fn top(mut self, value: f32) -> Self {
        self.position.top = Some(value);
        self
    }

    pub fn right(mut self, value: f32) -> Self {
        self.position.right = Some(value);
        self
    }

    pub fn bottom(mut self, value: f32) -> Self {
        self.position.bottom = Some(value);
        self
    }

    pub fn left(mut self, value: f32) -> Self {
        self.position.left = Some(value);
        self
    }

    // =========================================================================
    // Visual
    // =========================================================================

    /// Background color (token name, literal string, or concrete color)
    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.visual.color = Some(color.into());
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.visual.color = Some(ColorRef::Literal(color));
        self
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.visual.opacity = Some(value.clamp(0.0, 1.0));
        self
    }

    /// Shadow depth level (1-10; 0 clears)
    pub fn elevation(mut self, level: u8) -> Self {
        self.visual.elevation = Some(level);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.visual.overflow = Some(overflow);
        self
    }

    pub fn z_index(mut self, value: i32) -> Self {
        self.visual.z_index = Some(value);
        self
    }

    // =========================================================================
    // Explicit override
    // =========================================================================

    /// Explicit style overlaid after expansion; always wins
    pub fn style(mut self, style: ResolvedStyle) -> Self {
        self.style = Some(style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_groups() {
        let intent = StyleIntent::new()
            .color("primary")
            .ph(16.0)
            .fd(FlexIntent::FlexItem)
            .br(10.0)
            .size(32.0)
            .elevation(2);

        assert!(intent.visual.color.is_some());
        assert_eq!(intent.spacing.ph, Some(16.0));
        assert_eq!(intent.flex.fd, Some(FlexIntent::FlexItem));
        assert_eq!(intent.border.br, Some(10.0));
        assert_eq!(intent.dimensions.size, Some(32.0));
        assert_eq!(intent.visual.elevation, Some(2));
    }

    #[test]
    fn test_merge_caller_wins_on_collision() {
        let defaults = StyleIntent::new().ph(16.0).pv(8.0).color("background");
        let caller = StyleIntent::new().ph(24.0);

        let merged = defaults.merge(&caller);
        assert_eq!(merged.spacing.ph, Some(24.0));
        assert_eq!(merged.spacing.pv, Some(8.0));
        assert!(merged.visual.color.is_some());
    }

    #[test]
    fn test_merge_keeps_explicit_style_layer() {
        let override_style = ResolvedStyle {
            opacity: Some(0.5),
            ..Default::default()
        };
        let defaults = StyleIntent::new();
        let caller = StyleIntent::new().style(override_style.clone());

        let merged = defaults.merge(&caller);
        assert_eq!(merged.style, Some(override_style));
    }

    #[test]
    fn test_opacity_is_clamped() {
        assert_eq!(StyleIntent::new().opacity(2.0).visual.opacity, Some(1.0));
        assert_eq!(StyleIntent::new().opacity(-1.0).visual.opacity, Some(0.0));
    }
}
