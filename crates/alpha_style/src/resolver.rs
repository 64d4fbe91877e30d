//! The prop resolver
//!
//! Merges four precedence layers into one concrete style:
//!
//! 1. component defaults from the context registry (empty if absent)
//! 2. caller-supplied shorthand intent (caller wins on collision)
//! 3. shorthand expansion into primitive fields
//! 4. the explicit `style` override, overlaid last (always wins)
//!
//! No validation happens anywhere in this path; unrecognized values are
//! silently dropped by the expanders.

use alpha_theme::{elevation, ColorTokens};

use crate::context::UiContext;
use crate::flex::expand_flex;
use crate::intent::{BorderStyle, DimensionStyle, StyleIntent, VisualStyle};
use crate::position::expand_position;
use crate::resolved::ResolvedStyle;
use crate::spacing::expand_spacing;

/// Styleable component names for the defaults registry
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Component {
    View,
    Text,
    Input,
    Image,
    List,
    Button,
    Select,
    Sheet,
    Password,
    DateField,
    ProgressBar,
}

/// Expand dimension shorthands.
///
/// Fixed precedence chain per axis: `size ?? width ?? w` and
/// `size ?? height ?? h` — the first defined value wins.
fn expand_dimensions(dimensions: &DimensionStyle, out: &mut ResolvedStyle) {
    out.width = dimensions.size.or(dimensions.width).or(dimensions.w);
    out.height = dimensions.size.or(dimensions.height).or(dimensions.h);
    out.min_width = dimensions.min_w;
    out.max_width = dimensions.max_w;
    out.min_height = dimensions.min_h;
    out.max_height = dimensions.max_h;
}

fn expand_border(border: &BorderStyle, colors: &ColorTokens, out: &mut ResolvedStyle) {
    out.border_radius = border.br;
    out.border_top_left_radius = border.btlr;
    out.border_top_right_radius = border.btrr;
    out.border_bottom_left_radius = border.bblr;
    out.border_bottom_right_radius = border.bbrr;

    out.border_width = border.bw;
    out.border_top_width = border.btw;
    out.border_bottom_width = border.bbw;
    out.border_left_width = border.blw;
    out.border_right_width = border.brw;

    out.border_color = border.bc.as_ref().and_then(|c| c.resolve(colors));
    out.border_top_color = border.btc.as_ref().and_then(|c| c.resolve(colors));
    out.border_bottom_color = border.bbc.as_ref().and_then(|c| c.resolve(colors));
    out.border_left_color = border.blc.as_ref().and_then(|c| c.resolve(colors));
    out.border_right_color = border.brc.as_ref().and_then(|c| c.resolve(colors));

    out.border_style = border.bs;
}

fn expand_visual(visual: &VisualStyle, colors: &ColorTokens, out: &mut ResolvedStyle) {
    out.background_color = visual.color.as_ref().and_then(|c| c.resolve(colors));
    out.opacity = visual.opacity;
    out.overflow = visual.overflow;
    out.z_index = visual.z_index;
    out.shadow = visual.elevation.and_then(elevation);
}

/// Resolve a component's caller props against the context.
pub fn resolve(ctx: &UiContext, component: Component, props: &StyleIntent) -> ResolvedStyle {
    let merged = match ctx.component_defaults(component) {
        Some(defaults) => defaults.merge(props),
        None => props.clone(),
    };

    let colors = ctx.theme().colors();

    let mut out = ResolvedStyle::default();
    expand_flex(&merged.flex, &mut out);
    expand_dimensions(&merged.dimensions, &mut out);
    expand_spacing(&merged.spacing, &mut out);
    expand_border(&merged.border, &colors, &mut out);
    expand_position(&merged.position, &mut out);
    expand_visual(&merged.visual, &colors, &mut out);

    match &merged.style {
        Some(style) => out.overlay(style),
        None => out,
    }
}
