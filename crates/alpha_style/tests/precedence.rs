//! Resolver precedence across all four layers

use alpha_core::Color;
use alpha_style::{resolve, Component, ResolvedStyle, StyleIntent, UiConfig, UiContext};
use alpha_theme::{ColorMode, ColorToken};

fn ctx() -> UiContext {
    UiContext::new(UiConfig::default())
}

#[test]
fn defaults_then_caller_then_expansion_then_explicit_style() {
    let ctx = ctx();
    ctx.configure_component_defaults([(
        Component::Button,
        StyleIntent::new().ph(16.0).pv(8.0).br(10.0).color("primary"),
    )]);

    // Caller overrides one default field, adds a directional value, and an
    // explicit style override for one primitive field
    let intent = StyleIntent::new()
        .pv(12.0)
        .pt(2.0)
        .style(ResolvedStyle {
            padding_right: Some(99.0),
            ..Default::default()
        });

    let style = resolve(&ctx, Component::Button, &intent);

    // Caller beat the default for pv; directional beat both for the top edge
    assert_eq!(style.padding_top, Some(2.0));
    assert_eq!(style.padding_bottom, Some(12.0));
    // Default axis value expanded for untouched edges... except where the
    // explicit style override wins last
    assert_eq!(style.padding_left, Some(16.0));
    assert_eq!(style.padding_right, Some(99.0));
    // Default visuals survive untouched
    assert_eq!(style.border_radius, Some(10.0));
    assert_eq!(
        style.background_color,
        Some(ctx.theme().color(ColorToken::Primary))
    );
}

#[test]
fn caller_props_resolve_against_active_mode() {
    let ctx = ctx();
    let intent = StyleIntent::new().color("background");

    let light = resolve(&ctx, Component::View, &intent);
    ctx.set_color_mode(ColorMode::Dark);
    let dark = resolve(&ctx, Component::View, &intent);

    assert_ne!(light.background_color, dark.background_color);
}

#[test]
fn configuration_has_no_retroactive_effect() {
    let ctx = ctx();
    let intent = StyleIntent::new();

    let before = resolve(&ctx, Component::View, &intent);
    assert_eq!(before.padding_top, None);

    ctx.configure_component_defaults([(Component::View, StyleIntent::new().p(8.0))]);

    // The earlier resolution result is a plain value, untouched by the
    // configuration call; only new resolutions see the default
    assert_eq!(before.padding_top, None);
    let after = resolve(&ctx, Component::View, &intent);
    assert_eq!(after.padding_top, Some(8.0));
}

#[test]
fn literal_color_strings_pass_through_resolution() {
    let ctx = ctx();
    let style = resolve(
        &ctx,
        Component::View,
        &StyleIntent::new().color("#123456").bc("rgba(0, 0, 0, 0.21)"),
    );
    assert_eq!(style.background_color, Some(Color::from_hex(0x123456)));
    assert_eq!(style.border_color, Some(Color::rgba(0.0, 0.0, 0.0, 0.21)));
}

#[test]
fn defaults_for_one_component_do_not_leak() {
    let ctx = ctx();
    ctx.configure_component_defaults([(Component::Input, StyleIntent::new().br(10.0))]);

    let input = resolve(&ctx, Component::Input, &StyleIntent::new());
    let view = resolve(&ctx, Component::View, &StyleIntent::new());

    assert_eq!(input.border_radius, Some(10.0));
    assert_eq!(view.border_radius, None);
}
