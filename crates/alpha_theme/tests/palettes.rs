use alpha_core::Color;
use alpha_theme::{ColorMode, ColorToken, ThemeBundle};

#[test]
fn every_token_resolves_by_name_in_both_modes() {
    let bundle = ThemeBundle::default();
    for mode in [ColorMode::Light, ColorMode::Dark] {
        let colors = bundle.for_mode(mode).colors();
        for token in ColorToken::ALL {
            assert_eq!(
                colors.resolve(token.name()),
                Some(colors.get(token)),
                "token {:?} in {:?}",
                token,
                mode
            );
        }
    }
}

#[test]
fn unknown_strings_fall_through_to_literal_interpretation() {
    let colors = ThemeBundle::default().for_mode(ColorMode::Light).colors().clone();

    // Literal values come back as themselves, not palette substitutions
    assert_eq!(colors.resolve("#0095E0"), Some(Color::from_hex(0x0095E0)));
    assert_eq!(
        colors.resolve("rgba(0, 0, 0, 0.5)"),
        Some(Color::rgba(0.0, 0.0, 0.0, 0.5))
    );
    assert_eq!(colors.resolve("green"), Some(Color::from_hex(0x008000)));

    // Neither token nor literal: omitted, never an error
    assert_eq!(colors.resolve("??"), None);
}

#[test]
fn modes_differ_on_surfaces_but_share_brand_colors() {
    let bundle = ThemeBundle::default();
    let light = bundle.for_mode(ColorMode::Light).colors();
    let dark = bundle.for_mode(ColorMode::Dark).colors();

    for token in [
        ColorToken::Text,
        ColorToken::Text2,
        ColorToken::Background,
        ColorToken::Border,
        ColorToken::Shade,
        ColorToken::Touchable,
        ColorToken::Tint,
        ColorToken::Check,
        ColorToken::Spotlight,
    ] {
        assert_ne!(light.get(token), dark.get(token), "token {token:?}");
    }

    for token in [ColorToken::Primary, ColorToken::Danger, ColorToken::Warning] {
        assert_eq!(light.get(token), dark.get(token), "token {token:?}");
    }
}
