//! Alpha UI
//!
//! Shorthand-prop styling with themed components for mobile hosts. This
//! facade crate is the flat public surface: construct a [`UiContext`] once
//! at the application root, then build leaves and widgets against it.
//!
//! ```rust
//! use alpha_ui::prelude::*;
//!
//! // Application root: configure the provider once
//! let ctx = UiContext::new(UiConfig {
//!     initial_mode: ColorMode::Dark,
//!     ..Default::default()
//! });
//!
//! // Leaves resolve shorthand props against the context every pass
//! let style = view()
//!     .color("background")
//!     .fd(FlexIntent::FlexBetween)
//!     .ph(16.0)
//!     .elevation(2)
//!     .resolve(&ctx);
//! assert!(style.shadow.is_some());
//! ```
//!
//! Themes can also come from a declarative TOML document:
//!
//! ```rust
//! use alpha_ui::prelude::*;
//! use alpha_theme::ThemeConfig;
//!
//! let config = ThemeConfig::from_toml_str(
//!     "initial_mode = \"dark\"\n[colors.dark]\nprimary = \"#CC4400\"\n",
//! )
//! .unwrap();
//! let ctx = UiContext::new(UiConfig::from_theme_config(config));
//! ```

pub use alpha_animation;
pub use alpha_core;
pub use alpha_style;
pub use alpha_theme;
pub use alpha_widgets;

pub use alpha_core::{Color, EdgeInsets, Viewport};
pub use alpha_style::{
    resolve, AdaptiveSize, ColorRef, Component, FlexIntent, ResolvedStyle, ResolvedTextStyle,
    StyleIntent, UiConfig, UiContext,
};
pub use alpha_theme::{
    elevation, ColorMode, ColorToken, ElevationShadow, FontFamilyTokens, FontWeight, ThemeConfig,
};
pub use alpha_widgets::{
    button, image, input, list, text, view, BottomSheet, Button, DateField, DateValue, ImageProps,
    InputProps, ListProps, PasswordField, ProgressBar, Select, SelectOption, SelectionEvent,
    TextProps, ViewProps,
};

/// Everything an application typically imports
pub mod prelude {
    pub use alpha_core::{Color, EdgeInsets, Viewport};
    pub use alpha_style::{
        resolve, AdaptiveSize, ColorRef, Component, FlexIntent, ResolvedStyle, StyleIntent,
        UiConfig, UiContext,
    };
    pub use alpha_theme::{ColorMode, ColorToken, FontWeight};
    pub use alpha_widgets::{
        button, image, input, list, text, view, BottomSheet, DateField, DateValue, PasswordField,
        ProgressBar, Select, SelectOption, SelectionEvent,
    };
}
