//! Alpha UI Theme System
//!
//! Design tokens and theme state for the styling pipeline:
//!
//! - **Color tokens**: the semantic palette (light/dark variants) every
//!   color-valued prop resolves against
//! - **Font tokens**: weight-to-family mapping with base-name generation
//! - **Elevation**: fixed lookup table from depth level to shadow descriptor
//! - **Theme handle**: the active theme with wholesale mode switching and
//!   push-based change notification
//! - **Configuration**: declarative TOML theme config with literal color
//!   strings
//!
//! # Quick Start
//!
//! ```rust
//! use alpha_theme::{ColorMode, ColorToken, ThemeBundle, ThemeHandle};
//!
//! let handle = ThemeHandle::new(ThemeBundle::default(), ColorMode::Light);
//! let primary = handle.color(ColorToken::Primary);
//! handle.set_mode(ColorMode::Dark);
//! ```
//!
//! Color resolution never fails: a name that is not a palette token is
//! interpreted as a literal color value, and strings that are neither
//! resolve to nothing so the style field is silently omitted.

pub mod config;
pub mod handle;
pub mod palettes;
pub mod theme;
pub mod tokens;

pub use config::{ThemeConfig, ThemeConfigError};
pub use handle::ThemeHandle;
pub use theme::{ColorMode, ColorOverrides, Theme, ThemeBundle};
pub use tokens::*;
