//! UI context
//!
//! One explicit configuration object constructed at application root and
//! passed by reference into every resolution: the active theme, the
//! component-defaults registry, and the current viewport. There is no
//! module-level mutable state; resolution order is exactly the order of
//! calls against this context.
//!
//! All access is single-threaded render-pass access in practice; the locks
//! exist so the context can also be shared behind an `Arc` with the host.

use std::sync::RwLock;

use alpha_core::Viewport;
use alpha_theme::{ColorMode, ColorOverrides, FontFamilyTokens, ThemeBundle, ThemeConfig, ThemeHandle};
use rustc_hash::FxHashMap;

use crate::intent::StyleIntent;
use crate::resolver::Component;

/// Per-component default style intents
///
/// Merging is shallow and key-by-key: configuring the same component twice
/// overlays field-wise, so the last writer wins for the fields it sets and
/// untouched fields persist.
#[derive(Debug, Default)]
pub struct ComponentDefaults {
    map: FxHashMap<Component, StyleIntent>,
}

impl ComponentDefaults {
    pub fn get(&self, component: Component) -> Option<&StyleIntent> {
        self.map.get(&component)
    }

    pub fn set(&mut self, component: Component, intent: StyleIntent) {
        self.map.insert(component, intent);
    }

    /// Overlay `overrides` onto the registry
    pub fn merge_in(&mut self, overrides: impl IntoIterator<Item = (Component, StyleIntent)>) {
        for (component, intent) in overrides {
            let merged = match self.map.get(&component) {
                Some(existing) => existing.merge(&intent),
                None => intent,
            };
            self.map.insert(component, merged);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Root configuration accepted at application mount
#[derive(Debug, Default)]
pub struct UiConfig {
    pub initial_mode: ColorMode,
    /// Per-mode palette overrides
    pub custom_colors: ColorOverrides,
    /// Initial component default props
    pub component_defaults: Vec<(Component, StyleIntent)>,
    pub font_family: FontFamilyTokens,
    pub viewport: Viewport,
    /// Full theme config document, when built from TOML; supersedes
    /// `custom_colors` and `font_family`
    pub theme_config: Option<ThemeConfig>,
}

impl UiConfig {
    /// Build from a declarative theme config document
    pub fn from_theme_config(config: ThemeConfig) -> Self {
        UiConfig {
            initial_mode: config.initial_mode(),
            theme_config: Some(config),
            ..Default::default()
        }
    }
}

/// The shared context every resolution reads
pub struct UiContext {
    theme: ThemeHandle,
    defaults: RwLock<ComponentDefaults>,
    viewport: RwLock<Viewport>,
}

impl UiContext {
    pub fn new(config: UiConfig) -> Self {
        let bundle = match config.theme_config {
            Some(theme_config) => theme_config.into_bundle(),
            None => ThemeBundle::new(config.custom_colors, config.font_family),
        };

        let mut defaults = ComponentDefaults::default();
        defaults.merge_in(config.component_defaults);

        Self {
            theme: ThemeHandle::new(bundle, config.initial_mode),
            defaults: RwLock::new(defaults),
            viewport: RwLock::new(config.viewport),
        }
    }

    // ========== Theme ==========

    pub fn theme(&self) -> &ThemeHandle {
        &self.theme
    }

    pub fn color_mode(&self) -> ColorMode {
        self.theme.mode()
    }

    /// Switch the session-wide color mode; consumers re-resolve on their
    /// next pass (already-rendered output is unaffected)
    pub fn set_color_mode(&self, mode: ColorMode) {
        self.theme.set_mode(mode);
    }

    pub fn toggle_color_mode(&self) {
        self.theme.toggle_mode();
    }

    /// Register a listener fired after theme changes
    pub fn on_change(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.theme.on_change(listener);
    }

    // ========== Component defaults ==========

    /// Merge component default overrides, key by key, last writer wins.
    ///
    /// Only subsequent resolutions observe the change.
    pub fn configure_component_defaults(
        &self,
        overrides: impl IntoIterator<Item = (Component, StyleIntent)>,
    ) {
        let mut defaults = self.defaults.write().unwrap();
        defaults.merge_in(overrides);
        tracing::debug!("component defaults configured");
    }

    /// Snapshot of one component's defaults
    pub fn component_defaults(&self, component: Component) -> Option<StyleIntent> {
        self.defaults.read().unwrap().get(component).cloned()
    }

    // ========== Viewport ==========

    pub fn viewport(&self) -> Viewport {
        *self.viewport.read().unwrap()
    }

    /// Push new host dimensions/insets into the context
    pub fn set_viewport(&self, viewport: Viewport) {
        *self.viewport.write().unwrap() = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpha_core::EdgeInsets;

    #[test]
    fn test_configure_twice_last_writer_wins_per_key() {
        let ctx = UiContext::new(UiConfig::default());

        ctx.configure_component_defaults([(
            Component::Button,
            StyleIntent::new().ph(16.0).br(10.0),
        )]);
        ctx.configure_component_defaults([(Component::Button, StyleIntent::new().ph(24.0))]);

        let defaults = ctx.component_defaults(Component::Button).unwrap();
        // Second call wins for the overlapping key
        assert_eq!(defaults.spacing.ph, Some(24.0));
        // Untouched key from the first call persists
        assert_eq!(defaults.border.br, Some(10.0));
    }

    #[test]
    fn test_unconfigured_component_has_no_defaults() {
        let ctx = UiContext::new(UiConfig::default());
        assert!(ctx.component_defaults(Component::Select).is_none());
    }

    #[test]
    fn test_viewport_push() {
        let ctx = UiContext::new(UiConfig::default());
        let next = Viewport::new(414.0, 896.0).with_insets(EdgeInsets::new(47.0, 0.0, 34.0, 0.0));
        ctx.set_viewport(next);
        assert_eq!(ctx.viewport(), next);
    }

    #[test]
    fn test_mode_switch_is_observable() {
        let ctx = UiContext::new(UiConfig::default());
        assert_eq!(ctx.color_mode(), ColorMode::Light);
        ctx.toggle_color_mode();
        assert_eq!(ctx.color_mode(), ColorMode::Dark);
    }
}
