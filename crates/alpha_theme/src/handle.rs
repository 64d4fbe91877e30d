//! Mutable theme state
//!
//! `ThemeHandle` holds the active theme variant behind locks so every
//! consumer reads consistent tokens during a render pass. Mode switches
//! replace the palette wholesale and notify registered listeners (push-based
//! invalidation; consumers re-resolve on the next pass, they never poll).
//!
//! The handle is an owned value passed by reference (usually inside an
//! `Arc`) rather than a process-wide singleton, so resolution order stays
//! explicit and testable.

use std::sync::{Mutex, RwLock};

use alpha_core::Color;

use crate::theme::{ColorMode, Theme, ThemeBundle};
use crate::tokens::{ColorToken, ColorTokens, FontFamilyTokens, FontWeight};

/// Listener invoked after theme changes
type ChangeListener = Box<dyn Fn() + Send + Sync>;

/// The active theme with interior mutability
pub struct ThemeHandle {
    bundle: ThemeBundle,
    mode: RwLock<ColorMode>,
    colors: RwLock<ColorTokens>,
    fonts: RwLock<FontFamilyTokens>,
    listeners: Mutex<Vec<ChangeListener>>,
}

impl ThemeHandle {
    pub fn new(bundle: ThemeBundle, mode: ColorMode) -> Self {
        let theme = bundle.for_mode(mode);
        let colors = theme.colors().clone();
        let fonts = theme.fonts().clone();
        Self {
            bundle,
            mode: RwLock::new(mode),
            colors: RwLock::new(colors),
            fonts: RwLock::new(fonts),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Register a listener fired after every theme change
    pub fn on_change(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.listeners.lock().unwrap().push(Box::new(listener));
    }

    fn notify(&self) {
        for listener in self.listeners.lock().unwrap().iter() {
            listener();
        }
    }

    // ========== Color Mode ==========

    pub fn mode(&self) -> ColorMode {
        *self.mode.read().unwrap()
    }

    /// Switch color mode, replacing the palette wholesale.
    ///
    /// Every consumer observes the new palette on its next resolution;
    /// already-resolved styles are unaffected.
    pub fn set_mode(&self, mode: ColorMode) {
        {
            let mut current = self.mode.write().unwrap();
            if *current == mode {
                return;
            }
            tracing::debug!(from = ?*current, to = ?mode, "theme mode switch");
            *current = mode;

            let theme = self.bundle.for_mode(mode);
            *self.colors.write().unwrap() = theme.colors().clone();
            *self.fonts.write().unwrap() = theme.fonts().clone();
        }
        self.notify();
    }

    pub fn toggle_mode(&self) {
        self.set_mode(self.mode().toggle());
    }

    // ========== Token Access ==========

    /// Get a color token value from the active palette
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.read().unwrap().get(token)
    }

    /// Resolve a color string: palette token, else literal, else nothing
    pub fn resolve_color(&self, name: &str) -> Option<Color> {
        self.colors.read().unwrap().resolve(name)
    }

    /// Snapshot of the active palette
    pub fn colors(&self) -> ColorTokens {
        self.colors.read().unwrap().clone()
    }

    /// Resolve the font family for a weight
    pub fn font_family(&self, weight: FontWeight) -> String {
        self.fonts.read().unwrap().family(weight)
    }

    /// Snapshot of the active theme variant
    pub fn theme(&self) -> Theme {
        let mode = self.mode();
        Theme::new(
            mode,
            self.colors.read().unwrap().clone(),
            self.fonts.read().unwrap().clone(),
        )
    }
}

impl Default for ThemeHandle {
    fn default() -> Self {
        Self::new(ThemeBundle::default(), ColorMode::Light)
    }
}
