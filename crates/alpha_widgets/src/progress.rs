//! Progress bar
//!
//! The fill animates toward the target on a short timeline. Retargeting
//! cancels the running fill and starts a new one from the currently
//! displayed value, so two fills never race.

use alpha_animation::{Easing, Timeline, TrackId};
use alpha_style::{resolve, Component, ResolvedStyle, StyleIntent, UiContext};

/// Fill animation duration
const FILL_DURATION_MS: f32 = 200.0;

/// Progress bar instance
pub struct ProgressBar {
    target: f32,
    displayed: f32,
    timeline: Timeline,
    track: Option<TrackId>,
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            target: 0.0,
            displayed: 0.0,
            timeline: Timeline::new(),
            track: None,
        }
    }

    /// Retarget the fill (0.0 - 1.0); cancels any running fill first
    pub fn set_progress(&mut self, target: f32) {
        let target = target.clamp(0.0, 1.0);
        self.target = target;

        self.timeline.stop();
        self.timeline.clear();
        self.track = Some(self.timeline.track(
            FILL_DURATION_MS,
            self.displayed,
            target,
            Easing::EaseOutQuad,
        ));
        self.timeline.start();
    }

    /// Advance the fill; returns true while still animating
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let playing = self.timeline.tick(dt_ms);
        if let Some(track) = self.track {
            if let Some(value) = self.timeline.value(track) {
                self.displayed = value;
            }
        }
        playing
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Currently displayed fill fraction
    pub fn displayed(&self) -> f32 {
        self.displayed
    }

    // ========== Styling ==========

    pub fn resolve_track(&self, ctx: &UiContext) -> ResolvedStyle {
        let chrome = StyleIntent::new().color("progress").br(4.0).h(8.0);
        resolve(ctx, Component::ProgressBar, &chrome)
    }

    pub fn resolve_fill(&self, ctx: &UiContext) -> ResolvedStyle {
        let chrome = StyleIntent::new().color("primary").br(4.0).h(8.0);
        resolve(ctx, Component::ProgressBar, &chrome)
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}
