//! Swipeable bottom sheet
//!
//! Four-state machine: `closed -> opening -> open -> closing -> closed`.
//! The `closing` state is entered on backdrop tap, close-button tap, or a
//! qualifying downward drag, and completes to `closed` only when the exit
//! animation finishes — callers are not notified of closure before the
//! animation settles, and no state is ever skipped.
//!
//! All animation starts go through [`BottomSheet::play`], which stops
//! whatever was in flight first so two timelines never drive the same
//! value.

use alpha_animation::{Easing, Spring, SpringConfig, Timeline, TrackId};
use alpha_core::fsm::{EventId, StateId, StateMachine};
use alpha_style::{resolve, Component, ResolvedStyle, StyleIntent, UiContext};

/// Sheet machine states
pub mod sheet_states {
    pub const CLOSED: u32 = 0;
    pub const OPENING: u32 = 1;
    pub const OPEN: u32 = 2;
    pub const CLOSING: u32 = 3;
}

const ACTIVATE: EventId = 1;
const SETTLE: EventId = 2;
const DISMISS: EventId = 3;

/// Drag distance past which a release closes the sheet
const DRAG_CLOSE_DISTANCE: f32 = 80.0;
/// Release velocity past which a release closes regardless of distance
const DRAG_CLOSE_VELOCITY: f32 = 300.0;
/// Drag distance over which the backdrop fades to half strength
const BACKDROP_FADE_DISTANCE: f32 = 200.0;

const ENTER_DURATION_MS: f32 = 300.0;
const EXIT_DURATION_MS: f32 = 250.0;

type CloseHandler = Box<dyn FnMut() + Send>;

/// Bottom sheet widget instance
pub struct BottomSheet {
    fsm: StateMachine,
    /// Height the sheet travels when entering/exiting
    sheet_height: f32,
    /// Enter/exit translation driven by the timeline
    base_translate: f32,
    /// Extra translation from an in-progress drag
    drag_offset: f32,
    backdrop: f32,
    timeline: Timeline,
    translate_track: Option<TrackId>,
    backdrop_track: Option<TrackId>,
    snap_back: Option<Spring>,
    on_close: Option<CloseHandler>,
}

impl BottomSheet {
    pub fn new(sheet_height: f32) -> Self {
        let fsm = StateMachine::builder(sheet_states::CLOSED)
            .on(sheet_states::CLOSED, ACTIVATE, sheet_states::OPENING)
            .on(sheet_states::OPENING, SETTLE, sheet_states::OPEN)
            .on(sheet_states::OPENING, DISMISS, sheet_states::CLOSING)
            .on(sheet_states::OPEN, DISMISS, sheet_states::CLOSING)
            .on(sheet_states::CLOSING, SETTLE, sheet_states::CLOSED)
            .build();

        Self {
            fsm,
            sheet_height,
            base_translate: sheet_height,
            drag_offset: 0.0,
            backdrop: 0.0,
            timeline: Timeline::new(),
            translate_track: None,
            backdrop_track: None,
            snap_back: None,
            on_close: None,
        }
    }

    /// Callback fired once the exit animation has settled
    pub fn on_close<F: FnMut() + Send + 'static>(mut self, handler: F) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    // ========== State ==========

    pub fn state(&self) -> StateId {
        self.fsm.current()
    }

    pub fn is_open(&self) -> bool {
        self.fsm.is_in(sheet_states::OPEN)
    }

    pub fn is_visible(&self) -> bool {
        !self.fsm.is_in(sheet_states::CLOSED)
    }

    /// Current sheet translation (0 = fully presented)
    pub fn translation(&self) -> f32 {
        self.base_translate + self.drag_offset
    }

    /// Current backdrop opacity
    pub fn backdrop_opacity(&self) -> f32 {
        self.backdrop
    }

    // ========== Animation plumbing ==========

    /// Stop whatever is in flight, then start one enter/exit run.
    ///
    /// The single entry point for sheet animations: previous timelines and
    /// springs are cancelled before the next run starts.
    fn play(
        &mut self,
        translate_from: f32,
        translate_to: f32,
        backdrop_to: f32,
        duration_ms: f32,
    ) {
        self.timeline.stop();
        self.timeline.clear();
        self.snap_back = None;

        self.translate_track = Some(self.timeline.track(
            duration_ms,
            translate_from,
            translate_to,
            Easing::EaseOutCubic,
        ));
        self.backdrop_track =
            Some(self.timeline.track(duration_ms, self.backdrop, backdrop_to, Easing::Linear));
        self.timeline.start();
    }

    /// Advance animations; returns true while anything is still moving.
    ///
    /// Drives the opening/closing settle transitions; the host calls this
    /// from its animation clock.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if let Some(spring) = self.snap_back.as_mut() {
            spring.step(dt_ms / 1000.0);
            self.drag_offset = spring.value();
            self.backdrop = drag_backdrop(self.drag_offset);
            if spring.is_settled() {
                self.drag_offset = 0.0;
                self.backdrop = 1.0;
                self.snap_back = None;
            }
            return self.snap_back.is_some();
        }

        let playing = self.timeline.tick(dt_ms);
        if let Some(track) = self.translate_track {
            if let Some(value) = self.timeline.value(track) {
                self.base_translate = value;
            }
        }
        if let Some(track) = self.backdrop_track {
            if let Some(value) = self.timeline.value(track) {
                self.backdrop = value;
            }
        }

        if self.timeline.is_finished() {
            match self.fsm.current() {
                sheet_states::OPENING => {
                    self.fsm.send(SETTLE);
                }
                sheet_states::CLOSING => {
                    self.fsm.send(SETTLE);
                    self.timeline.clear();
                    if let Some(handler) = self.on_close.as_mut() {
                        handler();
                    }
                }
                _ => {}
            }
        }

        playing
    }

    // ========== Transitions ==========

    /// Present the sheet
    pub fn open(&mut self) {
        if !self.fsm.can_send(ACTIVATE) {
            return;
        }
        tracing::debug!("sheet opening");
        self.fsm.send(ACTIVATE);
        self.drag_offset = 0.0;
        self.play(self.sheet_height, 0.0, 1.0, ENTER_DURATION_MS);
    }

    /// Begin dismissal (backdrop tap, close button, or qualifying drag).
    ///
    /// Valid from `open` and mid-`opening`; the exit run starts from the
    /// current position.
    pub fn close(&mut self) {
        if !self.fsm.can_send(DISMISS) {
            return;
        }
        tracing::debug!(from = self.translation(), "sheet closing");
        self.fsm.send(DISMISS);

        let from = self.translation();
        self.drag_offset = 0.0;
        self.snap_back = None;
        self.play(from, self.sheet_height, 0.0, EXIT_DURATION_MS);
    }

    // ========== Dragging ==========

    /// Track a drag; only downward movement moves the sheet, and the
    /// backdrop fades with distance
    pub fn drag_update(&mut self, translation_y: f32) {
        if !self.fsm.is_in(sheet_states::OPEN) {
            return;
        }
        self.snap_back = None;
        self.drag_offset = translation_y.max(0.0);
        self.backdrop = drag_backdrop(self.drag_offset);
    }

    /// Release a drag: close past the distance or velocity threshold,
    /// otherwise snap back to open
    pub fn drag_release(&mut self, translation_y: f32, velocity_y: f32) {
        if !self.fsm.is_in(sheet_states::OPEN) {
            return;
        }
        let translation_y = translation_y.max(0.0);
        self.drag_offset = translation_y;

        if translation_y > DRAG_CLOSE_DISTANCE || velocity_y > DRAG_CLOSE_VELOCITY {
            self.close();
        } else {
            let mut spring = Spring::new(
                SpringConfig::from_tension_friction(100.0, 8.0),
                translation_y,
            );
            spring.set_target(0.0);
            self.snap_back = Some(spring);
        }
    }

    // ========== Styling ==========

    /// Resolve the sheet surface chrome (rounded top corners on the
    /// background color)
    pub fn resolve_surface(&self, ctx: &UiContext) -> ResolvedStyle {
        let chrome = StyleIntent::new()
            .color("background")
            .btlr(22.0)
            .btrr(22.0)
            .absolute()
            .inset_x(0.0)
            .bottom(0.0);
        resolve(ctx, Component::Sheet, &chrome)
    }

    /// Resolve the backdrop scrim
    pub fn resolve_backdrop(&self, ctx: &UiContext) -> ResolvedStyle {
        let chrome = StyleIntent::new()
            .color("modal")
            .inset(0.0)
            .opacity(self.backdrop);
        resolve(ctx, Component::Sheet, &chrome)
    }
}

/// Backdrop opacity for a given drag distance
fn drag_backdrop(translation_y: f32) -> f32 {
    let ratio = (translation_y / BACKDROP_FADE_DISTANCE).min(1.0);
    1.0 - ratio * 0.5
}
