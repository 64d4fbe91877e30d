//! Button with press animation and loading state
//!
//! Press scale runs on a spring; while `loading` or `disabled`, presses
//! are ignored and no click events are emitted.

use alpha_animation::{Spring, SpringConfig};
use alpha_core::fsm::{EventId, StateId, StateMachine};
use alpha_style::{resolve, ColorRef, Component, ResolvedStyle, StyleIntent, UiContext};

use crate::tokens::INPUT_TOKENS;

const IDLE: StateId = 0;
const PRESSED: StateId = 1;

const PRESS: EventId = 1;
const RELEASE: EventId = 2;
const CANCEL: EventId = 3;

/// Scale applied while pressed
const PRESSED_SCALE: f32 = 0.97;

type PressHandler = Box<dyn FnMut() + Send>;

/// Button widget instance
pub struct Button {
    fsm: StateMachine,
    label: String,
    color: ColorRef,
    loading: bool,
    disabled: bool,
    scale_spring: Spring,
    clicked: bool,
    on_press: Option<PressHandler>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        let fsm = StateMachine::builder(IDLE)
            .on(IDLE, PRESS, PRESSED)
            .on(PRESSED, RELEASE, IDLE)
            .on(PRESSED, CANCEL, IDLE)
            .build();

        Self {
            fsm,
            label: label.into(),
            color: ColorRef::Named("primary".into()),
            loading: false,
            disabled: false,
            scale_spring: Spring::new(SpringConfig::snappy(), 1.0),
            clicked: false,
            on_press: None,
        }
    }

    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.color = color.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_press<F: FnMut() + Send + 'static>(mut self, handler: F) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    // ========== State ==========

    /// Swap the loading state; an in-flight press is cancelled
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if loading && self.fsm.is_in(PRESSED) {
            self.fsm.send(CANCEL);
            self.scale_spring.set_target(1.0);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_pressed(&self) -> bool {
        self.fsm.is_in(PRESSED)
    }

    /// Current press scale (animated)
    pub fn scale(&self) -> f32 {
        self.scale_spring.value()
    }

    /// Read and clear the clicked flag
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    // ========== Interaction ==========

    pub fn press(&mut self) {
        if self.disabled || self.loading {
            return;
        }
        if self.fsm.send(PRESS) == PRESSED {
            self.scale_spring.set_target(PRESSED_SCALE);
        }
    }

    /// Release inside the button: emits the click
    pub fn release(&mut self) {
        if !self.fsm.is_in(PRESSED) {
            return;
        }
        self.fsm.send(RELEASE);
        self.scale_spring.set_target(1.0);
        self.clicked = true;
        if let Some(handler) = self.on_press.as_mut() {
            handler();
        }
    }

    /// Release outside the button: no click
    pub fn cancel(&mut self) {
        if self.fsm.is_in(PRESSED) {
            self.fsm.send(CANCEL);
            self.scale_spring.set_target(1.0);
        }
    }

    /// Advance the press animation
    pub fn tick(&mut self, dt_ms: f32) {
        self.scale_spring.step(dt_ms / 1000.0);
    }

    // ========== Styling ==========

    pub fn resolve(&self, ctx: &UiContext) -> ResolvedStyle {
        let tokens = INPUT_TOKENS;
        let mut chrome = StyleIntent::new()
            .color(self.color.clone())
            .br(tokens.control.radius)
            .pv(tokens.text_field.padding_vertical)
            .ph(tokens.text_field.padding_horizontal)
            .fd(alpha_style::FlexIntent::FlexCenter);
        if self.disabled || self.loading {
            chrome = chrome.opacity(tokens.control.disabled_opacity);
        }
        resolve(ctx, Component::Button, &chrome)
    }
}

/// Create a button
pub fn button(label: impl Into<String>) -> Button {
    Button::new(label)
}
