//! Date field
//!
//! Open/closed picker state plus the current selection. The native picker
//! surface belongs to the host; this widget owns only the interaction
//! state and the display formatting.

use alpha_core::fsm::{EventId, StateId, StateMachine};
use alpha_style::{resolve, Component, ResolvedStyle, StyleIntent, UiContext};

use crate::tokens::INPUT_TOKENS;

const CLOSED: StateId = 0;
const OPEN: StateId = 1;

const ACTIVATE: EventId = 1;
const CLOSE: EventId = 2;

/// A calendar date, unvalidated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateValue {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl DateValue {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    fn month_name(&self) -> &'static str {
        match self.month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            _ => "Dec",
        }
    }

    /// Display per the date token format (`MMM D, YYYY`)
    pub fn display(&self) -> String {
        format!("{} {}, {}", self.month_name(), self.day, self.year)
    }
}

type PickHandler = Box<dyn FnMut(DateValue) + Send>;

/// Date field instance
pub struct DateField {
    fsm: StateMachine,
    value: Option<DateValue>,
    placeholder: Option<String>,
    disabled: bool,
    on_pick: Option<PickHandler>,
}

impl DateField {
    pub fn new() -> Self {
        let fsm = StateMachine::builder(CLOSED)
            .on(CLOSED, ACTIVATE, OPEN)
            .on(OPEN, CLOSE, CLOSED)
            .build();

        Self {
            fsm,
            value: None,
            placeholder: None,
            disabled: false,
            on_pick: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn default_value(mut self, value: DateValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn on_pick<F: FnMut(DateValue) + Send + 'static>(mut self, handler: F) -> Self {
        self.on_pick = Some(Box::new(handler));
        self
    }

    // ========== State ==========

    pub fn is_open(&self) -> bool {
        self.fsm.is_in(OPEN)
    }

    pub fn value(&self) -> Option<DateValue> {
        self.value
    }

    /// The label shown in the closed control
    pub fn display_label(&self) -> String {
        match &self.value {
            Some(value) => value.display(),
            None => self
                .placeholder
                .clone()
                .unwrap_or_else(|| INPUT_TOKENS.date.date_format.to_string()),
        }
    }

    // ========== Transitions ==========

    pub fn activate(&mut self) {
        if self.disabled {
            return;
        }
        self.fsm.send(ACTIVATE);
    }

    /// Confirm a date; accepted without validation, emitted, and closed
    pub fn confirm(&mut self, value: DateValue) {
        if !self.fsm.is_in(OPEN) {
            return;
        }
        self.value = Some(value);
        if let Some(handler) = self.on_pick.as_mut() {
            handler(value);
        }
        self.fsm.send(CLOSE);
    }

    /// Dismiss without changing the selection
    pub fn dismiss(&mut self) {
        self.fsm.send(CLOSE);
    }

    // ========== Styling ==========

    pub fn resolve_control(&self, ctx: &UiContext) -> ResolvedStyle {
        let tokens = INPUT_TOKENS;
        let mut chrome = StyleIntent::new()
            .br(tokens.control.radius)
            .bw(tokens.control.border_width)
            .bc("border")
            .ph(tokens.date.padding_horizontal)
            .pv(tokens.date.padding_vertical)
            .fd(alpha_style::FlexIntent::FlexBetween);
        if self.disabled {
            chrome = chrome.opacity(tokens.control.disabled_opacity);
        }
        resolve(ctx, Component::DateField, &chrome)
    }
}

impl Default for DateField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_display_format() {
        assert_eq!(DateValue::new(2024, 3, 9).display(), "Mar 9, 2024");
        assert_eq!(DateValue::new(1999, 12, 31).display(), "Dec 31, 1999");
    }

    #[test]
    fn test_confirm_emits_and_closes() {
        let picked = Arc::new(Mutex::new(None));
        let picked_in = picked.clone();

        let mut field = DateField::new().on_pick(move |value| {
            *picked_in.lock().unwrap() = Some(value);
        });

        field.activate();
        assert!(field.is_open());

        field.confirm(DateValue::new(2024, 6, 1));
        assert!(!field.is_open());
        assert_eq!(field.value(), Some(DateValue::new(2024, 6, 1)));
        assert_eq!(*picked.lock().unwrap(), Some(DateValue::new(2024, 6, 1)));
    }

    #[test]
    fn test_dismiss_keeps_selection() {
        let mut field = DateField::new().default_value(DateValue::new(2020, 1, 1));
        field.activate();
        field.dismiss();
        assert!(!field.is_open());
        assert_eq!(field.value(), Some(DateValue::new(2020, 1, 1)));
    }

    #[test]
    fn test_invalid_dates_are_accepted_silently() {
        let mut field = DateField::new();
        field.activate();
        field.confirm(DateValue::new(2024, 2, 31));
        assert_eq!(field.value(), Some(DateValue::new(2024, 2, 31)));
    }

    #[test]
    fn test_disabled_blocks_activation() {
        let mut field = DateField::new().disabled(true);
        field.activate();
        assert!(!field.is_open());
    }
}
