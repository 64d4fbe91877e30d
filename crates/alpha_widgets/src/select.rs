//! Select widget
//!
//! A dropdown with a two-state machine: `closed` and `open`. Opening
//! happens on activation; picking an option or dismissing returns to
//! closed. Picking the already-selected option clears the selection
//! (toggle-off) — callers receive an explicit empty-selection event,
//! distinct from "no change".

use alpha_core::fsm::{EventId, StateId, StateMachine};
use alpha_style::{resolve, Component, ResolvedStyle, StyleIntent, UiContext};

use crate::tokens::INPUT_TOKENS;

const CLOSED: StateId = 0;
const OPEN: StateId = 1;

const ACTIVATE: EventId = 1;
const CLOSE: EventId = 2;

/// One selectable option
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Stored value
    pub value: String,
    /// Display label
    pub label: String,
    /// Secondary display line
    pub text: Option<String>,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            text: None,
            disabled: false,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Selection change notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A value was chosen
    Changed(SelectOption),
    /// The selection was cleared (toggle-off or explicit dismiss)
    Cleared,
}

type ChangeHandler = Box<dyn FnMut(SelectionEvent) + Send>;

/// Select widget instance
pub struct Select {
    fsm: StateMachine,
    options: Vec<SelectOption>,
    current: Option<SelectOption>,
    placeholder: Option<String>,
    disabled: bool,
    loading: bool,
    on_change: Option<ChangeHandler>,
}

impl Select {
    pub fn new() -> Self {
        let fsm = StateMachine::builder(CLOSED)
            .on(CLOSED, ACTIVATE, OPEN)
            .on(OPEN, CLOSE, CLOSED)
            .build();

        Self {
            fsm,
            options: Vec::new(),
            current: None,
            placeholder: None,
            disabled: false,
            loading: false,
            on_change: None,
        }
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Preselect a value; silently ignored when absent from the options
    pub fn default_value(mut self, value: &str) -> Self {
        self.current = self.options.iter().find(|o| o.value == value).cloned();
        self
    }

    pub fn on_change<F: FnMut(SelectionEvent) + Send + 'static>(mut self, handler: F) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    // ========== State ==========

    pub fn is_open(&self) -> bool {
        self.fsm.is_in(OPEN)
    }

    pub fn current(&self) -> Option<&SelectOption> {
        self.current.as_ref()
    }

    /// The label shown in the closed control
    pub fn display_label(&self) -> &str {
        match &self.current {
            Some(option) => &option.label,
            None => self.placeholder.as_deref().unwrap_or("Select"),
        }
    }

    fn emit(&mut self, event: SelectionEvent) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(event);
        }
    }

    // ========== Transitions ==========

    /// Activation tap; no-op while disabled or loading
    pub fn activate(&mut self) {
        if self.disabled || self.loading {
            return;
        }
        self.fsm.send(ACTIVATE);
    }

    /// Pick a value from the open dropdown.
    ///
    /// Picking the current value clears the selection and emits
    /// [`SelectionEvent::Cleared`]; any other value is accepted without
    /// validation against the options list.
    pub fn pick(&mut self, value: &str) {
        if !self.fsm.is_in(OPEN) {
            return;
        }

        if self.current.as_ref().is_some_and(|c| c.value == value) {
            self.current = None;
            self.emit(SelectionEvent::Cleared);
        } else {
            let option = self
                .options
                .iter()
                .find(|o| o.value == value)
                .cloned()
                .unwrap_or_else(|| SelectOption::new(value, value));
            self.current = Some(option.clone());
            self.emit(SelectionEvent::Changed(option));
        }

        self.fsm.send(CLOSE);
    }

    /// Explicit dismiss; clears the selection and closes
    pub fn dismiss(&mut self) {
        if !self.fsm.is_in(OPEN) {
            return;
        }
        self.current = None;
        self.emit(SelectionEvent::Cleared);
        self.fsm.send(CLOSE);
    }

    // ========== Styling ==========

    /// Resolve the closed control's chrome
    pub fn resolve_control(&self, ctx: &UiContext) -> ResolvedStyle {
        let tokens = INPUT_TOKENS;
        let mut chrome = StyleIntent::new()
            .br(tokens.control.radius)
            .bw(tokens.control.border_width)
            .bc("border")
            .ph(tokens.select.padding_horizontal)
            .pv(tokens.select.padding_vertical)
            .h(tokens.select.height)
            .gap(tokens.control.gap)
            .fd(alpha_style::FlexIntent::FlexItem);
        if self.disabled {
            chrome = chrome.opacity(tokens.control.disabled_opacity);
        }
        resolve(ctx, Component::Select, &chrome)
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn select_with_log() -> (Select, Arc<Mutex<Vec<SelectionEvent>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_in = log.clone();
        let select = Select::new()
            .option("apple", "Apple")
            .option("banana", "Banana")
            .on_change(move |event| log_in.lock().unwrap().push(event));
        (select, log)
    }

    #[test]
    fn test_activation_opens() {
        let (mut select, _) = select_with_log();
        assert!(!select.is_open());
        select.activate();
        assert!(select.is_open());
    }

    #[test]
    fn test_pick_emits_and_closes() {
        let (mut select, log) = select_with_log();
        select.activate();
        select.pick("apple");

        assert!(!select.is_open());
        assert_eq!(select.current().unwrap().value, "apple");
        assert_eq!(
            *log.lock().unwrap(),
            vec![SelectionEvent::Changed(SelectOption::new("apple", "Apple"))]
        );
    }

    #[test]
    fn test_picking_selected_option_toggles_off() {
        let (mut select, log) = select_with_log();
        select.activate();
        select.pick("apple");
        select.activate();
        select.pick("apple");

        // Cleared, closed, and not a no-op
        assert!(!select.is_open());
        assert_eq!(select.current(), None);
        assert_eq!(log.lock().unwrap().last(), Some(&SelectionEvent::Cleared));
    }

    #[test]
    fn test_dismiss_emits_cleared() {
        let (mut select, log) = select_with_log();
        select.activate();
        select.pick("banana");
        select.activate();
        select.dismiss();

        assert!(!select.is_open());
        assert_eq!(select.current(), None);
        assert_eq!(log.lock().unwrap().last(), Some(&SelectionEvent::Cleared));
    }

    #[test]
    fn test_unknown_value_is_accepted_silently() {
        let (mut select, log) = select_with_log();
        select.activate();
        select.pick("kumquat");

        assert_eq!(select.current().unwrap().value, "kumquat");
        assert!(matches!(
            log.lock().unwrap().last(),
            Some(SelectionEvent::Changed(_))
        ));
    }

    #[test]
    fn test_disabled_and_loading_block_activation() {
        let (select, _) = select_with_log();
        let mut select = select.disabled(true);
        select.activate();
        assert!(!select.is_open());

        let (select, _) = select_with_log();
        let mut select = select.loading(true);
        select.activate();
        assert!(!select.is_open());
    }

    #[test]
    fn test_pick_while_closed_is_ignored() {
        let (mut select, log) = select_with_log();
        select.pick("apple");
        assert_eq!(select.current(), None);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_default_value_requires_known_option() {
        let select = Select::new()
            .option("a", "A")
            .default_value("a");
        assert_eq!(select.current().unwrap().value, "a");

        let select = Select::new().option("a", "A").default_value("zzz");
        assert_eq!(select.current(), None);
    }
}
