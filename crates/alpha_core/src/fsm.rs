//! Widget interaction state machines
//!
//! Flat state machines backing composite widget interaction states
//! (select open/closed, sheet open/opening/closing, button press states).
//! Each widget instance owns its machine exclusively; machines are created
//! on mount and discarded on unmount, never shared.
//!
//! Supports guarded transitions, transition actions, and entry/exit
//! callbacks per state.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// A guard function that must pass for a transition to fire
pub type Guard = Box<dyn Fn() -> bool + Send>;

/// An action executed while transitioning
pub type Action = Box<dyn FnMut() + Send>;

/// A single transition edge
pub struct Transition {
    pub from: StateId,
    pub event: EventId,
    pub to: StateId,
    guard: Option<Guard>,
    actions: SmallVec<[Action; 2]>,
}

impl Transition {
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from,
            event,
            to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    /// Require a guard condition for this transition
    pub fn with_guard<F: Fn() -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Run an action when this transition fires
    pub fn with_action<F: FnMut() + Send + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    fn guard_passes(&self) -> bool {
        self.guard.as_ref().map(|g| g()).unwrap_or(true)
    }
}

/// Builder for a state machine
pub struct StateMachineBuilder {
    initial: StateId,
    transitions: Vec<Transition>,
    on_enter: FxHashMap<StateId, Vec<Action>>,
    on_exit: FxHashMap<StateId, Vec<Action>>,
}

impl StateMachineBuilder {
    pub fn new(initial: StateId) -> Self {
        Self {
            initial,
            transitions: Vec::new(),
            on_enter: FxHashMap::default(),
            on_exit: FxHashMap::default(),
        }
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add a full transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Run an action whenever `state` is entered
    pub fn on_enter<F: FnMut() + Send + 'static>(mut self, state: StateId, action: F) -> Self {
        self.on_enter.entry(state).or_default().push(Box::new(action));
        self
    }

    /// Run an action whenever `state` is exited
    pub fn on_exit<F: FnMut() + Send + 'static>(mut self, state: StateId, action: F) -> Self {
        self.on_exit.entry(state).or_default().push(Box::new(action));
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            current: self.initial,
            transitions: self.transitions,
            on_enter: self.on_enter,
            on_exit: self.on_exit,
            history: Vec::new(),
        }
    }
}

/// A flat state machine instance
pub struct StateMachine {
    current: StateId,
    transitions: Vec<Transition>,
    on_enter: FxHashMap<StateId, Vec<Action>>,
    on_exit: FxHashMap<StateId, Vec<Action>>,
    history: Vec<(StateId, EventId, StateId)>,
}

impl StateMachine {
    pub fn builder(initial: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial)
    }

    pub fn current(&self) -> StateId {
        self.current
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.current == state
    }

    /// Transition history (for debugging)
    pub fn history(&self) -> &[(StateId, EventId, StateId)] {
        &self.history
    }

    /// Whether `event` would trigger a transition from the current state
    pub fn can_send(&self, event: EventId) -> bool {
        self.transitions
            .iter()
            .any(|t| t.from == self.current && t.event == event && t.guard_passes())
    }

    /// Send an event; returns the (possibly unchanged) current state.
    ///
    /// The first matching transition whose guard passes fires. Exit
    /// callbacks run before transition actions, entry callbacks after.
    pub fn send(&mut self, event: EventId) -> StateId {
        let from = self.current;

        let Some(idx) = self
            .transitions
            .iter()
            .position(|t| t.from == from && t.event == event && t.guard_passes())
        else {
            return from;
        };

        let to = self.transitions[idx].to;
        tracing::trace!(from, event, to, "fsm transition");

        if let Some(callbacks) = self.on_exit.get_mut(&from) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        for action in self.transitions[idx].actions.iter_mut() {
            action();
        }

        self.current = to;
        self.history.push((from, event, to));

        if let Some(callbacks) = self.on_enter.get_mut(&to) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const CLOSED: StateId = 0;
    const OPEN: StateId = 1;

    const ACTIVATE: EventId = 1;
    const DISMISS: EventId = 2;

    fn open_close_machine() -> StateMachine {
        StateMachine::builder(CLOSED)
            .on(CLOSED, ACTIVATE, OPEN)
            .on(OPEN, DISMISS, CLOSED)
            .build()
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = open_close_machine();
        assert_eq!(fsm.current(), CLOSED);

        fsm.send(ACTIVATE);
        assert_eq!(fsm.current(), OPEN);

        fsm.send(DISMISS);
        assert_eq!(fsm.current(), CLOSED);
    }

    #[test]
    fn test_unknown_event_is_ignored() {
        let mut fsm = open_close_machine();
        fsm.send(DISMISS);
        assert_eq!(fsm.current(), CLOSED);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_can_send() {
        let fsm = open_close_machine();
        assert!(fsm.can_send(ACTIVATE));
        assert!(!fsm.can_send(DISMISS));
    }

    #[test]
    fn test_guard_blocks_transition() {
        let enabled = Arc::new(Mutex::new(false));
        let enabled_guard = enabled.clone();

        let mut fsm = StateMachine::builder(CLOSED)
            .transition(
                Transition::new(CLOSED, ACTIVATE, OPEN)
                    .with_guard(move || *enabled_guard.lock().unwrap()),
            )
            .build();

        fsm.send(ACTIVATE);
        assert_eq!(fsm.current(), CLOSED);

        *enabled.lock().unwrap() = true;
        fsm.send(ACTIVATE);
        assert_eq!(fsm.current(), OPEN);
    }

    #[test]
    fn test_entry_exit_and_action_order() {
        let log = Arc::new(Mutex::new(Vec::new()));

        let exit_log = log.clone();
        let action_log = log.clone();
        let enter_log = log.clone();

        let mut fsm = StateMachine::builder(CLOSED)
            .transition(
                Transition::new(CLOSED, ACTIVATE, OPEN)
                    .with_action(move || action_log.lock().unwrap().push("action")),
            )
            .on_exit(CLOSED, move || exit_log.lock().unwrap().push("exit"))
            .on_enter(OPEN, move || enter_log.lock().unwrap().push("enter"))
            .build();

        fsm.send(ACTIVATE);
        assert_eq!(*log.lock().unwrap(), vec!["exit", "action", "enter"]);
    }

    #[test]
    fn test_history_records_transitions() {
        let mut fsm = open_close_machine();
        fsm.send(ACTIVATE);
        fsm.send(DISMISS);

        assert_eq!(
            fsm.history(),
            &[(CLOSED, ACTIVATE, OPEN), (OPEN, DISMISS, CLOSED)]
        );
    }
}
