//! Activation state machine.
//!
//! Two states, `inactive` (initial) and `active`, with no terminal state.
//! Both producers - the load-time config read and runtime toggle messages -
//! feed the same two transition methods, so activation logic is never
//! duplicated per trigger.
//!
//! Redundant calls are no-ops and report `Transition::NoChange`; the caller
//! uses the `Activated` edge to emit the single `scriptInjected`
//! announcement, which is how "at most once per activation" is enforced.

use spark_signals::{signal, Signal};

// =============================================================================
// Transition
// =============================================================================

/// Outcome of an activation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Entered `active` from `inactive`.
    Activated,
    /// Entered `inactive` from `active`.
    Deactivated,
    /// Already in the requested state; nothing observable happened.
    NoChange,
}

// =============================================================================
// ActivationController
// =============================================================================

/// Sole owner of the activation state. Every other component reads the
/// state through [`is_active`](Self::is_active) (or the signal) and never
/// mutates it.
#[derive(Clone)]
pub struct ActivationController {
    active: Signal<bool>,
}

impl Default for ActivationController {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationController {
    /// Create a controller in the `inactive` state.
    pub fn new() -> Self {
        Self {
            active: signal(false),
        }
    }

    /// Transition into `active`. Idempotent.
    pub fn activate(&self) -> Transition {
        if self.active.get() {
            return Transition::NoChange;
        }
        self.active.set(true);
        tracing::debug!("element highlighter activated");
        Transition::Activated
    }

    /// Transition into `inactive`. Idempotent.
    pub fn deactivate(&self) -> Transition {
        if !self.active.get() {
            return Transition::NoChange;
        }
        self.active.set(false);
        tracing::debug!("element highlighter deactivated");
        Transition::Deactivated
    }

    /// Apply a boolean toggle (the `toggleEditMode` payload).
    pub fn toggle(&self, is_active: bool) -> Transition {
        if is_active {
            self.activate()
        } else {
            self.deactivate()
        }
    }

    /// Whether highlighting is currently live.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// The underlying signal, for reactive observers.
    pub fn active_signal(&self) -> Signal<bool> {
        self.active.clone()
    }
}

// =============================================================================
// TESTS
// =============================================================================
