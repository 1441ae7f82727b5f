use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::machine::FrameOutcome;

type CheckedChangeListener = Rc<dyn Fn(bool)>;

/// Single listener slot shared between a switch and its signal closures.
/// Registering a listener replaces the previous one.
#[derive(Clone, Default)]
pub struct CheckedChangeSlot {
    listener: Rc<RefCell<Option<CheckedChangeListener>>>,
}

impl CheckedChangeSlot {
    pub fn replace<F: Fn(bool) + 'static>(&self, listener: F) {
        self.listener.borrow_mut().replace(Rc::new(listener));
    }

    /// Calls the registered listener, returning whether one was present.
    pub fn notify(&self, checked: bool) -> bool {
        // Clone out first; the listener may re-register or drop the owner.
        let listener = self.listener.borrow().clone();
        match listener {
            Some(listener) => {
                listener(checked);
                true
            }
            None => false,
        }
    }
}

/// Tracks whether a frame tick source is installed so at most one runs.
#[derive(Clone, Default)]
pub struct FrameTickGate {
    active: Rc<Cell<bool>>,
}

impl FrameTickGate {
    /// Returns `true` when the caller must install a new tick source.
    pub fn try_start(&self) -> bool {
        !self.active.replace(true)
    }

    /// Consumes one frame's outcome. Returns whether the tick keeps running;
    /// the gate reopens once it stops.
    pub fn on_frame(&self, outcome: FrameOutcome) -> bool {
        let keep_ticking = outcome.keeps_ticking();
        if !keep_ticking {
            self.active.set(false);
        }
        keep_ticking
    }
}
