use std::time::{Duration, Instant};

use super::animation::ProgressAnimation;
use super::model::{target_progress, SwitchPhase, SwitchVisualState};

/// Result of advancing the switch by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing was animating.
    Idle,
    Running,
    /// The animation reached its endpoint. `notify` carries the value the
    /// change listener must receive, if the animation came from a tap.
    Finished { notify: Option<bool> },
}

impl FrameOutcome {
    pub fn keeps_ticking(self) -> bool {
        matches!(self, FrameOutcome::Running)
    }

    pub fn notification(self) -> Option<bool> {
        match self {
            FrameOutcome::Finished { notify } => notify,
            FrameOutcome::Idle | FrameOutcome::Running => None,
        }
    }
}

/// What a call to [`SwitchMachine::set_checked`] or [`SwitchMachine::tap`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchTransition {
    pub changed: bool,
    /// Set when a running tap animation was cut short. The listener receives
    /// this value right away, before the new animation starts.
    pub interrupted: Option<bool>,
}

/// Two stable phases (off/on) and one transient phase driven by a linear
/// progress animation. Starting an animation always replaces the previous
/// one; a replaced tap animation reports its end immediately with the
/// current value.
#[derive(Debug)]
pub struct SwitchMachine {
    visual: SwitchVisualState,
    animation: Option<ProgressAnimation>,
    duration: Duration,
}

impl SwitchMachine {
    pub fn new(duration: Duration) -> Self {
        Self {
            visual: SwitchVisualState::default(),
            animation: None,
            duration,
        }
    }

    pub fn checked(&self) -> bool {
        self.visual.checked
    }

    pub fn progress(&self) -> f64 {
        self.visual.progress
    }

    pub fn visual(&self) -> SwitchVisualState {
        self.visual
    }

    pub fn phase(&self) -> SwitchPhase {
        if self.animation.is_some() {
            SwitchPhase::Animating
        } else if self.visual.checked {
            SwitchPhase::On
        } else {
            SwitchPhase::Off
        }
    }

    /// `changed` is `false` when `value` already matches and nothing happened.
    pub fn set_checked(&mut self, value: bool, animate: bool, now: Instant) -> SwitchTransition {
        if self.visual.checked == value {
            return SwitchTransition::default();
        }
        self.visual.checked = value;
        let interrupted = if animate {
            self.start_animation(now, false)
        } else {
            let interrupted = self.cancel_animation();
            self.visual = SwitchVisualState::at_rest(value);
            interrupted
        };
        tracing::debug!(checked = value, animate, ?interrupted, "switch checked state set");
        SwitchTransition {
            changed: true,
            interrupted,
        }
    }

    /// Flips the logical state and animates toward it.
    pub fn tap(&mut self, now: Instant) -> SwitchTransition {
        self.visual.checked = !self.visual.checked;
        let interrupted = self.start_animation(now, true);
        tracing::debug!(
            checked = self.visual.checked,
            from = self.visual.progress,
            ?interrupted,
            "switch tapped"
        );
        SwitchTransition {
            changed: true,
            interrupted,
        }
    }

    pub fn tick(&mut self, now: Instant) -> FrameOutcome {
        let Some(animation) = self.animation else {
            return FrameOutcome::Idle;
        };
        self.visual.progress = animation.value_at(now);
        if !animation.is_finished_at(now) {
            return FrameOutcome::Running;
        }

        self.animation = None;
        debug_assert!(self.visual.is_at_rest());
        let notify = animation.notify_on_end().then_some(self.visual.checked);
        FrameOutcome::Finished { notify }
    }

    /// Drops the running animation. A tap animation reports its end with the
    /// current value.
    fn cancel_animation(&mut self) -> Option<bool> {
        let cancelled = self.animation.take()?;
        tracing::trace!(progress = self.visual.progress, "cancelled running switch animation");
        cancelled.notify_on_end().then_some(self.visual.checked)
    }

    fn start_animation(&mut self, now: Instant, notify_on_end: bool) -> Option<bool> {
        let interrupted = self.cancel_animation();
        let animation = ProgressAnimation::new(
            self.visual.progress,
            target_progress(self.visual.checked),
            now,
            self.duration,
        );
        self.animation = Some(if notify_on_end {
            animation.notifying()
        } else {
            animation
        });
        interrupted
    }
}

impl Default for SwitchMachine {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
