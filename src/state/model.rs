#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchPhase {
    #[default]
    Off,
    On,
    Animating,
}

/// Logical state plus the animation phase that drives every render interpolation.
///
/// `progress` is 0.0 for the light sky and 1.0 for the night sky. At rest it
/// always equals the endpoint selected by `checked`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwitchVisualState {
    pub checked: bool,
    pub progress: f64,
}

impl SwitchVisualState {
    pub const fn at_rest(checked: bool) -> Self {
        Self {
            checked,
            progress: target_progress(checked),
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.progress == target_progress(self.checked)
    }
}

pub const fn target_progress(checked: bool) -> f64 {
    if checked {
        1.0
    } else {
        0.0
    }
}
