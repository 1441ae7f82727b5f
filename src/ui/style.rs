use std::time::Duration;

/// Compile-time layout tokens — not user-overridable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub spacing_12: i32,
    pub spacing_24: i32,
    pub window_default_width: i32,
    pub window_default_height: i32,
    pub switch_width: i32,
    pub switch_height: i32,
    /// Gap between the track edge and the sun/moon handle.
    pub handle_padding: i32,
    pub border_width: u16,
    pub frame_interval_ms: u64,
}

impl StyleTokens {
    /// Handle is a square filling the track height minus the padding on both sides.
    pub const fn handle_size(self, track_height: i32) -> i32 {
        track_height - self.handle_padding * 2
    }

    pub const fn frame_interval(self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_12: 12,
    spacing_24: 24,
    window_default_width: 360,
    window_default_height: 640,
    switch_width: 200,
    switch_height: 80,
    handle_padding: 10,
    border_width: 3,
    frame_interval_ms: 16,
};
