pub mod night_mode_switch;
pub mod style;
pub mod switch_render;

pub use crate::theme::{default_color_tokens, ColorTokens};
pub use night_mode_switch::NightModeSwitch;
pub use style::{StyleTokens, LAYOUT_TOKENS};
