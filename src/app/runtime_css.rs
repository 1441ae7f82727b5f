use std::cell::RefCell;

use crate::ui::{ColorTokens, StyleTokens};
use gtk4::CssProvider;

fn runtime_css(tokens: StyleTokens, colors: &ColorTokens) -> String {
    format!(
        "
window.nightswitch-root {{
  background: {window_background};
  color: {text_color};
}}
window.nightswitch-root headerbar {{
  background: {primary};
  color: #FFFFFF;
  border-bottom: 1px solid {border_color};
  box-shadow: none;
}}
.nightswitch-screen {{
  padding: {spacing_24}px;
}}
.nightswitch-screen label.mode-caption {{
  color: {text_color};
  font-size: 15px;
  font-weight: 500;
}}
",
        window_background = colors.window_background,
        primary = colors.primary,
        text_color = colors.text_color,
        border_color = colors.border_color,
        spacing_24 = tokens.spacing_24,
    )
}

/// Holds the currently installed provider so a rebuild swaps it instead of stacking.
#[derive(Default)]
pub(super) struct RuntimeCss {
    provider: RefCell<Option<CssProvider>>,
}

impl RuntimeCss {
    pub(super) fn install(&self, tokens: StyleTokens, colors: &ColorTokens) {
        let Some(display) = gtk4::gdk::Display::default() else {
            tracing::warn!("no display available; runtime css not installed");
            return;
        };

        let provider = CssProvider::new();
        provider.load_from_data(&runtime_css(tokens, colors));
        if let Some(previous) = self.provider.borrow_mut().replace(provider.clone()) {
            gtk4::style_context_remove_provider_for_display(&display, &previous);
        }
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
