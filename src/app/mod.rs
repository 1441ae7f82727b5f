use std::rc::Rc;

use crate::config::{load_app_config, AppConfig};
use crate::error::{AppError, AppResult};
use crate::preferences::JsonPreferenceStore;
use crate::theme::{apply_presentation_mode, default_color_tokens, ThemeMode};
use crate::ui::{NightModeSwitch, StyleTokens, LAYOUT_TOKENS};
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Box as GtkBox, HeaderBar, Label, Orientation};

mod controller;
mod runtime_css;

use self::controller::*;
use self::runtime_css::*;

const APP_ID: &str = "io.github.nightswitch";
const WINDOW_TITLE: &str = "Night Mode";

/// Everything a (re)built screen needs. The window is held weakly so the
/// switch listener does not keep the toplevel alive.
struct ScreenRuntime {
    window: gtk4::glib::WeakRef<ApplicationWindow>,
    controller: ScreenController<JsonPreferenceStore>,
    runtime_css: RuntimeCss,
    style_tokens: StyleTokens,
    config: AppConfig,
}

fn mode_caption(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Day",
        ThemeMode::Dark => "Night",
    }
}

fn apply_mode_styling(runtime: &ScreenRuntime, mode: ThemeMode) {
    apply_presentation_mode(mode);
    runtime
        .runtime_css
        .install(runtime.style_tokens, &default_color_tokens(mode));
}

/// Builds the screen from the stored preference, replacing any previous content.
fn build_screen(runtime: &Rc<ScreenRuntime>) {
    let Some(window) = runtime.window.upgrade() else {
        return;
    };
    let tokens = runtime.style_tokens;

    let night_mode = runtime.controller.initial_night_mode();
    let mode = ThemeMode::from_night_mode(night_mode);

    let switch = NightModeSwitch::new(tokens, runtime.config.animation_duration());
    switch.set_checked(night_mode, false);
    apply_mode_styling(runtime, mode);

    let caption = Label::new(Some(mode_caption(mode)));
    caption.add_css_class("mode-caption");

    let screen = GtkBox::new(Orientation::Vertical, tokens.spacing_12);
    screen.add_css_class("nightswitch-screen");
    screen.set_halign(gtk4::Align::Center);
    screen.set_valign(gtk4::Align::Center);
    screen.append(switch.widget());
    screen.append(&caption);

    {
        let runtime = runtime.clone();
        let caption = caption.clone();
        switch.set_on_checked_change_listener(move |is_night_mode| {
            let change = runtime
                .controller
                .handle_checked_change(is_night_mode, |mode| apply_mode_styling(&runtime, mode));
            caption.set_label(mode_caption(change.mode));
            if change.recreate && runtime.config.rebuild_on_change() {
                tracing::info!(mode = ?change.mode, "rebuilding screen after mode change");
                build_screen(&runtime);
            }
        });
    }

    window.set_child(Some(&screen));
    tracing::debug!(?mode, "screen built");
}

fn gtk_launch_args() -> Vec<String> {
    std::env::args().take(1).collect()
}

pub struct App {
    config: AppConfig,
    style_tokens: StyleTokens,
}

impl App {
    pub fn new() -> Self {
        Self {
            config: load_app_config(),
            style_tokens: LAYOUT_TOKENS,
        }
    }

    pub fn start(&mut self) -> AppResult<()> {
        let store = JsonPreferenceStore::open_default();
        tracing::info!(path = ?store.path(), "using preference store");
        tracing::info!(
            animation_ms = self.config.animation_duration().as_millis() as u64,
            rebuild_on_change = self.config.rebuild_on_change(),
            "loaded app config"
        );

        let controller = Rc::new(std::cell::RefCell::new(Some(ScreenController::new(store))));
        let config = self.config.clone();
        let style_tokens = self.style_tokens;

        tracing::info!("starting gtk runtime");
        let application = Application::new(
            Some(APP_ID),
            gtk4::gio::ApplicationFlags::NON_UNIQUE,
        );

        application.connect_activate(move |app| {
            let Some(controller) = controller.borrow_mut().take() else {
                tracing::debug!("ignoring duplicate gtk activate signal");
                return;
            };

            let window = ApplicationWindow::new(app);
            window.add_css_class("nightswitch-root");
            window.set_title(Some(WINDOW_TITLE));
            window.set_default_size(
                style_tokens.window_default_width,
                style_tokens.window_default_height,
            );
            window.set_titlebar(Some(&HeaderBar::new()));

            let runtime = Rc::new(ScreenRuntime {
                window: window.downgrade(),
                controller,
                runtime_css: RuntimeCss::default(),
                style_tokens,
                config: config.clone(),
            });
            build_screen(&runtime);

            tracing::info!("presenting night mode window");
            window.present();
        });

        // Pass only argv[0] so GTK does not try to parse anything else.
        let exit_code = application.run_with_args(&gtk_launch_args());
        if exit_code != gtk4::glib::ExitCode::SUCCESS {
            return Err(AppError::GtkRuntime { exit_code });
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_caption_names_both_modes() {
        assert_eq!(mode_caption(ThemeMode::Light), "Day");
        assert_eq!(mode_caption(ThemeMode::Dark), "Night");
    }
}
