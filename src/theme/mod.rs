/// The two presentation modes the application can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn from_night_mode(night_mode: bool) -> Self {
        if night_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Colors used by the window chrome around the switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTokens {
    pub window_background: String,
    pub primary: String,
    pub text_color: String,
    pub border_color: String,
}

pub fn default_color_tokens(mode: ThemeMode) -> ColorTokens {
    match mode {
        ThemeMode::Light => ColorTokens {
            window_background: "#F4F7FB".to_string(),
            primary: "#4A90C2".to_string(),
            text_color: "#18181B".to_string(),
            border_color: "rgba(0, 0, 0, 0.08)".to_string(),
        },
        ThemeMode::Dark => ColorTokens {
            window_background: "#0E1024".to_string(),
            primary: "#191970".to_string(),
            text_color: "#F4F4F5".to_string(),
            border_color: "rgba(255, 255, 255, 0.08)".to_string(),
        },
    }
}

/// Pushes `mode` into the process-wide GTK settings so every widget re-themes.
pub fn apply_presentation_mode(mode: ThemeMode) {
    let Some(settings) = gtk4::Settings::default() else {
        tracing::warn!(?mode, "no gtk settings available; presentation mode not applied");
        return;
    };
    #[allow(deprecated)]
    {
        settings.set_gtk_application_prefer_dark_theme(mode.is_dark());
    }
    tracing::info!(?mode, "applied presentation mode");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_mode_flag_selects_dark() {
        assert_eq!(ThemeMode::from_night_mode(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_night_mode(false), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn color_tokens_differ_between_modes() {
        let light = default_color_tokens(ThemeMode::Light);
        let dark = default_color_tokens(ThemeMode::Dark);
        assert_ne!(light.window_background, dark.window_background);
        assert_eq!(dark.primary, "#191970");
    }
}
