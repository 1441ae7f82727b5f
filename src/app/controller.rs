use crate::preferences::{NightModePreference, PreferenceStore, NIGHT_MODE};
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ModeChange {
    pub(super) mode: ThemeMode,
    /// Whether the screen must be rebuilt so the rest of the UI re-themes.
    pub(super) recreate: bool,
}

/// Owns the preference store and decides what a toggle means for the screen.
pub(super) struct ScreenController<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> ScreenController<S> {
    pub(super) fn new(store: S) -> Self {
        Self { store }
    }

    pub(super) fn initial_night_mode(&self) -> bool {
        let preference = NightModePreference::load(&self.store);
        tracing::info!(
            night_mode = preference.night_mode,
            first_start = preference.first_start,
            "loaded night mode preference"
        );
        preference.night_mode
    }

    /// Applies the presentation mode, persists the choice, then checks the
    /// stored value against `is_night_mode`.
    ///
    /// The comparison runs after the write, so it only differs when the write
    /// did not land; the guard is kept as the sole gate for rebuilding.
    pub(super) fn handle_checked_change(
        &self,
        is_night_mode: bool,
        apply_mode: impl FnOnce(ThemeMode),
    ) -> ModeChange {
        let mode = ThemeMode::from_night_mode(is_night_mode);
        apply_mode(mode);

        let preference = NightModePreference {
            first_start: false,
            night_mode: is_night_mode,
        };
        if let Err(err) = preference.save(&self.store) {
            tracing::warn!(?err, is_night_mode, "failed to persist night mode preference");
        }

        let stored = self.store.get_bool(NIGHT_MODE, !is_night_mode);
        let recreate = is_night_mode != stored;
        tracing::debug!(is_night_mode, stored, recreate, "handled night mode change");
        ModeChange { mode, recreate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{JsonPreferenceStore, FIRST_START};
    use std::cell::Cell;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("nightswitch-controller-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    fn controller_in(root: &Path) -> ScreenController<JsonPreferenceStore> {
        ScreenController::new(JsonPreferenceStore::with_path(
            root.join("AppSettingsPrefs.json"),
        ))
    }

    #[test]
    fn fresh_install_starts_in_light_mode() {
        with_temp_root(|root| {
            assert!(!controller_in(root).initial_night_mode());
        });
    }

    #[test]
    fn stored_night_mode_is_used_on_startup() {
        with_temp_root(|root| {
            let controller = controller_in(root);
            controller.store.put_bools(&[(NIGHT_MODE, true)]).unwrap();
            assert!(controller.initial_night_mode());
        });
    }

    #[test]
    fn change_applies_mode_before_persisting() {
        with_temp_root(|root| {
            let controller = controller_in(root);
            let applied = Cell::new(None);
            let store_path = controller.store.path().to_path_buf();

            let change = controller.handle_checked_change(true, |mode| {
                assert!(!store_path.exists(), "mode must be applied before the write");
                applied.set(Some(mode));
            });

            assert_eq!(applied.get(), Some(ThemeMode::Dark));
            assert_eq!(change.mode, ThemeMode::Dark);
            assert!(controller.store.get_bool(NIGHT_MODE, false));
            assert!(!controller.store.get_bool(FIRST_START, true));
        });
    }

    #[test]
    fn successful_write_never_requests_recreate() {
        with_temp_root(|root| {
            let controller = controller_in(root);
            for value in [true, false, false, true] {
                let change = controller.handle_checked_change(value, |_| {});
                assert!(!change.recreate);
            }
        });
    }

    #[test]
    fn lost_write_requests_recreate() {
        with_temp_root(|root| {
            let blocker = root.join("blocker");
            fs::write(&blocker, "").unwrap();
            let controller = ScreenController::new(JsonPreferenceStore::with_path(
                blocker.join("AppSettingsPrefs.json"),
            ));

            let change = controller.handle_checked_change(true, |_| {});
            assert_eq!(change.mode, ThemeMode::Dark);
            assert!(change.recreate);
        });
    }

    #[test]
    fn toggling_back_to_light_persists_light() {
        with_temp_root(|root| {
            let controller = controller_in(root);
            controller.handle_checked_change(true, |_| {});
            let change = controller.handle_checked_change(false, |_| {});

            assert_eq!(change.mode, ThemeMode::Light);
            assert!(!controller.initial_night_mode());
        });
    }
}
