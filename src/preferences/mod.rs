use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{app_config_path, config_env_dirs, ConfigPathError, APP_DIR};

/// Name of the application-scoped preference store.
pub const PREFERENCES_NAME: &str = "AppSettingsPrefs";
/// Informational flag, cleared on the first user toggle.
pub const FIRST_START: &str = "FIRST_START";
/// Authoritative night mode flag.
pub const NIGHT_MODE: &str = "NIGHT_MODE";

pub type PreferencesResult<T> = std::result::Result<T, PreferencesError>;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read preferences: {path}")]
    ReadStore { path: PathBuf, source: io::Error },
    #[error("failed to write preferences: {path}")]
    WriteStore { path: PathBuf, source: io::Error },
    #[error("failed to parse preferences")]
    ParseStore(#[from] serde_json::Error),
}

/// Durable boolean key-value store. Reads never fail: a missing or unreadable
/// entry yields the caller's default.
pub trait PreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool;
    /// Writes every entry in one batch. Keys not named are left untouched.
    fn put_bools(&self, entries: &[(&str, bool)]) -> PreferencesResult<()>;
}

/// Typed view over the two persisted flags.
///
/// `Default` is the state of a fresh install: not a first start yet recorded,
/// night mode off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NightModePreference {
    pub first_start: bool,
    pub night_mode: bool,
}

impl NightModePreference {
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();
        Self {
            first_start: store.get_bool(FIRST_START, defaults.first_start),
            night_mode: store.get_bool(NIGHT_MODE, defaults.night_mode),
        }
    }

    pub fn save(&self, store: &dyn PreferenceStore) -> PreferencesResult<()> {
        store.put_bools(&[
            (FIRST_START, self.first_start),
            (NIGHT_MODE, self.night_mode),
        ])
    }
}

/// Preference store persisted as a flat JSON object.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Opens the store under the user config root, or under the system temp
    /// directory when neither `XDG_CONFIG_HOME` nor `HOME` is set.
    pub fn open_default() -> Self {
        let (xdg_config_home, home) = config_env_dirs();
        Self::open_or_fallback(xdg_config_home.as_deref(), home.as_deref())
    }

    fn open_or_fallback(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Self {
        Self::open_with(xdg_config_home, home).unwrap_or_else(|err| {
            let store = Self::with_path(
                std::env::temp_dir()
                    .join(APP_DIR)
                    .join(format!("{PREFERENCES_NAME}.json")),
            );
            tracing::warn!(
                ?err,
                path = ?store.path,
                "no config root; using fallback preference store"
            );
            store
        })
    }

    fn open_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> PreferencesResult<Self> {
        let file_name = format!("{PREFERENCES_NAME}.json");
        let path = app_config_path(APP_DIR, &file_name, xdg_config_home, home).map_err(
            |error| match error {
                ConfigPathError::MissingHomeDirectory => PreferencesError::MissingHomeDirectory,
            },
        )?;
        Ok(Self::with_path(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> PreferencesResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let serialized =
            fs::read_to_string(&self.path).map_err(|source| PreferencesError::ReadStore {
                path: self.path.clone(),
                source,
            })?;
        match serde_json::from_str::<Value>(&serialized)? {
            Value::Object(entries) => Ok(entries),
            _ => Ok(Map::new()),
        }
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.read_entries() {
            Ok(entries) => entries.get(key).and_then(Value::as_bool).unwrap_or(default),
            Err(err) => {
                tracing::warn!(?err, key, default, "failed to read preference; using default");
                default
            }
        }
    }

    fn put_bools(&self, entries: &[(&str, bool)]) -> PreferencesResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PreferencesError::WriteStore {
                path: self.path.clone(),
                source,
            })?;
        }

        // Keep entries written by other versions of the app.
        let mut stored = self.read_entries().unwrap_or_else(|err| {
            tracing::warn!(?err, path = ?self.path, "discarding unreadable preferences");
            Map::new()
        });
        for (key, value) in entries {
            stored.insert((*key).to_string(), Value::Bool(*value));
        }

        let serialized = serde_json::to_string_pretty(&Value::Object(stored))?;
        fs::write(&self.path, serialized).map_err(|source| PreferencesError::WriteStore {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = ?self.path, count = entries.len(), "stored preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("nightswitch-prefs-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn store_path_uses_named_store_under_app_dir() {
        let store = JsonPreferenceStore::open_with(Some(Path::new("/tmp/cfg")), None).unwrap();
        assert_eq!(
            store.path(),
            Path::new("/tmp/cfg/nightswitch/AppSettingsPrefs.json")
        );
    }

    #[test]
    fn open_without_any_config_root_fails() {
        let err = JsonPreferenceStore::open_with(None, None).unwrap_err();
        assert!(matches!(err, PreferencesError::MissingHomeDirectory));
    }

    #[test]
    fn missing_config_root_falls_back_to_temp_store() {
        let store = JsonPreferenceStore::open_or_fallback(None, None);
        assert_eq!(
            store.path(),
            std::env::temp_dir()
                .join("nightswitch")
                .join("AppSettingsPrefs.json")
        );
    }

    #[test]
    fn fallback_is_not_used_when_home_is_set() {
        let store = JsonPreferenceStore::open_or_fallback(None, Some(Path::new("/home/user")));
        assert_eq!(
            store.path(),
            Path::new("/home/user/.config/nightswitch/AppSettingsPrefs.json")
        );
    }

    #[test]
    fn missing_store_yields_defaults() {
        with_temp_root(|root| {
            let store = JsonPreferenceStore::open_with(Some(root), None).unwrap();
            assert!(!store.get_bool(NIGHT_MODE, false));
            assert!(store.get_bool(NIGHT_MODE, true));
            assert_eq!(
                NightModePreference::load(&store),
                NightModePreference::default()
            );
            assert!(!store.path().exists());
        });
    }

    #[test]
    fn saved_preference_is_read_back() {
        with_temp_root(|root| {
            let store = JsonPreferenceStore::open_with(Some(root), None).unwrap();
            NightModePreference {
                first_start: false,
                night_mode: true,
            }
            .save(&store)
            .unwrap();

            assert!(store.get_bool(NIGHT_MODE, false));
            assert!(!store.get_bool(FIRST_START, true));
        });
    }

    #[test]
    fn each_write_overwrites_previous_value() {
        with_temp_root(|root| {
            let store = JsonPreferenceStore::open_with(Some(root), None).unwrap();
            store.put_bools(&[(NIGHT_MODE, true)]).unwrap();
            store.put_bools(&[(NIGHT_MODE, false)]).unwrap();
            assert!(!store.get_bool(NIGHT_MODE, true));
        });
    }

    #[test]
    fn writes_keep_unrelated_keys() {
        with_temp_root(|root| {
            let store = JsonPreferenceStore::open_with(Some(root), None).unwrap();
            fs::create_dir_all(store.path().parent().unwrap()).unwrap();
            fs::write(store.path(), r#"{ "LEGACY": true, "NIGHT_MODE": false }"#).unwrap();

            store.put_bools(&[(NIGHT_MODE, true)]).unwrap();

            assert!(store.get_bool("LEGACY", false));
            assert!(store.get_bool(NIGHT_MODE, false));
        });
    }

    #[test]
    fn unreadable_store_reads_as_default_and_is_replaced_on_write() {
        with_temp_root(|root| {
            let store = JsonPreferenceStore::open_with(Some(root), None).unwrap();
            fs::create_dir_all(store.path().parent().unwrap()).unwrap();
            fs::write(store.path(), "{ broken").unwrap();

            assert!(store.get_bool(NIGHT_MODE, true));
            store.put_bools(&[(NIGHT_MODE, false)]).unwrap();
            assert!(!store.get_bool(NIGHT_MODE, true));
        });
    }

    #[test]
    fn non_boolean_entry_reads_as_default() {
        with_temp_root(|root| {
            let store = JsonPreferenceStore::open_with(Some(root), None).unwrap();
            fs::create_dir_all(store.path().parent().unwrap()).unwrap();
            fs::write(store.path(), r#"{ "NIGHT_MODE": "yes" }"#).unwrap();

            assert!(!store.get_bool(NIGHT_MODE, false));
        });
    }

    #[test]
    fn write_into_unwritable_location_reports_error() {
        with_temp_root(|root| {
            let blocker = root.join("blocker");
            fs::write(&blocker, "").unwrap();
            let store = JsonPreferenceStore::with_path(blocker.join("AppSettingsPrefs.json"));

            let err = store.put_bools(&[(NIGHT_MODE, true)]).unwrap_err();
            assert!(matches!(err, PreferencesError::WriteStore { .. }));
        });
    }
}
