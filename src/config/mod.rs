use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

pub(crate) const APP_DIR: &str = "nightswitch";
const APP_CONFIG_FILE: &str = "config.json";
const DEFAULT_ANIMATION_DURATION_MS: u64 = 1_000;

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AppConfig {
    /// Length of one full switch animation. Defaults to one second.
    #[serde(default)]
    pub(crate) animation_duration_ms: Option<u64>,
    /// Rebuild the window content after a mode change. Defaults to `true`.
    #[serde(default)]
    pub(crate) rebuild_on_change: Option<bool>,
}

impl AppConfig {
    pub(crate) fn animation_duration(&self) -> Duration {
        Duration::from_millis(
            self.animation_duration_ms
                .unwrap_or(DEFAULT_ANIMATION_DURATION_MS),
        )
    }

    pub(crate) fn rebuild_on_change(&self) -> bool {
        self.rebuild_on_change.unwrap_or(true)
    }
}

pub(crate) fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("nightswitch-config-{pid}-{nanos}"));
        path
    }

    fn write_config(root: &Path, contents: &str) {
        let path = app_config_path(APP_DIR, APP_CONFIG_FILE, Some(root), None).unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "nightswitch",
            "AppSettingsPrefs.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(
            path,
            PathBuf::from("/tmp/config-root/nightswitch/AppSettingsPrefs.json")
        );
    }

    #[test]
    fn app_config_path_ignores_empty_xdg_config_home() {
        let path = app_config_path(
            "nightswitch",
            "config.json",
            Some(Path::new("")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/nightswitch/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("nightswitch", "config.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn missing_config_uses_one_second_animation_and_rebuilds() {
        let root = fixture_root();
        let config = load_app_config_with(Some(&root), None);
        assert_eq!(config.animation_duration(), Duration::from_secs(1));
        assert!(config.rebuild_on_change());
    }

    #[test]
    fn config_overrides_animation_duration_and_rebuild() {
        let root = fixture_root();
        write_config(
            &root,
            r#"{ "animation_duration_ms": 250, "rebuild_on_change": false }"#,
        );

        let config = load_app_config_with(Some(&root), None);
        assert_eq!(config.animation_duration(), Duration::from_millis(250));
        assert!(!config.rebuild_on_change());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let root = fixture_root();
        write_config(&root, "{ not json");

        let config = load_app_config_with(Some(&root), None);
        assert_eq!(config.animation_duration(), Duration::from_secs(1));
        assert!(config.rebuild_on_change());
        let _ = fs::remove_dir_all(&root);
    }
}
