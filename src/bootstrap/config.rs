//! Configuration loading.
//!
//! The loader only reads and parses. Range checks live in
//! [`AppConfig::validate`] and run after CLI overrides are applied.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cr_core::AppConfig;
use tracing::{debug, info};

const APP_DIR_NAME: &str = "clipring";
const CONFIG_FILE_NAME: &str = "config.toml";

/// `<platform config dir>/clipring/config.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration from a TOML file.
///
/// Missing sections and fields take their defaults.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML for
/// [`AppConfig`].
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    AppConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Pick the configuration source.
///
/// An explicit path must exist. Otherwise the default path is used when a
/// file is there, and built-in defaults when it is not.
pub fn resolve_config(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "Loading config from command line path");
        return load_config(path);
    }

    match default_path {
        Some(path) if path.is_file() => {
            info!(path = %path.display(), "Loading config");
            load_config(&path)
        }
        _ => {
            debug!("No config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cr_core::ChangeBaseline;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [watcher]
            poll_interval_ms = 250
            baseline = "unset"

            [history]
            max_entries = 0
            suppression_ttl_ms = 1000
            clear_clipboard_on_clear = false
        "#,
        );

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.watcher.poll_interval_ms, 250);
        assert_eq!(config.watcher.baseline, ChangeBaseline::Unset);
        assert_eq!(config.history.max_entries(), None);
        assert_eq!(config.history.suppression_ttl_ms, 1000);
        assert!(!config.history.clear_clipboard_on_clear);
    }

    #[test]
    fn test_load_config_fills_missing_values_with_defaults() {
        let temp_file = write_config(
            r#"
            [history]
            max_entries = 20
        "#,
        );

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.history.max_entries(), Some(20));
        assert_eq!(config.watcher, AppConfig::default().watcher);
    }

    #[test]
    fn test_load_config_does_not_validate() {
        let temp_file = write_config(
            r#"
            [watcher]
            poll_interval_ms = 0
        "#,
        );

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.watcher.poll_interval_ms, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let temp_file = write_config("[watcher\npoll_interval_ms = ");

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_returns_error_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let explicit = write_config("[watcher]\npoll_interval_ms = 100\n");
        let default = write_config("[watcher]\npoll_interval_ms = 900\n");

        let config =
            resolve_config(Some(explicit.path()), Some(default.path().to_path_buf())).unwrap();

        assert_eq!(config.watcher.poll_interval_ms, 100);
    }

    #[test]
    fn test_resolve_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert!(resolve_config(Some(&path), None).is_err());
    }

    #[test]
    fn test_resolve_uses_default_path_when_present() {
        let default = write_config("[watcher]\npoll_interval_ms = 900\n");

        let config = resolve_config(None, Some(default.path().to_path_buf())).unwrap();

        assert_eq!(config.watcher.poll_interval_ms, 900);
    }

    #[test]
    fn test_resolve_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = resolve_config(None, Some(dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());

        let config = resolve_config(None, None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_default_config_path_ends_with_app_file() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("clipring/config.toml"));
        }
    }
}
