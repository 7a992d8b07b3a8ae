use std::fs;
use std::path::{Path, PathBuf};

use market_ui_sidebar::{SidebarConfig, config_dir};
use thiserror::Error;

/// Errors emitted while reading the app configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
}

/// Status describing how the configuration was loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// App-owned configuration read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AppConfig {
    pub(crate) sidebar: SidebarConfig,
}

impl AppConfig {
    /// Load the configuration, falling back to defaults on any failure.
    pub(crate) fn load() -> Self {
        match load_config_from_path(&config_path()) {
            Ok((config, ConfigLoadStatus::Invalid(message))) => {
                log::warn!("sidebar config ignored: {message}");
                config
            },
            Ok((config, _)) => config,
            Err(err) => {
                log::warn!("sidebar config read failed: {err}");
                AppConfig::default()
            },
        }
    }
}

fn load_config_from_path(
    path: &Path,
) -> Result<(AppConfig, ConfigLoadStatus), ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((AppConfig::default(), ConfigLoadStatus::Missing));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<SidebarConfig>(&data) {
        Ok(sidebar) => Ok((
            AppConfig {
                sidebar: sidebar.normalized(),
            },
            ConfigLoadStatus::Loaded,
        )),
        Err(err) => Ok((
            AppConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn config_path() -> PathBuf {
    config_dir().join("sidebar.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use market_ui_sidebar::{config_dir, default_store_path};

    use super::{AppConfig, ConfigLoadStatus, config_path, load_config_from_path};

    #[test]
    fn given_config_and_store_paths_when_resolved_then_they_share_a_directory()
     {
        assert_eq!(config_path().parent(), Some(config_dir().as_path()));
        assert_eq!(config_path().parent(), default_store_path().parent());
    }

    #[test]
    fn given_missing_file_when_loaded_then_defaults_with_missing_status() {
        let root = test_temp_dir("missing");

        let (config, status) = load_config_from_path(&root.join("sidebar.json"))
            .expect("missing config should not fail");

        assert_eq!(config, AppConfig::default());
        assert_eq!(status, ConfigLoadStatus::Missing);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_loaded_then_sidebar_values_are_normalized() {
        let root = test_temp_dir("valid");
        let path = root.join("sidebar.json");
        fs::write(
            &path,
            r#"{ "default_collapsed": true, "expanded_width": 999 }"#,
        )
        .expect("config payload should be written");

        let (config, status) =
            load_config_from_path(&path).expect("config should load");

        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert!(config.sidebar.default_collapsed);
        assert_eq!(config.sidebar.expanded_width, 480);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_loaded_then_defaults_with_invalid_status() {
        let root = test_temp_dir("invalid");
        let path = root.join("sidebar.json");
        fs::write(&path, "{ not json").expect("payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("invalid config should not fail with io error");

        assert_eq!(config, AppConfig::default());
        assert!(matches!(status, ConfigLoadStatus::Invalid(_)));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "market-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
