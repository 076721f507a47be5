// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use slotwise_core::{APP_NAME, Config as CoreConfig};

const SLOTWISE_CONFIG_ENV: &str = "SLOTWISE_CONFIG";

/// Loads the configuration.
///
/// The path comes from `--config`, then `SLOTWISE_CONFIG`, then the user config
/// directory. Only an explicitly given file has to exist.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(SLOTWISE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading config file");
    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;
    Ok(raw.core)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use std::fs;
    use std::sync::OnceLock;

    use slotwise_core::{ConversionPath, DEFAULT_DISPLAY_PATTERN};
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    use super::*;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(dir: &TempDir, name: &str, timezone: &str) -> PathBuf {
        let path = dir.path().join(name);
        let content = format!(
            r#"
[core]
default_timezone = "{timezone}"
"#
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_core_table() {
        let raw: ConfigRaw = r#"
[core]
default_timezone = "oman"
display_pattern = "HH:mm"
conversion_path = "fixed_offset"
"#
        .parse()
        .unwrap();
        assert_eq!(raw.core.default_timezone.as_deref(), Some("oman"));
        assert_eq!(raw.core.display_pattern, "HH:mm");
        assert_eq!(raw.core.conversion_path, ConversionPath::FixedOffset);
    }

    #[test]
    fn missing_core_table_uses_defaults() {
        let raw: ConfigRaw = "".parse().unwrap();
        assert_eq!(raw.core.default_timezone, None);
        assert_eq!(raw.core.display_pattern, DEFAULT_DISPLAY_PATTERN);
    }

    #[test]
    fn rejects_unknown_conversion_path() {
        let raw = r#"
[core]
conversion_path = "sundial"
"#
        .parse::<ConfigRaw>();
        assert!(raw.is_err());
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, "config.toml", "qatar");
        let env_path = write_config(&temp_dir, "env_config.toml", "kuwait");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var(SLOTWISE_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(Some(config_path)).await.unwrap();
        assert_eq!(config.default_timezone.as_deref(), Some("qatar"));

        unsafe {
            std::env::remove_var(SLOTWISE_CONFIG_ENV);
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = write_config(&temp_dir, "env_config.toml", "bahrain");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var(SLOTWISE_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.default_timezone.as_deref(), Some("bahrain"));

        unsafe {
            std::env::remove_var(SLOTWISE_CONFIG_ENV);
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn uses_default_location_when_no_cli_or_env() {
        let temp_dir = TempDir::new().unwrap();
        let app_dir = temp_dir.path().join(APP_NAME);
        fs::create_dir(&app_dir).unwrap();
        fs::write(
            app_dir.join("config.toml"),
            "[core]\ndefault_timezone = \"uae\"\n",
        )
        .unwrap();

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::remove_var(SLOTWISE_CONFIG_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.default_timezone.as_deref(), Some("uae"));

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn missing_default_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::remove_var(SLOTWISE_CONFIG_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config, CoreConfig::default());

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[tokio::test]
    async fn missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = parse_config(Some(missing)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
