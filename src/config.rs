use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::Strategy;
use crate::remote::{DEFAULT_API_URL, DEFAULT_SITE};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub sound: SoundConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RemoteConfig {
    pub api_url: String,
    pub site: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            site: DEFAULT_SITE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    Monochrome,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_execution_time: bool,
    pub color_output: bool,
    pub theme: ThemeName,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_execution_time: true,
            color_output: true,
            theme: ThemeName::Dark,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
}

impl Config {
    pub fn create_default(path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create config directory {:?}", parent))?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {:?}", path))
    }

    /// Loads the config at `path`, writing the defaults there first on a fresh install.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::create_default(path)?;
            eprintln!("Created default config file at {:?}", path);
        }
        Self::load(path)
    }

    /// Applies `DEVFIX_STRATEGY`, `DEVFIX_API_URL` and `DEVFIX_SITE` on top of the file values.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(strategy) = lookup("DEVFIX_STRATEGY") {
            self.classifier.strategy = strategy
                .parse::<Strategy>()
                .with_context(|| format!("Invalid DEVFIX_STRATEGY value '{}'", strategy))?;
        }
        if let Some(url) = lookup("DEVFIX_API_URL") {
            self.remote.api_url = url;
        }
        if let Some(site) = lookup("DEVFIX_SITE") {
            self.remote.site = site;
        }
        Ok(())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "devfix", "devfix")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_round_trips_through_disk() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create(&path)?;
        assert!(path.exists());
        assert_eq!(config.classifier.strategy, Strategy::Remote);
        assert_eq!(config.remote.api_url, DEFAULT_API_URL);
        assert_eq!(config.remote.site, "stackoverflow");
        assert!(!config.sound.enabled);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[classifier]\nstrategy = \"remote-then-local\"\n\n[display]\nshow_execution_time = false\ncolor_output = false\ntheme = \"monochrome\"\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.classifier.strategy, Strategy::RemoteThenLocal);
        assert_eq!(config.display.theme, ThemeName::Monochrome);
        assert!(!config.display.color_output);
        assert_eq!(config.remote.site, DEFAULT_SITE);
        Ok(())
    }

    #[test]
    fn test_partial_sections_fill_missing_keys() -> Result<()> {
        let config: Config = toml::from_str("[remote]\nsite = \"superuser\"\n")?;
        assert_eq!(config.remote.site, "superuser");
        assert_eq!(config.remote.api_url, DEFAULT_API_URL);

        let config: Config = toml::from_str("[display]\ntheme = \"light\"\n\n[sound]\n")?;
        assert_eq!(config.display.theme, ThemeName::Light);
        assert!(config.display.show_execution_time);
        assert!(config.display.color_output);
        assert!(!config.sound.enabled);
        Ok(())
    }

    #[test]
    fn test_invalid_file_reports_path() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "[classifier]\nstrategy = \"guess\"\n")?;

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = [
            ("DEVFIX_STRATEGY", "local"),
            ("DEVFIX_API_URL", "http://localhost:9000/search"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()))?;

        assert_eq!(config.classifier.strategy, Strategy::Local);
        assert_eq!(config.remote.api_url, "http://localhost:9000/search");
        assert_eq!(config.remote.site, DEFAULT_SITE);
        Ok(())
    }

    #[test]
    fn test_bad_strategy_override_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| {
            (key == "DEVFIX_STRATEGY").then(|| "sometimes".to_string())
        });
        assert!(result.is_err());
    }
}
