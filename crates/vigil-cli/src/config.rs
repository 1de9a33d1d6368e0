// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use vigil_app::ViewLabel;

pub const APP_NAME: &str = "vigil";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_STATUS_CLEAR_SECS: u64 = 4;
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub export: Export,
    #[serde(default)]
    pub log: Log,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ui {
    pub start_view: Option<String>,
    pub status_clear_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Export {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("VIGIL_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set VIGIL_CONFIG_PATH to the config file")
        })?;
        Ok(config_root.join(APP_NAME).join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                version: CONFIG_VERSION,
                ..Self::default()
            });
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and put values under [ui], [export], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(raw) = &self.ui.start_view {
            parse_start_view(raw).with_context(|| format!("ui.start_view in {}", path.display()))?;
        }

        if self.ui.status_clear_secs == Some(0) {
            bail!(
                "ui.status_clear_secs in {} must be positive, got 0",
                path.display()
            );
        }

        if let Some(level) = &self.log.level
            && !LOG_LEVELS.contains(&level.as_str())
        {
            bail!(
                "log.level in {} must be one of {}, got {level:?}",
                path.display(),
                LOG_LEVELS.join(", ")
            );
        }

        if let Some(dir) = &self.export.dir
            && dir.trim().is_empty()
        {
            bail!("export.dir in {} must not be empty", path.display());
        }

        Ok(())
    }

    pub fn start_view(&self) -> Result<Option<ViewLabel>> {
        self.ui
            .start_view
            .as_deref()
            .map(parse_start_view)
            .transpose()
    }

    pub fn status_clear(&self) -> Duration {
        Duration::from_secs(
            self.ui
                .status_clear_secs
                .unwrap_or(DEFAULT_STATUS_CLEAR_SECS),
        )
    }

    /// Config value first, then `VIGIL_EXPORT_DIR`, then the platform data dir.
    pub fn export_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.export.dir {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = env::var_os("VIGIL_EXPORT_DIR") {
            return Ok(PathBuf::from(dir));
        }
        Ok(data_root()?.join("exports"))
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.log.file {
            Some(file) => Ok(PathBuf::from(file)),
            None => Ok(data_root()?.join("vigil.log")),
        }
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# vigil config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# Top-level tab to open on: {}\n# start_view = \"risk\"\nstatus_clear_secs = {}\n\n[export]\n# Optional. Default is the platform data dir (for example ~/.local/share/vigil/exports)\n# dir = \"/absolute/path/to/exports\"\n\n[log]\n# One of: {}\nlevel = \"{}\"\n# file = \"/absolute/path/to/vigil.log\"\n",
            path.display(),
            root_slugs().join(", "),
            DEFAULT_STATUS_CLEAR_SECS,
            LOG_LEVELS.join(", "),
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn data_root() -> Result<PathBuf> {
    let root = dirs::data_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set [export].dir and [log].file in the config")
    })?;
    Ok(root.join(APP_NAME))
}

fn root_slugs() -> Vec<&'static str> {
    ViewLabel::ROOT.iter().map(|label| label.as_str()).collect()
}

fn parse_start_view(raw: &str) -> Result<ViewLabel> {
    ViewLabel::parse(raw)
        .filter(|label| ViewLabel::ROOT.contains(label))
        .ok_or_else(|| {
            anyhow!(
                "unknown start view {raw:?}; use one of: {}",
                root_slugs().join(", ")
            )
        })
}

#[cfg(test)]
mod tests {
    use super::Config;
    use anyhow::Result;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;
    use vigil_app::ViewLabel;

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.start_view()?, None);
        assert_eq!(config.status_clear(), Duration::from_secs(4));
        assert_eq!(config.log_level(), "info");
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[ui]\nstart_view = \"risk\"\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[ui], [export], and [log]"));
        Ok(())
    }

    #[test]
    fn v1_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[ui]\nstart_view = \"Vendors\"\nstatus_clear_secs = 9\n[export]\ndir = \"/srv/exports\"\n[log]\nlevel = \"debug\"\nfile = \"/var/log/vigil.log\"\n",
        )?;
        let config = Config::load(&path)?;
        assert_eq!(config.start_view()?, Some(ViewLabel::Vendors));
        assert_eq!(config.status_clear(), Duration::from_secs(9));
        assert_eq!(config.export_dir()?, PathBuf::from("/srv/exports"));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_file()?, PathBuf::from("/var/log/vigil.log"));
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn start_view_must_be_a_top_level_tab() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nstart_view = \"risk-register\"\n")?;
        let error = Config::load(&path).expect_err("sub tab start view should fail");
        let message = format!("{error:#}");
        assert!(message.contains("ui.start_view"), "got {message}");
        assert!(message.contains("unknown start view"), "got {message}");
        assert!(message.contains("overview"), "got {message}");
        Ok(())
    }

    #[test]
    fn zero_status_clear_and_unknown_log_level_are_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nstatus_clear_secs = 0\n")?;
        let error = Config::load(&path).expect_err("zero delay should fail");
        assert!(error.to_string().contains("must be positive"));

        let (_temp, path) = write_config("version = 1\n[log]\nlevel = \"loud\"\n")?;
        let error = Config::load(&path).expect_err("unknown level should fail");
        assert!(error.to_string().contains("log.level"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("VIGIL_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("VIGIL_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("VIGIL_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("vigil/config.toml"));
        Ok(())
    }

    #[test]
    fn export_dir_prefers_config_over_env_override() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n[export]\ndir = \"/from/config\"\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("VIGIL_EXPORT_DIR", "/from/env");
        }
        let config = Config::load(&path)?;
        let resolved = config.export_dir()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("VIGIL_EXPORT_DIR");
        }
        assert_eq!(resolved, PathBuf::from("/from/config"));
        Ok(())
    }

    #[test]
    fn export_dir_uses_env_override_when_config_is_silent() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("VIGIL_EXPORT_DIR", "/from/env-only");
        }
        let config = Config::load(&path)?;
        let resolved = config.export_dir()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("VIGIL_EXPORT_DIR");
        }
        assert_eq!(resolved, PathBuf::from("/from/env-only"));
        Ok(())
    }

    #[test]
    fn example_config_loads_cleanly() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        for section in ["[ui]", "[export]", "[log]"] {
            assert!(example.contains(section), "missing {section}");
        }

        std::fs::write(&path, &example)?;
        let config = Config::load(&path)?;
        assert_eq!(config.log_level(), "info");
        Ok(())
    }
}
