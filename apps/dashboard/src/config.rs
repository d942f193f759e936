use std::{fs, io::ErrorKind, path::Path, time::Duration};

use anyhow::Context;
use client_core::{
    avatar::DEFAULT_AVATAR_BASE_URL, provider::DEFAULT_PERSONS_API_URL, DEFAULT_BATCH_SIZE,
};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_PATH: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub persons_api_url: String,
    pub batch_size: usize,
    pub avatar_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            persons_api_url: DEFAULT_PERSONS_API_URL.into(),
            batch_size: DEFAULT_BATCH_SIZE,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.into(),
            request_timeout_secs: 10,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    persons_api_url: Option<String>,
    batch_size: Option<usize>,
    avatar_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `path` if it exists, then environment overrides.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid settings file '{}'", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.persons_api_url {
        settings.persons_api_url = v;
    }
    if let Some(v) = file_cfg.batch_size {
        settings.batch_size = v;
    }
    if let Some(v) = file_cfg.avatar_base_url {
        settings.avatar_base_url = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("PERSONS_API_URL") {
        settings.persons_api_url = v;
    }
    if let Some(v) = lookup("APP__PERSONS_API_URL") {
        settings.persons_api_url = v;
    }

    if let Some(v) = lookup("APP__BATCH_SIZE") {
        if let Ok(parsed) = v.trim().parse::<usize>() {
            settings.batch_size = parsed;
        }
    }

    if let Some(v) = lookup("APP__AVATAR_BASE_URL") {
        settings.avatar_base_url = v;
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
