use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use presentation::ControllerSettings;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "recipe_cli.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub page_size: usize,
    pub initial_query: String,
    pub load_on_start: bool,
    pub latency_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: presentation::catalog::DEFAULT_PAGE_SIZE,
            initial_query: String::new(),
            load_on_start: true,
            latency_ms: 0,
        }
    }
}

impl Settings {
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            initial_query: self.initial_query.clone(),
            load_on_start: self.load_on_start,
        }
    }

    pub fn latency(&self) -> Option<Duration> {
        (self.latency_ms > 0).then(|| Duration::from_millis(self.latency_ms))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    catalog_path: Option<PathBuf>,
    page_size: Option<usize>,
    initial_query: Option<String>,
    load_on_start: Option<bool>,
    latency_ms: Option<u64>,
}

pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

/// Defaults, then the TOML file at `path` (if it exists), then environment
/// variables. `RECIPE_*` and `APP__*` names are both accepted; the `APP__`
/// form wins when both are set.
pub fn load_settings_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
            apply_file(&mut settings, file_cfg);
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    }

    for key in ["RECIPE_CATALOG", "APP__CATALOG_PATH"] {
        if let Some(v) = env(key) {
            settings.catalog_path = Some(PathBuf::from(v));
        }
    }
    for key in ["RECIPE_PAGE_SIZE", "APP__PAGE_SIZE"] {
        if let Some(v) = env(key) {
            settings.page_size = v
                .parse()
                .with_context(|| format!("{key} must be a positive integer, got '{v}'"))?;
        }
    }
    for key in ["RECIPE_QUERY", "APP__INITIAL_QUERY"] {
        if let Some(v) = env(key) {
            settings.initial_query = v;
        }
    }
    for key in ["RECIPE_LOAD_ON_START", "APP__LOAD_ON_START"] {
        if let Some(v) = env(key) {
            settings.load_on_start = parse_flag(&v)
                .with_context(|| format!("{key} must be true or false, got '{v}'"))?;
        }
    }
    for key in ["RECIPE_LATENCY_MS", "APP__LATENCY_MS"] {
        if let Some(v) = env(key) {
            settings.latency_ms = v
                .parse()
                .with_context(|| format!("{key} must be a number of milliseconds, got '{v}'"))?;
        }
    }

    Ok(settings)
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.catalog_path {
        settings.catalog_path = Some(v);
    }
    if let Some(v) = file_cfg.page_size {
        settings.page_size = v;
    }
    if let Some(v) = file_cfg.initial_query {
        settings.initial_query = v;
    }
    if let Some(v) = file_cfg.load_on_start {
        settings.load_on_start = v;
    }
    if let Some(v) = file_cfg.latency_ms {
        settings.latency_ms = v;
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
