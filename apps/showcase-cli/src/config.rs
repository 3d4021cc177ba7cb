use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
pub const SETTINGS_FILE: &str = "showcase.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub display: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: "stdout".into(),
            log_filter: "info".into(),
        }
    }
}

/// Where rendered text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayTarget {
    Stdout,
    Dir(PathBuf),
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("display") {
        settings.display = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("SHOWCASE_DISPLAY") {
        settings.display = v;
    }
    if let Some(v) = lookup("APP__DISPLAY") {
        settings.display = v;
    }

    if let Some(v) = lookup("SHOWCASE_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

/// Parses a display setting and makes sure a directory target exists.
pub fn prepare_display(raw_display: &str) -> anyhow::Result<DisplayTarget> {
    let target = parse_display(raw_display)?;
    if let DisplayTarget::Dir(dir) = &target {
        ensure_dir_exists(dir)?;
    }
    Ok(target)
}

fn parse_display(raw_display: &str) -> anyhow::Result<DisplayTarget> {
    let raw_display = raw_display.trim();

    if raw_display.is_empty() || raw_display.eq_ignore_ascii_case("stdout") {
        return Ok(DisplayTarget::Stdout);
    }

    if let Some(path) = raw_display.strip_prefix("dir:") {
        let path = path.trim().replace('\\', "/");
        if path.is_empty() {
            bail!("display '{raw_display}' names no directory");
        }
        return Ok(DisplayTarget::Dir(PathBuf::from(path)));
    }

    bail!("unknown display '{raw_display}', expected 'stdout' or 'dir:<path>'")
}

fn ensure_dir_exists(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create display directory '{}'", dir.display()))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
