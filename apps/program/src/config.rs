use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use schedule::{ScheduleConfig, TimestampMode};
use serde::Deserialize;
use shared::domain::DayLabels;
use tracing::warn;

pub const SETTINGS_FILE: &str = "program.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    inputs: Option<Vec<PathBuf>>,
    output: Option<PathBuf>,
    day_labels: Option<String>,
    first_day: Option<i32>,
    strict_timestamps: Option<bool>,
    labels: Option<BTreeMap<String, String>>,
}

/// Defaults, then the settings file, then `APP__*` environment variables.
///
/// A missing `program.toml` is skipped; a settings file named explicitly must be readable.
pub fn load_settings(settings_path: Option<&Path>) -> Result<ScheduleConfig> {
    let mut config = ScheduleConfig::default();

    match settings_path {
        Some(path) => {
            let raw = fs::read_to_string(path).with_context(|| {
                format!("failed to read settings file '{}'", path.display())
            })?;
            apply_file(&mut config, &raw);
        }
        None => {
            if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
                apply_file(&mut config, &raw);
            }
        }
    }
    apply_env(&mut config, |key| std::env::var(key).ok());

    Ok(config)
}

pub(crate) fn apply_file(config: &mut ScheduleConfig, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(error) => {
            warn!(%error, "ignoring unreadable settings file");
            return;
        }
    };

    if let Some(inputs) = file_cfg.inputs {
        config.inputs = inputs;
    }
    if let Some(output) = file_cfg.output {
        config.output = output;
    }
    if let Some(name) = file_cfg.day_labels {
        apply_preset(config, &name);
    }
    if let Some(first_day) = file_cfg.first_day {
        config.day_labels = DayLabels::wednesday_to_friday(first_day);
    }
    if let Some(labels) = file_cfg.labels {
        let pairs = labels
            .into_iter()
            .filter_map(|(day, label)| match day.trim().parse::<i32>() {
                Ok(day) => Some((day, label)),
                Err(_) => {
                    warn!(%day, "ignoring label for non-numeric day");
                    None
                }
            });
        config.day_labels = DayLabels::from_pairs(pairs);
    }
    if let Some(strict) = file_cfg.strict_timestamps {
        config.timestamp_mode = timestamp_mode(strict);
    }
}

pub(crate) fn apply_env<F>(config: &mut ScheduleConfig, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = var("APP__INPUTS") {
        config.inputs = v
            .split(',')
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .collect();
    }
    if let Some(v) = var("APP__OUTPUT") {
        config.output = PathBuf::from(v);
    }
    if let Some(v) = var("APP__DAY_LABELS") {
        apply_preset(config, &v);
    }
    if let Some(v) = var("APP__STRICT_TIMESTAMPS") {
        match parse_flag(&v) {
            Some(strict) => config.timestamp_mode = timestamp_mode(strict),
            None => warn!(value = %v, "ignoring APP__STRICT_TIMESTAMPS"),
        }
    }
}

fn apply_preset(config: &mut ScheduleConfig, name: &str) {
    match DayLabels::preset(name) {
        Some(labels) => config.day_labels = labels,
        None => warn!(preset = %name, "unknown day label preset, keeping current labels"),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn timestamp_mode(strict: bool) -> TimestampMode {
    if strict {
        TimestampMode::Strict
    } else {
        TimestampMode::Lenient
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
