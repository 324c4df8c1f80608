use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::LayoutKind;
use crate::tracker::TrackerParams;

/// Tracker knobs as they appear in the config file. Unset fields fall back
/// to the reference defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub bin_count: Option<usize>,
    pub max_energy: Option<i32>,
    pub increment: Option<i32>,
    pub decrement: Option<i32>,
    pub min_threshold: Option<i32>,
    pub max_brightness: Option<i32>,
    pub layout: Option<LayoutKind>,
}

impl TrackerConfig {
    pub fn resolve(&self) -> TrackerParams {
        let defaults = TrackerParams::default();
        TrackerParams {
            bin_count: self.bin_count.unwrap_or(defaults.bin_count),
            max_energy: self.max_energy.unwrap_or(defaults.max_energy),
            increment: self.increment.unwrap_or(defaults.increment),
            decrement: self.decrement.unwrap_or(defaults.decrement),
            min_threshold: self.min_threshold.unwrap_or(defaults.min_threshold),
            max_brightness: self.max_brightness.unwrap_or(defaults.max_brightness),
            layout: self.layout.unwrap_or(defaults.layout),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the per-tick JSON reports, if anywhere.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    /// Newline-delimited frame log to replay.
    pub input_path: PathBuf,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
