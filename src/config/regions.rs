use crate::detector::DetectorOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RegionToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorOptions,
    /// Run the banded path instead of the sequential one.
    #[serde(default)]
    pub parallel: bool,
    pub output: RegionOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct RegionOutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
    /// Optional PNG with every accepted blob painted in its own gray level.
    #[serde(default, rename = "label_image")]
    pub label_image: Option<PathBuf>,
}

pub fn parse_config(data: &str, origin: &Path) -> Result<RegionToolConfig, String> {
    let config: RegionToolConfig = serde_json::from_str(data)
        .map_err(|e| format!("Failed to parse config {}: {e}", origin.display()))?;
    config
        .detector
        .validate()
        .map_err(|e| format!("Invalid detector options in {}: {e}", origin.display()))?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<RegionToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data, path)
}
