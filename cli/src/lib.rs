use floorplan::{FloorplanError, WallsResponse};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Floorplan(#[from] FloorplanError),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// One floor plan image to analyse
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PlanImage {
    pub name: String,
    pub path: String,
    pub description: Option<String>,
}

/// Batch analysis job
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalysisJob {
    pub output_dir: String,
    pub plans: Vec<PlanImage>,
}

impl PlanImage {
    /// Where this plan's walls document is written inside `output_dir`
    pub fn output_path<P: AsRef<Path>>(&self, output_dir: P) -> PathBuf {
        output_dir.as_ref().join(format!("{}.walls.json", self.name))
    }

    /// Resolve the image path against the job file's directory
    pub fn resolved_path<P: AsRef<Path>>(&self, base_dir: P) -> PathBuf {
        let path = Path::new(&self.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.as_ref().join(path)
        }
    }
}

impl AnalysisJob {
    /// Load AnalysisJob configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load AnalysisJob configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }

    /// Load AnalysisJob configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load AnalysisJob configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(CliError::UnsupportedFileFormat),
        }
    }

    /// Convert AnalysisJob to TOML string
    pub fn to_toml(&self) -> Result<String, CliError> {
        Ok(toml::to_string_pretty(&self)?)
    }

    /// Convert AnalysisJob to JSON string
    pub fn to_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(&self)?)
    }
}

/// Run the wall pipeline on an image file
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<WallsResponse, CliError> {
    let bytes = fs::read(path)?;
    Ok(floorplan::analyze_bytes(&bytes)?)
}
