use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::placer::PlacerConfig;
use crate::scaffold::default_directories;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Flat directory holding the loose files
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// Root of the project tree files are copied into
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,
    #[serde(default)]
    pub placer: PlacerConfig,
    /// Directories created under `project_dir` before placing files
    #[serde(default = "default_directories")]
    pub scaffold: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            project_dir: default_project_dir(),
            placer: PlacerConfig::default(),
            scaffold: default_directories(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("./downloaded_files")
}

fn default_project_dir() -> PathBuf {
    PathBuf::from("./student-project")
}
