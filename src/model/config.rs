use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DictError, Result};

fn default_languages_file() -> PathBuf {
    PathBuf::from("LANGUAGES.tsv")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

// Empty means "the build root itself".
fn default_output_root() -> PathBuf {
    PathBuf::new()
}

/// Where the build reads its tables and writes its dictionaries.
///
/// Relative paths are resolved against the build root (see [`BuildConfig::rooted`]).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    #[serde(default = "default_languages_file")]
    pub languages_file: PathBuf,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Parent of the per-encoding `dsl_*` directories.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            languages_file: default_languages_file(),
            data_dir: default_data_dir(),
            output_root: default_output_root(),
        }
    }
}

impl BuildConfig {
    /// Reads a JSON config; missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(DictError::io(path))?;
        serde_json::from_str(&data).map_err(|source| DictError::Config {
            file: path.to_path_buf(),
            source,
        })
    }

    /// Re-anchors every relative path under `root`. Absolute paths are kept.
    pub fn rooted(self, root: &Path) -> Self {
        if root == Path::new(".") {
            return self;
        }
        Self {
            languages_file: root.join(self.languages_file),
            data_dir: root.join(self.data_dir),
            output_root: root.join(self.output_root),
        }
    }

    /// `data/<code>.txt`
    pub fn data_file(&self, code: &str) -> PathBuf {
        self.data_dir.join(format!("{code}.txt"))
    }
}
