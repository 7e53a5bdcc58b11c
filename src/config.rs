use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, WordSearchError};

pub const DEFAULT_MIN_LENGTH: usize = 3;

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

/// Settings read from a TOML file. Command line flags take precedence.
///
/// ```toml
/// lexicon = "words.txt"
/// board = "board.json"
/// min-length = 4
/// threads = 2
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
    #[serde(default)]
    pub board: Option<PathBuf>,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon: None,
            board: None,
            min_length: DEFAULT_MIN_LENGTH,
            threads: None,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| WordSearchError::InvalidSource {
            path: Some(path.to_path_buf()),
            source,
        })?;
        let mut config: Config = toml::from_str(&data)?;

        // Relative paths in the file are relative to the file itself
        if let Some(dir) = path.parent() {
            config.lexicon = config.lexicon.map(|p| dir.join(p));
            config.board = config.board.map(|p| dir.join(p));
        }
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}
