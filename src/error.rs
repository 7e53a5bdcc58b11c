use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordSearchError>;

#[derive(Debug, Error)]
pub enum WordSearchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Lexicon has not been loaded")]
    NotLoaded,

    /// `path` is `None` when the source was an already opened stream
    #[error("Failed to read {}: {source}", source_name(.path))]
    InvalidSource {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build lexicon: {0}")]
    LexiconBuild(#[from] fst::Error),

    #[error("Malformed board description: {0}")]
    BoardFormat(#[from] serde_json::Error),

    #[error("Malformed configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Search was cancelled")]
    Cancelled,
}

fn source_name(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("'{}'", path.display()),
        None => "input stream".to_string(),
    }
}

impl WordSearchError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// True for every error a caller should treat as a bad input rather than a bad state.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::InvalidSource { .. } | Self::BoardFormat(_)
        )
    }
}
