use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} command not found")]
    DependencyMissing(String),

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no manga found for the given search terms: {0}")]
    NotFound(String),

    #[error("invalid selection: {0:?}")]
    InvalidSelection(String),

    #[error("no images found for the chapter at {0}")]
    NoPages(String),

    #[error("failed to create manga file {output}: {reason}")]
    Archive { output: PathBuf, reason: String },

    #[error("failed to open manga file {path}: {reason}")]
    Viewer { path: PathBuf, reason: String },

    #[error("invalid selector {0:?}")]
    Selector(String),

    #[error("invalid {name} header value {value:?}")]
    InvalidHeader { name: &'static str, value: String },

    #[error("failed to get user home directory")]
    HomeDirMissing,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        Error::Network {
            url: url.to_string(),
            source,
        }
    }
}
