use std::path::PathBuf;
use thiserror::Error;

/// Errors that may occur while loading raw records from disk.
#[derive(Error, Debug)]
pub enum RecordLoadError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path} does not hold a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("could not list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
