use thiserror::Error;

/// Errors that may occur while writing reports out.
#[derive(Error, Debug)]
pub enum FileCreationError {
    #[error("could not serialize reports: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("could not create {filename}: {source}")]
    FileCreation {
        filename: String,
        source: std::io::Error,
    },

    #[error("could not write output: {0}")]
    FileWrite(#[source] std::io::Error),
}
