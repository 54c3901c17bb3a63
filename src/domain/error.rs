use thiserror::Error;

use crate::io::IoError;

/// Errors produced while sorting one translation file.
#[derive(Debug, Error)]
pub enum SortError {
    /// Target path is not an existing regular file.
    #[error("File not found: '{path}'")]
    MissingFile { path: String },

    /// Content parsed, but the top-level value is not an object.
    #[error("JSON does not contain a dictionary.")]
    InvalidFormat,

    /// Content is not valid JSON.
    #[error("json parse error: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// Sorted mapping could not be rendered back to JSON text.
    #[error("failed to serialize sorted json: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read file: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl From<IoError> for SortError {
    fn from(value: IoError) -> Self {
        match value {
            IoError::NotAnObject => Self::InvalidFormat,
            IoError::JsonParse(source) => Self::Parse { source },
            IoError::JsonSerialize(source) => Self::Serialize { source },
        }
    }
}

/// Errors that end a directory walk.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A directory could not be listed, or one of its entries could not be read.
    #[error("failed to read directory `{path}`: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
