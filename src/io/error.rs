use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json parse error: {0}")]
    JsonParse(#[source] serde_json::Error),

    #[error("json serialize error: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    #[error("top-level json value must be an object")]
    NotAnObject,
}
