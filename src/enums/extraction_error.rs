use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no JSON object found in model response")]
    NoJsonFound,

    #[error("candidate JSON is not an object")]
    NotAnObject,

    #[error("candidate JSON could not be parsed: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
