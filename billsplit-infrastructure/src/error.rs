use billsplit_domain::InvalidInput;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Malformed bill split payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Payload has neither `splitMode` nor `split_mode` at the top level")]
    UnknownFormat,
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}
