use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LipidQueryError {
    #[error("ppm tolerance must be non-negative, got {0}")]
    NegativeTolerance(i64),

    #[error("adduct {0:?} is not present in the adduct table")]
    UnknownAdduct(String),

    #[error("malformed adduct label {label:?}: {reason}")]
    MalformedAdductLabel { label: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LipidQueryError>;

impl LipidQueryError {
    pub fn custom(msg: impl Display) -> Self {
        Self::Other(msg.to_string())
    }

    pub(crate) fn malformed_label(label: &str, reason: impl Display) -> Self {
        Self::MalformedAdductLabel {
            label: label.to_string(),
            reason: reason.to_string(),
        }
    }
}
