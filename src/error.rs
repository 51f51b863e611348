use thiserror::Error;

/// Errors produced while building, decoding, resolving or evaluating circuits.
///
/// Most of them never reach the user: the renderer skips wires that fail with
/// [Error::InvalidReference] and the [evaluator](crate::evaluate) turns
/// [Error::ArityMismatch] and [Error::MalformedLogic] into an all zero output.
/// Only [Error::GenerationFailure] and [Error::NotFound] are meant to be shown.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid pin reference {reference}: {reason}")]
    InvalidReference { reference: String, reason: String },

    #[error("expected {expected} inputs, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("malformed logic: {0}")]
    MalformedLogic(String),

    #[error("circuit generation failed: {0}")]
    GenerationFailure(String),

    #[error("no circuit found for {0:?}")]
    NotFound(String),

    #[error("unknown chip type {0:?}")]
    UnknownChipType(String),

    #[error("invalid pin token {0:?}")]
    InvalidToken(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_reference<R: ToString, S: Into<String>>(reference: R, reason: S) -> Self {
        Error::InvalidReference {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true for the errors a user is expected to see.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Error::GenerationFailure(_) | Error::NotFound(_))
    }
}
