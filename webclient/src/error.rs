use crate::model::StatusCode;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Failure reported by (or while talking to) the vault server.
///
/// Server-reported variants display the server's message verbatim so it can be
/// surfaced to the user as is.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("Failed to parse as URL '{url}'")]
    InvalidSyntaxUrl {
        url: String,

        #[source]
        source: url::ParseError,
    },

    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The stored content of a secret is not valid structured text.
#[derive(thiserror::Error, Debug)]
#[error("Malformed secret content: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);
