use thiserror::Error;

/// Failure reported by a [`Transport`](crate::Transport)
#[derive(Error, Debug)]
pub enum TransportError {
    /// The content store has no document at this address
    #[error("No document at {url}")]
    NotFound { url: String },

    /// Network, status or body decoding failure
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    /// The content store has no data for the requested generation and format
    #[error("Unknown format: {format}")]
    UnknownFormat { format: String },

    #[error(transparent)]
    Transport(TransportError),

    /// The fetched document does not have the expected shape
    #[error("Malformed payload from {url}: {source}")]
    MalformedPayload {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A Hidden Power move names a type Hidden Power can never have
    #[error("Invalid Hidden Power move: {move_name}")]
    HiddenPower { move_name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
