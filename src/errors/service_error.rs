//! Errors returned by the remote service wrappers.

use std::path::PathBuf;

use aws_smithy_types::error::display::DisplayErrorContext;
use thiserror::Error;

/// Result type for service calls
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type shared by the news client and every AWS wrapper.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// An AWS SDK call failed (transport, throttling, modeled service error)
    #[error("{service} request failed: {message}")]
    Aws {
        service: &'static str,
        message: String,
    },

    /// The news API request failed at the HTTP layer
    #[error("News API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The news API answered with an error payload
    #[error("News API error: {0}")]
    News(String),

    /// Reading an input file or writing an output file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A setting the operation needs was never provided
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// Input rejected before any request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A response lacked a field the caller depends on
    #[error("{service} response is missing {field}")]
    MissingField {
        service: &'static str,
        field: &'static str,
    },

    /// The synthesized audio stream could not be collected
    #[error("Failed to read audio stream: {0}")]
    AudioStream(String),
}

impl ServiceError {
    /// Wrap an SDK error, keeping the full source chain in the message.
    pub fn aws<E>(service: &'static str, err: E) -> Self
    where
        E: std::error::Error,
    {
        Self::Aws {
            service,
            message: DisplayErrorContext(err).to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
