//! Standard errors used by all functions in the crate.

use crate::decode::DecodeError;
use std::fmt;

/// Error collecting all possible failures of the Paystack client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport-level failure (DNS, connection, timeout of the underlying HTTP client).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Paystack API endpoint, either through an HTTP status `>= 400`
    /// or through `"status": false` in the response envelope.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The response payload could not be mapped onto the requested type.
    #[error("Error decoding response: {0}")]
    DecodeError(#[from] DecodeError),
    /// The request body could not be encoded.
    #[error("Error serializing request body: {0}")]
    SerializationError(#[from] serde_json::Error),
    /// The [`Context`](crate::Context) used for the call was canceled.
    #[error("Request canceled")]
    Cancelled,
    /// The deadline of the [`Context`](crate::Context) used for the call expired.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,
    /// No API key could be found while building a client from the environment.
    #[error("Missing Paystack API key: set the {0} environment variable")]
    MissingApiKey(&'static str),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Paystack HTTP APIs error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// The `message` field of the response envelope, or a generic description
    /// when the server did not send one.
    pub message: String,
    /// Error class, when the API provides one (e.g. `validation_error`).
    pub r#type: Option<String>,
    /// Machine readable error code, when the API provides one.
    pub code: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paystack HTTP error {}: {}", self.status, self.message)?;

        if let Some(ref r#type) = self.r#type {
            write!(f, " ({})", r#type)?;
        }

        if let Some(ref code) = self.code {
            write!(f, "\nError code: {}", code)?;
        }

        Ok(())
    }
}
