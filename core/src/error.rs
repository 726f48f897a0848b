//! Error types for the pet gallery client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the endpoint and image hosts
//! both answer 404 for a missing resource. All other non-2xx responses land in
//! `HttpError` with the raw status code and body for debugging. A body that
//! decodes as JSON but fails the record shape check is `InvalidData`, distinct
//! from a body that is not JSON at all.

use thiserror::Error;

/// Errors returned by `PetClient` parse methods and the validator.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not JSON or could not be converted.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The body decoded but does not have the expected record shape.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
