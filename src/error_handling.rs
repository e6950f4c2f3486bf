use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Ways a trace can fail.
///
/// All variants are captured into the returned [`crate::TraceResult`]
/// (`failed` + `failure_message`) rather than propagated past the `trace`
/// boundary, so callers always receive a well-formed result object.
#[derive(Error, Debug)]
pub enum TraceError {
    /// The input URL was empty. Detected before any network activity.
    #[error("empty URL")]
    EmptyUrl,

    /// The input URL did not parse, even after scheme normalization.
    /// Detected before any network activity.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure on a hop: DNS, connect, timeout, TLS, or a
    /// malformed response. Aborts the trace; hops recorded on prior
    /// iterations are preserved.
    #[error("{0}")]
    Transport(#[from] ReqwestError),

    /// A redirect-class response carried no usable `Location` header.
    /// The message text is part of the serialized output contract.
    #[error("Location header is empty")]
    MissingLocation,
}
