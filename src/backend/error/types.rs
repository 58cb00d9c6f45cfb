/**
 * Backend Error Types
 *
 * This module defines error types raised by the server-side contracts.
 * These errors are returned from route handlers and providers and can be
 * converted to HTTP responses.
 *
 * # Error Categories
 *
 * - `HandlerError` - a route rejected its request (bad params, forbidden fetch)
 * - `Unauthorized` - request headers failed validation
 * - `RouteNotFound` - no handler registered for the action
 * - `Download` - a provider could not produce a resource
 * - `Element` - element construction or transform failed
 * - `SerializationError` - a route result could not be encoded
 */

use crate::shared::ElementError;
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// ```rust,ignore
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid params");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Request headers failed validation
    #[error("Unauthorized request")]
    Unauthorized,

    /// No route registered for the requested action
    #[error("Unknown action: {action}")]
    RouteNotFound { action: String },

    /// A provider failed to download a resource
    #[error("Download of {url} failed: {message}")]
    Download { url: String, message: String },

    /// Element error (from the shared module)
    #[error(transparent)]
    Element(#[from] ElementError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new download error
    pub fn download(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Download {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// - `HandlerError` - the status carried by the error
    /// - `Unauthorized` - 401
    /// - `RouteNotFound` - 404
    /// - `Download` - 502
    /// - `Element` - 400, the request carried bad content
    /// - `SerializationError` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Download { .. } => StatusCode::BAD_GATEWAY,
            Self::Element(_) => StatusCode::BAD_REQUEST,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
