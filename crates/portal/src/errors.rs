//! Error type for portal operations.
//!
//! [`PortalError`] distinguishes a rejected login from everything that went
//! wrong on the wire, so callers can tell "ask the user again" apart from
//! "try again later".

use thiserror::Error;

/// Result alias used throughout the portal crates.
pub type PortalResult<T> = Result<T, PortalError>;

/// Errors surfaced by a [`crate::PortalService`].
///
/// Every call either fully succeeds or fails with exactly one of these kinds.
/// No variant is retried by the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// The portal did not accept the login.
    ///
    /// Produced when the login response is not a redirect, or is a redirect
    /// without a session cookie. The portal gives no finer signal, so a wrong
    /// password and an unexpected page are indistinguishable here.
    #[error("Invalid credentials: the portal did not issue a session")]
    InvalidCredentials,

    /// The request could not be built, sent, or its response read and decoded.
    ///
    /// Never produced for a completed exchange with a non-2xx status; that is
    /// reported through [`crate::PageResponse::status`].
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the underlying failure.
        message: String,
    },

    /// The client could not be constructed from its configuration.
    ///
    /// Produced at construction time only (malformed base URL, transport
    /// builder failure); never returned from a request.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl PortalError {
    /// Creates a [`PortalError::Transport`] from anything displayable.
    pub fn transport(message: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: message.to_string(),
        }
    }

    /// Creates a [`PortalError::Configuration`] from anything displayable.
    pub fn configuration(message: impl std::fmt::Display) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }

    /// Returns `true` for [`PortalError::InvalidCredentials`].
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Returns `true` for [`PortalError::Transport`].
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns `true` for [`PortalError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
