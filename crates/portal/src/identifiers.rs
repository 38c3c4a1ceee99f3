//! Newtype identifiers for values threaded through portal requests.
//!
//! Every value the portal echoes back or keys a page on is wrapped in a distinct
//! newtype. This prevents accidentally passing, for example, a [`StudentId`]
//! where a [`SessionToken`] is expected even though both are strings on the wire.
//!
//! Secrets ([`SessionToken`], [`Password`]) redact themselves in `Debug` output.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Macro for secret String-wrapped newtypes.
// Like `string_id!`, but Debug is redacted and there is no Display.
// ---------------------------------------------------------------------------
macro_rules! secret_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a secret value, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Exposes the raw secret. Callers must not log the result.
            pub fn expose(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "(<redacted>)"))
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — portal keys
// ---------------------------------------------------------------------------

string_id! {
    /// A student number as assigned by the portal (e.g. `"20210001"`).
    ///
    /// Sent as the `xh` query parameter on every report page.
    StudentId
}

string_id! {
    /// The login name typed into the portal's login form.
    Username
}

string_id! {
    /// An academic-year label as the portal's year dropdown renders it
    /// (e.g. `"2021-2022"`).
    ///
    /// Never empty: an empty year does not select a term on the portal.
    SchoolYear
}

string_id! {
    /// A semester label as the portal's term dropdown renders it
    /// (e.g. `"1"`, `"2"`). Never empty, like [`SchoolYear`].
    ///
    /// Transcoded to the portal's legacy encoding before submission because
    /// some deployments use non-ASCII labels.
    Semester
}

// ---------------------------------------------------------------------------
// Secrets
// ---------------------------------------------------------------------------

secret_id! {
    /// Opaque session identifier issued by the portal on successful login.
    ///
    /// Echoed back as the [`crate::SESSION_COOKIE_NAME`] cookie on every
    /// authenticated request. The client never refreshes or validates it; the
    /// caller owns its lifecycle.
    SessionToken
}

secret_id! {
    /// A login password.
    Password
}
