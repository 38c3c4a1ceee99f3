//! Shared value types carried into and out of portal requests.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types group
//! several values that travel together (credentials, form context, a term
//! selection) or describe a response.

use serde::{Deserialize, Serialize};

use crate::{Password, SchoolYear, Semester, Username};

// ---------------------------------------------------------------------------
// Request inputs
// ---------------------------------------------------------------------------

/// Login form credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Value submitted as the login form's user-name field.
    pub username: Username,
    /// Value submitted as the login form's password field.
    pub password: Password,
}

impl Credentials {
    /// Creates a new [`Credentials`] pair.
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }
}

// ---------------------------------------------------------------------------

/// Postback state scraped by the caller from the previously fetched page.
///
/// Both values are opaque to the client and forwarded verbatim. Either may be
/// empty: a fresh page carries no event target, and some deployments omit the
/// view-state entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormContext {
    /// Anti-tampering token the server embedded in the page (`__VIEWSTATE`).
    pub view_state: String,
    /// Name of the control that triggered the postback (`__EVENTTARGET`).
    pub event_target: String,
}

impl FormContext {
    /// Creates a [`FormContext`] from a view-state and an event target.
    pub fn new(view_state: impl Into<String>, event_target: impl Into<String>) -> Self {
        Self {
            view_state: view_state.into(),
            event_target: event_target.into(),
        }
    }

    /// Creates a [`FormContext`] carrying only a view-state.
    pub fn with_view_state(view_state: impl Into<String>) -> Self {
        Self::new(view_state, String::new())
    }
}

// ---------------------------------------------------------------------------

/// Academic-year and semester selection submitted to the timetable and exam pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermQuery {
    /// Academic year (`xnd` field).
    pub school_year: SchoolYear,
    /// Semester label (`xqd` field).
    pub semester: Semester,
}

impl TermQuery {
    /// Creates a new [`TermQuery`].
    pub fn new(school_year: SchoolYear, semester: Semester) -> Self {
        Self {
            school_year,
            semester,
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// A fetched page: decoded markup plus the HTTP status the portal returned.
///
/// No structure is imposed on `body`; parsing the markup is the caller's job.
/// A non-2xx status is not an error at this layer: the portal answers expired
/// sessions with a redirect or an error page, and the caller decides what that
/// means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body transcoded from the portal's legacy encoding.
    pub body: String,
}

impl PageResponse {
    /// Creates a new [`PageResponse`].
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` if the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns `true` if the status is in the 3xx range.
    ///
    /// On report pages this usually means the session has expired and the
    /// portal is bouncing the caller back to the login page.
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert!(PageResponse::new(200, "").is_success());
        assert!(!PageResponse::new(302, "").is_success());
        assert!(PageResponse::new(302, "").is_redirect());
        assert!(!PageResponse::new(500, "").is_redirect());
    }

    #[test]
    fn form_context_with_view_state_has_empty_event_target() {
        let ctx = FormContext::with_view_state("dDwtMTIz");
        assert_eq!(ctx.view_state, "dDwtMTIz");
        assert!(ctx.event_target.is_empty());
    }

    #[test]
    fn page_response_serializes_status_and_body() {
        let page = PageResponse::new(200, "<html/>");
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["body"], "<html/>");
    }
}
