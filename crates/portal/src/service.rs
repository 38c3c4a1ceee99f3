//! The [`PortalService`] port: one method per portal page.
//!
//! Infrastructure crates implement this trait; callers depend only on it.
//! Every method performs exactly one HTTP round trip and holds no state between
//! calls apart from what the caller passes in.

use async_trait::async_trait;

use crate::{
    Credentials, FormContext, PageResponse, PortalResult, SchoolYear, SessionToken, StudentId,
    TermQuery,
};

/// Access to the academic portal's login flow and report pages.
///
/// Multi-step flows (fetch login page, log in, fetch a report, post back a
/// query) must be sequenced by the caller in the order the portal expects.
/// The view-state and event target for each postback come from the markup of
/// the page fetched just before it.
#[async_trait]
pub trait PortalService: Send + Sync {
    /// Fetches the portal landing page, which hosts the login form.
    async fn fetch_login_page(&self) -> PortalResult<String>;

    /// Submits the login form and returns the issued session token.
    ///
    /// # Errors
    ///
    /// - [`crate::PortalError::InvalidCredentials`] if the portal answers with
    ///   anything other than a redirect carrying the session cookie.
    /// - [`crate::PortalError::Transport`] on network failure.
    async fn login(&self, credentials: &Credentials, view_state: &str)
        -> PortalResult<SessionToken>;

    /// Fetches the timetable page for the current term.
    async fn fetch_default_courses(
        &self,
        student: &StudentId,
        session: &SessionToken,
    ) -> PortalResult<PageResponse>;

    /// Posts a term selection back to the timetable page.
    async fn fetch_courses(
        &self,
        student: &StudentId,
        session: &SessionToken,
        term: &TermQuery,
        form: &FormContext,
    ) -> PortalResult<PageResponse>;

    /// Fetches the exam schedule page for the current term.
    async fn fetch_default_exams(
        &self,
        student: &StudentId,
        session: &SessionToken,
    ) -> PortalResult<PageResponse>;

    /// Posts a term selection back to the exam schedule page.
    async fn fetch_exams(
        &self,
        student: &StudentId,
        session: &SessionToken,
        term: &TermQuery,
        form: &FormContext,
    ) -> PortalResult<PageResponse>;

    /// Fetches the score query page (the form, without results).
    async fn fetch_scores_base(
        &self,
        student: &StudentId,
        session: &SessionToken,
    ) -> PortalResult<PageResponse>;

    /// Queries the scores for one academic year.
    async fn fetch_scores(
        &self,
        student: &StudentId,
        session: &SessionToken,
        school_year: &SchoolYear,
        view_state: &str,
    ) -> PortalResult<PageResponse>;

    /// Queries the scores of every year on record.
    async fn fetch_major_scores(
        &self,
        student: &StudentId,
        session: &SessionToken,
        view_state: &str,
    ) -> PortalResult<PageResponse>;

    /// Queries the credit summary.
    async fn fetch_total_credit(
        &self,
        student: &StudentId,
        session: &SessionToken,
        view_state: &str,
    ) -> PortalResult<PageResponse>;
}
