//! [`HttpPortalClient`]: the reqwest-backed [`PortalService`].

use std::sync::Arc;

use async_trait::async_trait;
use portal::{
    Credentials, FormContext, PageResponse, PortalError, PortalResult, PortalService, SchoolYear,
    SessionToken, StudentId, TermQuery, TextCodec, SESSION_COOKIE_NAME,
};
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::redirect::Policy;
use reqwest::RequestBuilder;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::codec::GbkCodec;
use crate::config::ClientConfig;
use crate::cookie::{find_set_cookie, session_cookie};
use crate::endpoints::{self, fields, Page};
use crate::form::{FormBody, FORM_CONTENT_TYPE};

/// Redirect hops followed when fetching the landing page.
const LANDING_MAX_REDIRECTS: usize = 5;

/// HTTP client for the academic portal.
///
/// Cheap to clone; clones share connection pools. Holds no per-call state, so
/// one instance may serve concurrent callers.
#[derive(Clone)]
pub struct HttpPortalClient {
    base_url: Url,
    /// Never follows redirects: login success is observed as the 3xx itself.
    client: reqwest::Client,
    /// Follows redirects; used only for the landing page, which some
    /// deployments serve behind a cookieless-session redirect.
    landing_client: reqwest::Client,
    codec: Arc<dyn TextCodec>,
}

impl std::fmt::Debug for HttpPortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPortalClient")
            .field("base_url", &self.base_url.as_str())
            .field("codec", &self.codec.name())
            .finish_non_exhaustive()
    }
}

impl HttpPortalClient {
    /// Creates a client that transcodes with GBK.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Configuration`] for an invalid base URL, a zero
    /// timeout, or if the HTTP transport cannot be initialised.
    pub fn new(config: &ClientConfig) -> PortalResult<Self> {
        Self::with_codec(config, Arc::new(GbkCodec))
    }

    /// Creates a client with a caller-supplied text codec.
    pub fn with_codec(config: &ClientConfig, codec: Arc<dyn TextCodec>) -> PortalResult<Self> {
        let base_url = config.parsed_base_url()?;
        config.validate_timeouts()?;

        let client = Self::transport(config, Policy::none())?;
        let landing_client = Self::transport(config, Policy::limited(LANDING_MAX_REDIRECTS))?;

        debug!(base_url = %base_url, codec = codec.name(), "Portal client configured");

        Ok(Self {
            base_url,
            client,
            landing_client,
            codec,
        })
    }

    fn transport(config: &ClientConfig, redirect: Policy) -> PortalResult<reqwest::Client> {
        reqwest::Client::builder()
            .redirect(redirect)
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| PortalError::configuration(format!("HTTP client: {e}")))
    }

    /// The validated base URL all page paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `page` against the base URL, adding `xh` when a student is given.
    ///
    /// The page name is appended as a path segment rather than resolved as a
    /// relative reference, so `http://host/jw` and `http://host/jw/` both yield
    /// `http://host/jw/<page>`. Query parameters already on the base URL are kept.
    pub fn page_url(&self, page: Page, student: Option<&StudentId>) -> Url {
        let mut url = self.base_url.clone();
        // Infallible: `parsed_base_url` rejected cannot-be-a-base URLs.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(page.path());
        }
        if let Some(student) = student {
            url.query_pairs_mut()
                .append_pair(fields::STUDENT_ID, student.as_str());
        }
        url
    }

    async fn get_report(
        &self,
        page: Page,
        student: &StudentId,
        session: &SessionToken,
    ) -> PortalResult<PageResponse> {
        let request = self
            .client
            .get(self.page_url(page, Some(student)))
            .header(COOKIE, session_cookie(session));
        self.send(request).await
    }

    async fn post_report(
        &self,
        page: Page,
        student: &StudentId,
        session: &SessionToken,
        form: FormBody,
    ) -> PortalResult<PageResponse> {
        let body = form.encode(self.codec.as_ref())?;
        let request = self
            .client
            .post(self.page_url(page, Some(student)))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(COOKIE, session_cookie(session))
            .body(body);
        self.send(request).await
    }

    /// Sends `request`, reads the whole body, and decodes it.
    ///
    /// Single attempt. The status is reported as-is; only failing to complete
    /// the exchange is an error.
    async fn send(&self, request: RequestBuilder) -> PortalResult<PageResponse> {
        let response = request.send().await.map_err(PortalError::transport)?;
        let status = response.status().as_u16();

        let bytes = response.bytes().await.map_err(PortalError::transport)?;
        let body = self.codec.decode(&bytes);

        debug!(status, bytes = bytes.len(), "Portal page received");
        Ok(PageResponse { status, body })
    }
}

#[async_trait]
impl PortalService for HttpPortalClient {
    #[instrument(level = "debug", skip_all)]
    async fn fetch_login_page(&self) -> PortalResult<String> {
        let request = self.landing_client.get(self.base_url.clone());
        self.send(request).await.map(|page| page.body)
    }

    // The portal signals a successful login only by redirecting to the main
    // frame with a fresh session cookie. A rejected login re-renders the form
    // with 200. If the portal ever changes this, revisit here rather than
    // widening the check.
    #[instrument(level = "debug", skip_all, fields(username = %credentials.username))]
    async fn login(
        &self,
        credentials: &Credentials,
        view_state: &str,
    ) -> PortalResult<SessionToken> {
        let body = endpoints::login_form(credentials, view_state).encode(self.codec.as_ref())?;
        let response = self
            .client
            .post(self.page_url(Page::Login, None))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(PortalError::transport)?;

        let status = response.status();
        let token = if status.is_redirection() {
            find_set_cookie(response.headers(), SESSION_COOKIE_NAME).and_then(SessionToken::new)
        } else {
            None
        };

        match token {
            Some(token) => {
                info!(status = status.as_u16(), "Portal login accepted");
                Ok(token)
            }
            None => {
                warn!(status = status.as_u16(), "Portal login rejected");
                Err(PortalError::InvalidCredentials)
            }
        }
    }

    #[instrument(level = "debug", skip_all, fields(student = %student))]
    async fn fetch_default_courses(
        &self,
        student: &StudentId,
        session: &SessionToken,
    ) -> PortalResult<PageResponse> {
        self.get_report(Page::Timetable, student, session).await
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(student = %student, year = %term.school_year, semester = %term.semester)
    )]
    async fn fetch_courses(
        &self,
        student: &StudentId,
        session: &SessionToken,
        term: &TermQuery,
        form: &FormContext,
    ) -> PortalResult<PageResponse> {
        let body = endpoints::timetable_form(term, form);
        self.post_report(Page::Timetable, student, session, body)
            .await
    }

    #[instrument(level = "debug", skip_all, fields(student = %student))]
    async fn fetch_default_exams(
        &self,
        student: &StudentId,
        session: &SessionToken,
    ) -> PortalResult<PageResponse> {
        self.get_report(Page::Exams, student, session).await
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(student = %student, year = %term.school_year, semester = %term.semester)
    )]
    async fn fetch_exams(
        &self,
        student: &StudentId,
        session: &SessionToken,
        term: &TermQuery,
        form: &FormContext,
    ) -> PortalResult<PageResponse> {
        let body = endpoints::exams_form(term, form);
        self.post_report(Page::Exams, student, session, body).await
    }

    #[instrument(level = "debug", skip_all, fields(student = %student))]
    async fn fetch_scores_base(
        &self,
        student: &StudentId,
        session: &SessionToken,
    ) -> PortalResult<PageResponse> {
        self.get_report(Page::Scores, student, session).await
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(student = %student, year = %school_year)
    )]
    async fn fetch_scores(
        &self,
        student: &StudentId,
        session: &SessionToken,
        school_year: &SchoolYear,
        view_state: &str,
    ) -> PortalResult<PageResponse> {
        let body = endpoints::year_scores_form(school_year, view_state);
        self.post_report(Page::Scores, student, session, body).await
    }

    #[instrument(level = "debug", skip_all, fields(student = %student))]
    async fn fetch_major_scores(
        &self,
        student: &StudentId,
        session: &SessionToken,
        view_state: &str,
    ) -> PortalResult<PageResponse> {
        let body = endpoints::all_scores_form(view_state);
        self.post_report(Page::Scores, student, session, body).await
    }

    #[instrument(level = "debug", skip_all, fields(student = %student))]
    async fn fetch_total_credit(
        &self,
        student: &StudentId,
        session: &SessionToken,
        view_state: &str,
    ) -> PortalResult<PageResponse> {
        let body = endpoints::credit_summary_form(view_state);
        self.post_report(Page::Scores, student, session, body).await
    }
}
