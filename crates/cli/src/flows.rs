//! Multi-step portal flows driven by the CLI.
//!
//! The portal is a postback application: a query page must be fetched first so
//! its view-state can be echoed back with the query. Each flow sequences those
//! calls against any [`PortalService`].

use anyhow::{bail, Context, Result};
use portal::{
    Credentials, FormContext, PageResponse, Password, PortalService, SchoolYear, Semester,
    SessionToken, StudentId, TermQuery, Username,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::args::{AuthArgs, Command, TermArgs};
use crate::viewstate;

/// What a command produced, ready to be printed.
#[derive(Debug)]
pub enum Outcome {
    /// A page fetched without a status (the landing page).
    Markup(String),
    /// A report page.
    Page(PageResponse),
    /// A freshly issued session.
    Session(SessionToken),
}

#[derive(Serialize)]
struct SessionOutput<'a> {
    session: &'a str,
}

#[derive(Serialize)]
struct MarkupOutput<'a> {
    body: &'a str,
}

impl Outcome {
    /// Renders the outcome for stdout.
    pub fn render(&self, json: bool) -> Result<String> {
        let rendered = match (self, json) {
            (Outcome::Markup(body), false) => body.clone(),
            (Outcome::Markup(body), true) => serde_json::to_string(&MarkupOutput { body })?,
            (Outcome::Page(page), false) => page.body.clone(),
            (Outcome::Page(page), true) => serde_json::to_string(page)?,
            (Outcome::Session(token), false) => token.expose().to_string(),
            (Outcome::Session(token), true) => serde_json::to_string(&SessionOutput {
                session: token.expose(),
            })?,
        };
        Ok(rendered)
    }

    /// Fails for report pages the portal did not answer with 2xx.
    pub fn ensure_success(&self) -> Result<()> {
        match self {
            Outcome::Page(page) => check_served(page),
            Outcome::Markup(_) | Outcome::Session(_) => Ok(()),
        }
    }
}

fn check_served(page: &PageResponse) -> Result<()> {
    if page.is_redirect() {
        bail!(
            "portal redirected (status {}); the session has probably expired",
            page.status
        );
    }
    if !page.is_success() {
        bail!("portal answered with status {}", page.status);
    }
    Ok(())
}

/// Runs one CLI command against `service`.
pub async fn run(service: &dyn PortalService, command: Command) -> Result<Outcome> {
    match command {
        Command::LoginPage => Ok(Outcome::Markup(service.fetch_login_page().await?)),
        Command::Login { username, password } => {
            let credentials = Credentials::new(
                Username::new(username).context("username must not be empty")?,
                Password::new(password).context("password must not be empty")?,
            );
            login(service, &credentials).await.map(Outcome::Session)
        }
        Command::Courses(args) => term_report(service, Report::Courses, args).await,
        Command::Exams(args) => term_report(service, Report::Exams, args).await,
        Command::Scores { auth, year } => {
            let (student, session) = auth_values(auth)?;
            let base = service.fetch_scores_base(&student, &session).await?;
            let Some(year) = year else {
                return Ok(Outcome::Page(base));
            };
            let year = SchoolYear::new(year).context("year must not be empty")?;
            let view_state = postback_view_state(&base)?;
            let page = service
                .fetch_scores(&student, &session, &year, &view_state)
                .await?;
            Ok(Outcome::Page(page))
        }
        Command::MajorScores(auth) => {
            let (student, session) = auth_values(auth)?;
            let base = service.fetch_scores_base(&student, &session).await?;
            let view_state = postback_view_state(&base)?;
            let page = service
                .fetch_major_scores(&student, &session, &view_state)
                .await?;
            Ok(Outcome::Page(page))
        }
        Command::TotalCredit(auth) => {
            let (student, session) = auth_values(auth)?;
            let base = service.fetch_scores_base(&student, &session).await?;
            let view_state = postback_view_state(&base)?;
            let page = service
                .fetch_total_credit(&student, &session, &view_state)
                .await?;
            Ok(Outcome::Page(page))
        }
    }
}

/// Fetches the login form for its view-state, then submits the credentials.
pub async fn login(service: &dyn PortalService, credentials: &Credentials) -> Result<SessionToken> {
    let login_page = service.fetch_login_page().await?;
    let view_state = viewstate::view_state(&login_page);
    let token = service
        .login(credentials, &view_state)
        .await
        .context("portal login failed")?;
    info!(username = %credentials.username, "Session established");
    Ok(token)
}

#[derive(Debug, Clone, Copy)]
enum Report {
    Courses,
    Exams,
}

async fn term_report(
    service: &dyn PortalService,
    report: Report,
    args: TermArgs,
) -> Result<Outcome> {
    let (student, session) = auth_values(args.auth)?;
    let base = match report {
        Report::Courses => service.fetch_default_courses(&student, &session).await?,
        Report::Exams => service.fetch_default_exams(&student, &session).await?,
    };

    let (Some(year), Some(semester)) = (args.year, args.semester) else {
        return Ok(Outcome::Page(base));
    };
    let term = TermQuery::new(
        SchoolYear::new(year).context("year must not be empty")?,
        Semester::new(semester).context("semester must not be empty")?,
    );
    let form = FormContext::new(postback_view_state(&base)?, args.event_target);

    let page = match report {
        Report::Courses => service.fetch_courses(&student, &session, &term, &form).await?,
        Report::Exams => service.fetch_exams(&student, &session, &term, &form).await?,
    };
    Ok(Outcome::Page(page))
}

fn auth_values(auth: AuthArgs) -> Result<(StudentId, SessionToken)> {
    let student = StudentId::new(auth.student).context("student number must not be empty")?;
    let session = SessionToken::new(auth.session).context("session token must not be empty")?;
    Ok((student, session))
}

/// View-state of a page that is about to be posted back to.
fn postback_view_state(base: &PageResponse) -> Result<String> {
    if !base.is_success() {
        warn!(status = base.status, "Query page was not served; not posting back");
        check_served(base)?;
    }
    Ok(viewstate::view_state(&base.body))
}
