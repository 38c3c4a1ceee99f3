//! Fixed endpoint table: page paths, form field names, and the legacy labels
//! the portal expects in button and dropdown fields.
//!
//! Every request the client sends is assembled from the constants and form
//! builders in this module. If the portal is upgraded, this is the only place
//! paths and field names change.

use portal::{Credentials, FormContext, SchoolYear, TermQuery};

use crate::form::FormBody;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// A server-side script the client talks to, addressed relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Login form postback target.
    Login,
    /// Student timetable.
    Timetable,
    /// Exam schedule.
    Exams,
    /// Score query form and results (also hosts the credit summary).
    Scores,
}

impl Page {
    /// Path segment appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Page::Login => "default2.aspx",
            Page::Timetable => "xskbcx.aspx",
            Page::Exams => "xskscx.aspx",
            Page::Scores => "xscjcx.aspx",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// Form and query field names.
pub mod fields {
    /// Query parameter carrying the student number on every report page.
    pub const STUDENT_ID: &str = "xh";

    // ASP.NET postback plumbing.
    pub const EVENT_TARGET: &str = "__EVENTTARGET";
    pub const EVENT_ARGUMENT: &str = "__EVENTARGUMENT";
    pub const VIEW_STATE: &str = "__VIEWSTATE";

    // Login form.
    pub const USERNAME: &str = "TextBox1";
    pub const PASSWORD: &str = "TextBox2";
    pub const ROLE: &str = "RadioButtonList1";
    pub const CAPTCHA: &str = "Text1";

    // Timetable and exam pages.
    pub const VIEW_MODE: &str = "xxms";
    pub const TERM_YEAR: &str = "xnd";
    pub const TERM_SEMESTER: &str = "xqd";
    pub const COURSE_INFO: &str = "kcxx";

    // Score page.
    pub const LANGUAGE: &str = "hidLanguage";
    pub const SCORE_YEAR: &str = "ddlXN";
    pub const SCORE_SEMESTER: &str = "ddlXQ";
    pub const COURSE_KIND: &str = "ddl_kcxz";
    pub const YEAR_SCORES_BUTTON: &str = "btn_xn";
    pub const ALL_SCORES_BUTTON: &str = "btn_zcj";
    pub const CREDIT_SUMMARY_BUTTON: &str = "Button1";
}

/// Fixed values the portal compares against its own GBK captions.
pub mod labels {
    /// Control that submits the login form.
    pub const LOGIN_BUTTON: &str = "Button1";
    /// "Student" role on the login form.
    pub const STUDENT_ROLE: &str = "学生";
    /// "List" timetable layout.
    pub const LIST_VIEW: &str = "列表";
    /// "Scores by year" button caption.
    pub const YEAR_SCORES: &str = "学年成绩";
    /// "Scores for all years" button caption.
    pub const ALL_SCORES: &str = "历年成绩";
    /// "Score statistics" button caption; renders the credit summary.
    pub const CREDIT_SUMMARY: &str = "成绩统计";
}

// ---------------------------------------------------------------------------
// Form builders
// ---------------------------------------------------------------------------

/// Login form submitted to [`Page::Login`].
pub fn login_form(credentials: &Credentials, view_state: &str) -> FormBody {
    FormBody::new()
        .text(fields::EVENT_TARGET, labels::LOGIN_BUTTON)
        .text(fields::EVENT_ARGUMENT, "")
        .text(fields::VIEW_STATE, view_state)
        .text(fields::USERNAME, credentials.username.as_str())
        .text(fields::PASSWORD, credentials.password.expose())
        .legacy(fields::ROLE, labels::STUDENT_ROLE)
        .text(fields::CAPTCHA, "")
}

/// Term selection posted back to [`Page::Timetable`].
pub fn timetable_form(term: &TermQuery, form: &FormContext) -> FormBody {
    FormBody::new()
        .text(fields::EVENT_TARGET, form.event_target.as_str())
        .text(fields::EVENT_ARGUMENT, "")
        .text(fields::VIEW_STATE, form.view_state.as_str())
        .legacy(fields::VIEW_MODE, labels::LIST_VIEW)
        .text(fields::TERM_YEAR, term.school_year.as_str())
        .legacy(fields::TERM_SEMESTER, term.semester.as_str())
        .text(fields::COURSE_INFO, "")
}

/// Term selection posted back to [`Page::Exams`].
pub fn exams_form(term: &TermQuery, form: &FormContext) -> FormBody {
    FormBody::new()
        .text(fields::EVENT_TARGET, form.event_target.as_str())
        .text(fields::EVENT_ARGUMENT, "")
        .text(fields::VIEW_STATE, form.view_state.as_str())
        .text(fields::TERM_YEAR, term.school_year.as_str())
        .legacy(fields::TERM_SEMESTER, term.semester.as_str())
}

/// Score-page postback shell: every query on [`Page::Scores`] submits the same
/// dropdowns and differs only in which button was pressed.
fn scores_form(view_state: &str, year: &str) -> FormBody {
    FormBody::new()
        .text(fields::EVENT_TARGET, "")
        .text(fields::EVENT_ARGUMENT, "")
        .text(fields::VIEW_STATE, view_state)
        .text(fields::LANGUAGE, "")
        .text(fields::SCORE_YEAR, year)
        .text(fields::SCORE_SEMESTER, "")
        .text(fields::COURSE_KIND, "")
}

/// Scores for one academic year.
pub fn year_scores_form(school_year: &SchoolYear, view_state: &str) -> FormBody {
    scores_form(view_state, school_year.as_str())
        .legacy(fields::YEAR_SCORES_BUTTON, labels::YEAR_SCORES)
}

/// Scores for every year on record.
pub fn all_scores_form(view_state: &str) -> FormBody {
    scores_form(view_state, "").legacy(fields::ALL_SCORES_BUTTON, labels::ALL_SCORES)
}

/// Credit summary.
pub fn credit_summary_form(view_state: &str) -> FormBody {
    scores_form(view_state, "").legacy(fields::CREDIT_SUMMARY_BUTTON, labels::CREDIT_SUMMARY)
}
