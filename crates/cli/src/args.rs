//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "portal-cli",
    version,
    about = "Log into the academic affairs portal and fetch report pages"
)]
pub struct Cli {
    /// Portal root URL, e.g. http://jw.example.edu.cn/
    #[arg(long, env = "PORTAL_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// TOML file with client settings (base_url, timeouts, user_agent).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Print `{status, body}` JSON instead of the raw page.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log line format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the login page.
    LoginPage,

    /// Log in and print the session token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Print the timetable, optionally for a given term.
    Courses(TermArgs),

    /// Print the exam schedule, optionally for a given term.
    Exams(TermArgs),

    /// Print the score page, or the scores of one year.
    Scores {
        #[command(flatten)]
        auth: AuthArgs,
        /// Academic year, e.g. 2021-2022.
        #[arg(long)]
        year: Option<String>,
    },

    /// Print the scores of every year.
    MajorScores(AuthArgs),

    /// Print the credit summary.
    TotalCredit(AuthArgs),
}

#[derive(Debug, Clone, Args)]
pub struct AuthArgs {
    /// Student number.
    #[arg(long)]
    pub student: String,
    /// Session token returned by `login`.
    #[arg(long, env = "PORTAL_SESSION", hide_env_values = true)]
    pub session: String,
}

#[derive(Debug, Clone, Args)]
pub struct TermArgs {
    #[command(flatten)]
    pub auth: AuthArgs,
    /// Academic year, e.g. 2021-2022.
    #[arg(long, requires = "semester")]
    pub year: Option<String>,
    /// Semester label as shown in the portal's dropdown.
    #[arg(long, requires = "year")]
    pub semester: Option<String>,
    /// Control that triggers the postback.
    #[arg(long, default_value = "xqd")]
    pub event_target: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_term_query() {
        let cli = Cli::try_parse_from([
            "portal-cli",
            "--base-url",
            "http://jw.local/",
            "courses",
            "--student",
            "20210001",
            "--session",
            "sess-abc",
            "--year",
            "2021-2022",
            "--semester",
            "1",
        ])
        .unwrap();

        match cli.command {
            Command::Courses(term) => {
                assert_eq!(term.auth.student, "20210001");
                assert_eq!(term.year.as_deref(), Some("2021-2022"));
                assert_eq!(term.event_target, "xqd");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn year_without_semester_is_rejected() {
        let result = Cli::try_parse_from([
            "portal-cli",
            "exams",
            "--student",
            "20210001",
            "--session",
            "sess-abc",
            "--year",
            "2021-2022",
        ]);
        assert!(result.is_err());
    }
}
