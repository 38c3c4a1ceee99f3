//! Pulls ASP.NET hidden postback fields out of fetched markup.
//!
//! This is caller-side parsing: the portal client itself never inspects pages.

use scraper::{Html, Selector};
use tracing::warn;

pub const VIEW_STATE: &str = "__VIEWSTATE";

/// Returns the `value` of the first `<input name="{name}">` in `markup`.
pub fn hidden_field(markup: &str, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"input[name="{name}"]"#)).ok()?;
    let document = Html::parse_document(markup);
    let value = document
        .select(&selector)
        .next()?
        .value()
        .attr("value")?
        .to_string();
    Some(value)
}

/// The page's view-state, or an empty string if it has none.
pub fn view_state(markup: &str) -> String {
    hidden_field(markup, VIEW_STATE).unwrap_or_else(|| {
        warn!("Page carries no __VIEWSTATE; posting back without one");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_FORM: &str = r#"
        <html><body>
        <form name="Form1" method="post" action="default2.aspx" id="Form1">
        <input type="hidden" name="__VIEWSTATE" value="dDwyODE2NTM0OTg7Oz4=" />
        <input name="TextBox1" type="text" id="TextBox1" />
        </form></body></html>"#;

    #[test]
    fn extracts_view_state() {
        assert_eq!(view_state(LOGIN_FORM), "dDwyODE2NTM0OTg7Oz4=");
    }

    #[test]
    fn missing_field_yields_none_and_empty_view_state() {
        assert_eq!(hidden_field("<html></html>", VIEW_STATE), None);
        assert_eq!(view_state("<html></html>"), "");
    }

    #[test]
    fn input_without_value_yields_none() {
        assert_eq!(hidden_field(LOGIN_FORM, "TextBox1"), None);
    }
}
