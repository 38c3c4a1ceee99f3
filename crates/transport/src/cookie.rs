//! Session-cookie plumbing: reading `Set-Cookie` on login and writing `Cookie`
//! on every authenticated request.

use portal::{SessionToken, SESSION_COOKIE_NAME};
use reqwest::header::{HeaderMap, SET_COOKIE};

/// Returns the value of the first `Set-Cookie` header that sets `name`.
///
/// Attributes (`path`, `HttpOnly`, ...) are ignored. A value wrapped in one pair
/// of double quotes is returned without them. Headers that are not valid
/// visible ASCII are skipped.
pub fn find_set_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| {
            let pair = value.split(';').next()?;
            let (cookie_name, cookie_value) = pair.split_once('=')?;
            (cookie_name.trim() == name).then(|| unquote(cookie_value.trim()))
        })
        .next()
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

/// Builds the `Cookie` header value that authenticates a request.
pub fn session_cookie(session: &SessionToken) -> String {
    format!("{SESSION_COOKIE_NAME}={}", session.expose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(values: &[&'static str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for value in values {
            map.append(SET_COOKIE, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn finds_session_cookie_among_others() {
        let map = headers(&[
            "lang=zh-CN; path=/",
            "ASP.NET_SessionId=abc123; path=/; HttpOnly",
        ]);
        assert_eq!(find_set_cookie(&map, SESSION_COOKIE_NAME), Some("abc123"));
    }

    #[test]
    fn missing_cookie_yields_none() {
        let map = headers(&["lang=zh-CN; path=/"]);
        assert_eq!(find_set_cookie(&map, SESSION_COOKIE_NAME), None);
        assert_eq!(find_set_cookie(&HeaderMap::new(), SESSION_COOKIE_NAME), None);
    }

    #[test]
    fn name_match_is_exact() {
        let map = headers(&["ASP.NET_SessionIdX=nope", "XASP.NET_SessionId=nope"]);
        assert_eq!(find_set_cookie(&map, SESSION_COOKIE_NAME), None);
    }

    #[test]
    fn empty_value_is_returned_as_empty() {
        let map = headers(&["ASP.NET_SessionId=; path=/"]);
        assert_eq!(find_set_cookie(&map, SESSION_COOKIE_NAME), Some(""));
    }

    #[test]
    fn quoted_value_is_unwrapped_once() {
        let map = headers(&[r#"ASP.NET_SessionId="abc"; path=/"#]);
        assert_eq!(find_set_cookie(&map, SESSION_COOKIE_NAME), Some("abc"));

        let map = headers(&[r#"ASP.NET_SessionId=""abc""; path=/"#]);
        assert_eq!(find_set_cookie(&map, SESSION_COOKIE_NAME), Some(r#""abc""#));
    }

    #[test]
    fn lone_quote_is_kept() {
        let map = headers(&[r#"ASP.NET_SessionId="; path=/"#]);
        assert_eq!(find_set_cookie(&map, SESSION_COOKIE_NAME), Some("\""));
    }

    #[test]
    fn session_cookie_uses_fixed_name() {
        let token = SessionToken::new("sess-abc").unwrap();
        assert_eq!(session_cookie(&token), "ASP.NET_SessionId=sess-abc");
    }
}
