// Request header construction for the GitHub API.
// Pure function from an optional credential to an outbound header map.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Build request headers for an optional personal access token.
///
/// Always requests the GitHub v3 JSON media type. The token is trimmed
/// before the emptiness check, and the trimmed form is what gets sent as
/// `Authorization: token <value>`.
pub fn headers(credential: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON_MEDIA_TYPE));
    headers.insert(USER_AGENT, HeaderValue::from_static("gitfolio"));

    if let Some(token) = credential.map(str::trim).filter(|t| !t.is_empty()) {
        // Tokens with non-header characters are silently skipped rather
        // than failing header construction.
        if let Ok(value) = HeaderValue::from_str(&format!("token {}", token)) {
            headers.insert(AUTHORIZATION, value);
        }
    }

    headers
}
