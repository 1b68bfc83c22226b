use reqwest::header::HeaderMap;
use reqwest::Url;

use crate::console::Console;
use crate::service::Session;

static CSRF_COOKIE_NAME: &str = "csrftoken";

/// Returns the anti-forgery token, visiting the landing page once if it is unknown.
///
/// The token lives in the session's cookie jar, so once observed it is reused
/// without any request. Failing to reach the landing page is not an error:
/// read-only queries work without a token.
pub fn ensure_token(session: &mut Session, base_url: &Url, cnsl: &mut Console) -> Option<String> {
    if let Some(token) = session.cookie(base_url, CSRF_COOKIE_NAME) {
        return Some(token);
    }
    if let Err(err) = session.get(base_url.clone(), HeaderMap::new(), cnsl) {
        cnsl.warn(&format!("Could not get csrf token : {}", err))
            .unwrap_or(());
        return None;
    }
    session.cookie(base_url, CSRF_COOKIE_NAME)
}
