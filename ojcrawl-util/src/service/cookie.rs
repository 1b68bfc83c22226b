use std::convert::TryFrom as _;
use std::fmt;

use cookie::Cookie as RawCookie;
use cookie_store::CookieStore;
use reqwest::blocking::{Request, Response};
use reqwest::header::{HeaderValue, COOKIE, SET_COOKIE};
use reqwest::Url;

/// In-memory cookie jar owned by a single session.
///
/// Nothing is persisted: the jar lives and dies with its session.
#[derive(Default)]
pub struct CookieStorage {
    store: CookieStore,
}

impl fmt::Debug for CookieStorage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CookieStorage").finish()
    }
}

impl CookieStorage {
    pub fn load_into(&self, request: &mut Request) {
        let cookies = self
            .store
            .get_request_cookies(request.url())
            .map(|rc| format!("{}={}", rc.name(), rc.value()))
            .collect::<Vec<_>>();
        if cookies.is_empty() {
            return;
        }
        if let Ok(val) = HeaderValue::try_from(cookies.join("; ")) {
            request.headers_mut().insert(COOKIE, val);
        }
    }

    pub fn store_from(&mut self, response: &Response) {
        let cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|val| {
                val.to_str()
                    .ok()
                    .and_then(|cookie_str| RawCookie::parse(cookie_str.to_owned()).ok())
            });
        let url = response.url();
        self.store.store_response_cookies(cookies, url);
    }

    /// Value of the cookie `name` that would be sent with a request to `url`.
    pub fn get(&self, url: &Url, name: &str) -> Option<String> {
        self.store
            .get_request_cookies(url)
            .find(|rc| rc.name() == name)
            .map(|rc| rc.value().to_owned())
    }
}
