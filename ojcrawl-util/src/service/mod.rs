use reqwest::blocking::Response;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::Url;

use crate::FetchError;

mod cookie;
pub mod scrape;
pub mod session;

pub use self::cookie::CookieStorage;
pub use self::session::Session;

pub trait ResponseExt: Sized {
    fn content_type(&self) -> String;

    fn is_json(&self) -> bool {
        self.content_type().contains("application/json")
    }

    /// Turns a response with a status of 400 or above into `FetchError::HttpStatus`.
    fn check_status(self) -> Result<Self, FetchError>;

    /// Target of a redirect response, resolved against the response url.
    fn location_url(&self) -> Option<Url>;
}

impl ResponseExt for Response {
    fn content_type(&self) -> String {
        self.headers()
            .get(CONTENT_TYPE)
            .and_then(|val| val.to_str().ok())
            .unwrap_or("")
            .to_lowercase()
    }

    fn check_status(self) -> Result<Self, FetchError> {
        let status = self.status();
        if status.is_client_error() || status.is_server_error() {
            let body = self.text().unwrap_or_default();
            Err(FetchError::http_status(status, &body))
        } else {
            Ok(self)
        }
    }

    fn location_url(&self) -> Option<Url> {
        if !self.status().is_redirection() {
            return None;
        }
        let loc_str = self.headers().get(LOCATION)?.to_str().ok()?;
        self.url().join(loc_str).ok()
    }
}
