use std::io::Write as _;
use std::time::Duration;

use reqwest::blocking::{Client, Request, RequestBuilder, Response};
use reqwest::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE, COOKIE};
use reqwest::redirect::Policy;
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;

use crate::service::{CookieStorage, ResponseExt as _};
use crate::{Console, FetchError};

/// Max number of redirects followed for one call.
pub const MAX_REDIRECTS: usize = 10;

/// HTTP context of one client instance.
///
/// The session is the only writer of its cookie jar; readers go through
/// [`Session::cookie`]. Default headers are overridden by call-specific ones.
/// Redirects are followed here rather than by the client, so that cookies set
/// on every hop end up in the jar.
#[derive(Debug)]
pub struct Session {
    client: Client,
    storage: CookieStorage,
}

impl Session {
    pub fn new(timeout: Duration, default_headers: HeaderMap) -> Result<Self, FetchError> {
        let client = Client::builder()
            .redirect(Policy::none()) // redirects manually
            .timeout(timeout)
            .default_headers(default_headers)
            .build()?;
        Ok(Self {
            client,
            storage: CookieStorage::default(),
        })
    }

    pub fn get(
        &mut self,
        url: Url,
        headers: HeaderMap,
        cnsl: &mut Console,
    ) -> Result<Response, FetchError> {
        let builder = self.client.get(url).headers(headers);
        self.send(builder, cnsl)
    }

    pub fn post_json<T: Serialize + ?Sized>(
        &mut self,
        url: Url,
        json: &T,
        headers: HeaderMap,
        cnsl: &mut Console,
    ) -> Result<Response, FetchError> {
        let builder = self.client.post(url).json(json).headers(headers);
        self.send(builder, cnsl)
    }

    pub fn cookie(&self, url: &Url, name: &str) -> Option<String> {
        self.storage.get(url, name)
    }

    fn send(
        &mut self,
        builder: RequestBuilder,
        cnsl: &mut Console,
    ) -> Result<Response, FetchError> {
        let mut req = builder.build()?;
        for _ in 0..MAX_REDIRECTS {
            let next = req.try_clone();
            let res = self.execute(req, cnsl)?;
            match (res.location_url(), next) {
                (Some(location), Some(next)) => req = redirected(next, res.status(), location),
                _ => return Ok(res),
            }
        }
        let res = self.execute(req, cnsl)?;
        match res.location_url() {
            Some(location) => Err(FetchError::TooManyRedirects(location)),
            None => Ok(res),
        }
    }

    fn execute(&mut self, mut req: Request, cnsl: &mut Console) -> Result<Response, FetchError> {
        self.storage.load_into(&mut req);
        write!(cnsl, "{:7} {} ... ", req.method().as_str(), req.url()).unwrap_or(());
        let result = self.client.execute(req);
        match &result {
            Ok(res) => writeln!(cnsl, "{}", res.status()),
            Err(_) => writeln!(cnsl, "failed"),
        }
        .unwrap_or(());
        let res = result?;
        self.storage.store_from(&res);
        Ok(res)
    }
}

/// Request for the next hop of a redirect.
///
/// 307 and 308 repeat the request as is. Other redirects of a request with a
/// body turn into a plain GET, as browsers do.
fn redirected(mut req: Request, status: StatusCode, location: Url) -> Request {
    let keeps_method = status == StatusCode::TEMPORARY_REDIRECT
        || status == StatusCode::PERMANENT_REDIRECT
        || *req.method() == Method::GET
        || *req.method() == Method::HEAD;
    if !keeps_method {
        *req.method_mut() = Method::GET;
        *req.body_mut() = None;
        req.headers_mut().remove(CONTENT_TYPE);
        req.headers_mut().remove(CONTENT_LENGTH);
    }
    req.headers_mut().remove(COOKIE);
    *req.url_mut() = location;
    req
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderValue, REFERER};

    use super::*;

    fn post_request() -> anyhow::Result<Request> {
        let client = Client::new();
        let req = client
            .post("https://example.com/graphql")
            .header(REFERER, "https://example.com/u/alice/")
            .header(COOKIE, "a=b")
            .json(&serde_json::json!({"query": "{}"}))
            .build()?;
        Ok(req)
    }

    #[test]
    fn test_redirected_post_becomes_get() -> anyhow::Result<()> {
        let location = Url::parse("https://example.com/login")?;
        let req = redirected(post_request()?, StatusCode::FOUND, location.clone());
        assert_eq!(req.method(), &Method::GET);
        assert!(req.body().is_none());
        assert_eq!(req.url(), &location);
        assert!(req.headers().get(CONTENT_TYPE).is_none());
        assert!(req.headers().get(COOKIE).is_none());
        assert_eq!(
            req.headers().get(REFERER),
            Some(&HeaderValue::from_static("https://example.com/u/alice/"))
        );
        Ok(())
    }

    #[test]
    fn test_redirected_post_keeps_method_on_307() -> anyhow::Result<()> {
        let location = Url::parse("https://example.com/graphql/")?;
        let req = redirected(post_request()?, StatusCode::TEMPORARY_REDIRECT, location);
        assert_eq!(req.method(), &Method::POST);
        assert!(req.body().is_some());
        assert!(req.headers().get(CONTENT_TYPE).is_some());
        Ok(())
    }
}
