use ojcrawl_util::select;
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use scraper::{ElementRef, Html};

use crate::console::Console;
use crate::model::ProfileMeta;
use crate::service::scrape::Scrape;
use crate::service::Session;
use crate::Result;

/// Whether a profile page answered with `status` belongs to an existing user.
///
/// Redirects are already followed, so `status` is the final one.
pub fn profile_exists(status: StatusCode) -> bool {
    status.as_u16() < 400 && status != StatusCode::NOT_FOUND
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePageBuilder<'a> {
    base_url: &'a Url,
    username: &'a str,
}

impl<'a> ProfilePageBuilder<'a> {
    pub fn new(base_url: &'a Url, username: &'a str) -> Self {
        Self { base_url, username }
    }

    pub fn url(&self) -> Result<Url> {
        let path = format!("u/{}/", self.username);
        Ok(self.base_url.join(&path)?)
    }

    /// Fetches the page. A missing user is reported as `ProfileMeta` with `exists: false`.
    pub fn build(self, session: &mut Session, cnsl: &mut Console) -> Result<ProfileMeta> {
        let res = session.get(self.url()?, HeaderMap::new(), cnsl)?;
        let status = res.status();
        let url_final = res.url().to_string();
        if !profile_exists(status) {
            return Ok(ProfileMeta::missing(status, url_final));
        }
        let page = ProfilePage {
            content: Html::parse_document(&res.text()?),
        };
        Ok(page.extract_meta(url_final))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePage {
    content: Html,
}

impl ProfilePage {
    pub fn parse(html: &str) -> Self {
        Self {
            content: Html::parse_document(html),
        }
    }

    pub fn extract_og_title(&self) -> String {
        self.first_attr(select!(r#"meta[property="og:title"]"#), "content")
    }

    pub fn extract_og_description(&self) -> String {
        self.first_attr(select!(r#"meta[property="og:description"]"#), "content")
    }

    pub fn extract_meta(&self, url_final: String) -> ProfileMeta {
        ProfileMeta::found(
            url_final,
            self.extract_og_title(),
            self.extract_og_description(),
        )
    }
}

impl Scrape for ProfilePage {
    fn elem(&self) -> ElementRef {
        self.content.root_element()
    }
}
