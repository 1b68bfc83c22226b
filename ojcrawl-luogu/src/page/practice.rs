use ojcrawl_util::model::{Lookup, Uid};
use ojcrawl_util::select;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};
use scraper::{ElementRef, Html};

use crate::console::Console;
use crate::model::LentilleContext;
use crate::service::scrape::Scrape;
use crate::service::{ResponseExt as _, Session};
use crate::{FetchError, Result};

static LENTILLE_REQUEST_HEADER: &str = "x-lentille-request";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticePageBuilder<'a> {
    base_url: &'a Url,
    uid: Uid,
}

impl<'a> PracticePageBuilder<'a> {
    pub fn new(base_url: &'a Url, uid: Uid) -> Self {
        Self { base_url, uid }
    }

    pub fn url(&self) -> Result<Url> {
        let path = format!("user/{}/practice", self.uid);
        Ok(self.base_url.join(&path)?)
    }

    /// Fetches the practice context, asking for the content-only JSON rendering first.
    ///
    /// When the service still answers with HTML, the context embedded in the page is used.
    pub fn build(
        self,
        session: &mut Session,
        cnsl: &mut Console,
    ) -> Result<Lookup<LentilleContext>> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(LENTILLE_REQUEST_HEADER),
            HeaderValue::from_static("content-only"),
        );
        let res = session.get(self.url()?, headers, cnsl)?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }
        let res = res.check_status()?;
        if res.is_json() {
            let body = res.text()?;
            return serde_json::from_str(&body)
                .map(Lookup::Found)
                .map_err(|err| FetchError::parse("practice response", err));
        }
        PracticePage::parse(&res.text()?).extract_context()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticePage {
    content: Html,
}

impl PracticePage {
    pub fn parse(html: &str) -> Self {
        Self {
            content: Html::parse_document(html),
        }
    }

    /// A missing or blank context script means the data is not visible to us.
    pub fn extract_context(&self) -> Result<Lookup<LentilleContext>> {
        let text = match self.find_first(select!("script#lentille-context")) {
            Some(elem) => elem.inner_text(),
            None => return Ok(Lookup::NotFound),
        };
        if text.trim().is_empty() {
            return Ok(Lookup::NotFound);
        }
        serde_json::from_str(&text)
            .map(Lookup::Found)
            .map_err(|err| FetchError::parse("embedded practice context", err))
    }
}

impl Scrape for PracticePage {
    fn elem(&self) -> ElementRef {
        self.content.root_element()
    }
}
