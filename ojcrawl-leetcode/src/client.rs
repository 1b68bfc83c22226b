use std::thread;

use maplit::hashmap;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, USER_AGENT};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::console::Console;
use crate::extract::{self, PublicProfileData, RecentAcData};
use crate::graphql::Executor;
use crate::model::{AcSubmission, ProfileMeta, PublicProfile, SubmitStats};
use crate::page::ProfilePageBuilder;
use crate::query::{self, Operation};
use crate::service::Session;
use crate::token;
use crate::Result;

/// Client for LeetCode.
///
/// One instance corresponds to one browser-like session; create a new one for
/// every independent sequence of fetches.
#[derive(Debug)]
pub struct LeetcodeClient {
    conf: ClientConfig,
    session: Session,
}

impl LeetcodeClient {
    pub fn new(conf: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(conf.user_agent())?);
        headers.insert(ACCEPT, HeaderValue::from_static("text/html,application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let origin = conf.base_url().origin().ascii_serialization();
        headers.insert(ORIGIN, HeaderValue::from_str(&origin)?);
        let session = Session::new(conf.timeout(), headers)?;
        Ok(Self { conf, session })
    }

    pub fn conf(&self) -> &ClientConfig {
        &self.conf
    }

    pub fn profile_url(&self, username: &str) -> Result<Url> {
        ProfilePageBuilder::new(self.conf.base_url(), username).url()
    }

    pub fn ensure_token(&mut self, cnsl: &mut Console) -> Option<String> {
        token::ensure_token(&mut self.session, self.conf.base_url(), cnsl)
    }

    pub fn fetch_profile_meta(
        &mut self,
        username: &str,
        cnsl: &mut Console,
    ) -> Result<ProfileMeta> {
        thread::sleep(self.conf.sleep());
        ProfilePageBuilder::new(self.conf.base_url(), username).build(&mut self.session, cnsl)
    }

    pub fn fetch_recent_ac(
        &mut self,
        username: &str,
        cnsl: &mut Console,
    ) -> Result<Vec<AcSubmission>> {
        let data: RecentAcData = self.query(&query::RECENT_AC_SUBMISSIONS, username, cnsl)?;
        Ok(extract::recent_ac_submissions(data))
    }

    pub fn fetch_submit_stats(
        &mut self,
        username: &str,
        cnsl: &mut Console,
    ) -> Result<SubmitStats> {
        self.query(&query::USER_QUESTION_PROGRESS, username, cnsl)
    }

    pub fn fetch_public_profile(
        &mut self,
        username: &str,
        cnsl: &mut Console,
    ) -> Result<PublicProfile> {
        let data: PublicProfileData = self.query(&query::USER_PUBLIC_PROFILE, username, cnsl)?;
        Ok(extract::public_profile(data))
    }

    /// Fetches profile meta, then recent submissions and stats if the user exists.
    pub fn crawl(&mut self, username: &str, cnsl: &mut Console) -> Result<Crawl> {
        let meta = self.fetch_profile_meta(username, cnsl)?;
        if !meta.exists {
            return Ok(Crawl {
                meta,
                recent_accepted: Vec::new(),
                stats: None,
            });
        }
        let recent_accepted = self.fetch_recent_ac(username, cnsl)?;
        let stats = self.fetch_submit_stats(username, cnsl)?;
        Ok(Crawl {
            meta,
            recent_accepted,
            stats: Some(stats),
        })
    }

    fn query<T: DeserializeOwned>(
        &mut self,
        op: &Operation,
        username: &str,
        cnsl: &mut Console,
    ) -> Result<T> {
        let token = self.ensure_token(cnsl);
        let referer = self.profile_url(username)?;
        let variables = hashmap! { "userSlug" => username.to_owned() };
        Executor {
            session: &mut self.session,
            base_url: self.conf.base_url(),
            sleep: self.conf.sleep(),
        }
        .execute(op, &referer, &variables, token.as_deref(), cnsl)
    }
}

/// Everything known about one user, gathered in a single session.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Crawl {
    pub meta: ProfileMeta,
    pub recent_accepted: Vec<AcSubmission>,
    pub stats: Option<SubmitStats>,
}
