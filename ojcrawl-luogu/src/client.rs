use std::thread;

use ojcrawl_util::model::{Lookup, Uid};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Url;

use crate::config::ClientConfig;
use crate::console::Console;
use crate::extract::extract_user_practice;
use crate::model::{LentilleContext, PracticeResult};
use crate::page::PracticePageBuilder;
use crate::service::Session;
use crate::Result;

/// Client for Luogu.
#[derive(Debug)]
pub struct LuoguClient {
    conf: ClientConfig,
    session: Session,
}

impl LuoguClient {
    pub fn new(conf: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(conf.user_agent())?);
        headers.insert(ACCEPT, HeaderValue::from_static("text/html,application/json"));
        let session = Session::new(conf.timeout(), headers)?;
        Ok(Self { conf, session })
    }

    pub fn conf(&self) -> &ClientConfig {
        &self.conf
    }

    pub fn practice_url(&self, uid: Uid) -> Result<Url> {
        PracticePageBuilder::new(self.conf.base_url(), uid).url()
    }

    pub fn fetch_lentille_context(
        &mut self,
        uid: Uid,
        cnsl: &mut Console,
    ) -> Result<Lookup<LentilleContext>> {
        thread::sleep(self.conf.sleep());
        PracticePageBuilder::new(self.conf.base_url(), uid).build(&mut self.session, cnsl)
    }

    /// Passed problems of `uid`. An unknown or hidden user yields an empty result.
    pub fn fetch_user_practice(&mut self, uid: Uid, cnsl: &mut Console) -> Result<PracticeResult> {
        let practice = match self.fetch_lentille_context(uid, cnsl)? {
            Lookup::Found(ctx) => extract_user_practice(&ctx),
            Lookup::NotFound => PracticeResult::empty(),
        };
        Ok(practice)
    }
}
