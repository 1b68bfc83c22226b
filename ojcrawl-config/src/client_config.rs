use std::time::Duration;

use getset::{CopyGetters, Getters};
use url::Url;

use crate::SessionConfig;

/// Everything a client needs to talk to one service.
///
/// Built once per client instance and never mutated afterwards. The path of
/// `base_url` always ends with `/`, so relative paths joined onto it keep any
/// prefix.
#[derive(Getters, CopyGetters, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
    #[get = "pub"]
    base_url: Url,
    #[get_copy = "pub"]
    timeout: Duration,
    #[get_copy = "pub"]
    sleep: Duration,
    #[get = "pub"]
    user_agent: String,
}

impl ClientConfig {
    pub fn new(
        base_url: Url,
        timeout: Duration,
        sleep: Duration,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            timeout,
            sleep,
            user_agent: user_agent.into(),
        }
    }

    pub fn from_session(base_url: Url, session: &SessionConfig) -> Self {
        Self::new(
            base_url,
            session.timeout(),
            session.sleep(),
            session.user_agent().as_str(),
        )
    }

    pub fn with_sleep(self, sleep: Duration) -> Self {
        Self { sleep, ..self }
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conf(base_url: &str) -> ClientConfig {
        let base_url = Url::parse(base_url).unwrap();
        ClientConfig::new(base_url, Duration::from_secs(1), Duration::from_secs(0), "ua")
    }

    #[test]
    fn test_base_url_keeps_prefix() {
        let tests = &[
            ("https://leetcode.cn", "https://leetcode.cn/"),
            ("https://leetcode.cn/", "https://leetcode.cn/"),
            ("http://127.0.0.1:8080/prefix", "http://127.0.0.1:8080/prefix/"),
            ("http://127.0.0.1:8080/a/b/", "http://127.0.0.1:8080/a/b/"),
        ];
        for &(base_url, expected) in tests {
            assert_eq!(conf(base_url).base_url().as_str(), expected);
        }
        let joined = conf("http://127.0.0.1:8080/prefix").base_url().join("u/alice/");
        assert_eq!(
            joined.unwrap().as_str(),
            "http://127.0.0.1:8080/prefix/u/alice/"
        );
    }
}
