use std::time::Duration;

use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

static DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Serialize, Deserialize, Getters, CopyGetters, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(with = "humantime_serde")]
    #[get_copy = "pub"]
    timeout: Duration,
    /// Pause before every request to a service.
    #[serde(with = "humantime_serde")]
    #[get_copy = "pub"]
    sleep: Duration,
    #[get = "pub"]
    user_agent: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            sleep: Duration::from_millis(800),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}
