//! Config for ojcrawl.
//!
//! Config is read from `ojcrawl.yaml`, either at an explicit path or in the
//! current directory. Every field is optional and falls back to its default.
//!
//! ```yaml
//! version: 0.1.0
//! session:
//!   timeout: 15s
//!   sleep: 800ms
//!   user_agent: "Mozilla/5.0 ..."
//! services:
//!   leetcode:
//!     base_url: "https://leetcode.cn/"
//!   luogu:
//!     base_url: "https://www.luogu.com.cn/"
//! ```
//!
//! Durations use [humantime](https://docs.rs/humantime) notation.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context as _};
use lazy_static::lazy_static;
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};
use url::Url;

use ojcrawl_util::{console, model};

mod client_config;
mod session_config;

use crate::console::Console;
use crate::model::ServiceKind;
pub use client_config::ClientConfig;
pub use session_config::SessionConfig;

pub type Error = anyhow::Error;
pub type Result<T> = anyhow::Result<T>;

lazy_static! {
    static ref VERSION: Version = Version::parse(env!("CARGO_PKG_VERSION")).unwrap();
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    #[serde(skip)]
    path: Option<PathBuf>,
    #[serde(flatten)]
    body: ConfigBody,
}

impl Config {
    pub const FILE_NAME: &'static str = "ojcrawl.yaml";

    /// Loads config from `path`, or from the current directory if `path` is `None`.
    ///
    /// A missing file is only accepted in the latter case, where defaults are used.
    pub fn load(path: Option<&Path>, cnsl: &mut Console) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    cnsl.warn(&format!(
                        "Could not find config file ({}). Using default config.",
                        path.display()
                    ))?;
                    return Ok(Self::default());
                }
                path
            }
        };
        let body = ConfigBody::load(&path)
            .with_context(|| format!("Could not load config file : {}", path.display()))?;
        writeln!(cnsl, "Loaded config from {}", path.display())?;
        Ok(Self {
            path: Some(path),
            body,
        })
    }

    pub fn default_path() -> Result<PathBuf> {
        let cwd = std::env::current_dir().context("Could not get current directory")?;
        Ok(cwd.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn session(&self) -> &SessionConfig {
        &self.body.session
    }

    pub fn service(&self, service_id: ServiceKind) -> &ServiceConfig {
        self.body.services.get(service_id)
    }

    /// Builds the client config for `service_id`, optionally overriding the sleep.
    pub fn client_config(&self, service_id: ServiceKind, sleep: Option<Duration>) -> ClientConfig {
        let conf = ClientConfig::from_session(
            self.service(service_id).base_url().clone(),
            self.session(),
        );
        match sleep {
            Some(sleep) => conf.with_sleep(sleep),
            None => conf,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            body: ConfigBody::default(),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let yaml_str = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", yaml_str)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigBody {
    #[serde(with = "string_serde", default = "ConfigBody::default_version")]
    version: Version,
    #[serde(default)]
    session: SessionConfig,
    #[serde(default)]
    services: ServicesConfig,
}

impl ConfigBody {
    pub fn generate_to(writer: &mut dyn Write) -> Result<()> {
        serde_yaml::to_writer(writer, &Self::default()).context("Could not write config")
    }

    fn default_version() -> Version {
        VERSION.clone()
    }

    fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).context("Could not open config file")?;
        let body: Self = serde_yaml::from_reader(BufReader::new(file))
            .context("Could not read config file as yaml")?;
        body.validate()?;
        Ok(body)
    }

    fn validate(&self) -> Result<()> {
        let version_req = VersionReq::parse(&self.version.to_string())
            .context("Could not parse version requirement")?;
        if !version_req.matches(&VERSION) {
            return Err(anyhow!(
                r#"Found mismatched version in config file.
    config version : {}
    ojcrawl version: {}
Fix the config file so that it is compatible with the current version of ojcrawl."#,
                self.version,
                &*VERSION
            ));
        }
        Ok(())
    }
}

impl Default for ConfigBody {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            session: SessionConfig::default(),
            services: ServicesConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct ServicesConfig {
    leetcode: ServiceConfig,
    luogu: ServiceConfig,
}

impl ServicesConfig {
    fn get(&self, service_id: ServiceKind) -> &ServiceConfig {
        match service_id {
            ServiceKind::Leetcode => &self.leetcode,
            ServiceKind::Luogu => &self.luogu,
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            leetcode: ServiceConfig::default_for(ServiceKind::Leetcode),
            luogu: ServiceConfig::default_for(ServiceKind::Luogu),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceConfig {
    base_url: Url,
}

impl ServiceConfig {
    fn default_for(service_id: ServiceKind) -> Self {
        let base_url = match service_id {
            ServiceKind::Leetcode => "https://leetcode.cn",
            ServiceKind::Luogu => "https://www.luogu.com.cn",
        };
        Self {
            // parsing static url will never fail
            base_url: Url::parse(base_url).unwrap(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

mod string_serde {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}
