use std::env;
use std::fmt;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{anyhow, Context as _};
use ojcrawl_config::{Config, ConfigBody};
use serde::Serialize;
use structopt::StructOpt;

use crate::cmd::{Outcome, Run};
use crate::{Console, GlobalOpt, Result};

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct InitOpt {
    /// Directory to write the config file to. Defaults to the current directory
    base_dir: Option<PathBuf>,
    /// Overwrites an existing config file without confirmation
    #[structopt(long, short = "w")]
    overwrite: bool,
}

impl InitOpt {
    fn init(&self, cnsl: &mut Console) -> Result<InitOutcome> {
        // decide base_dir
        let cwd = env::current_dir().context("Could not get current directory")?;
        let base_dir = match &self.base_dir {
            Some(path) => cwd.join(path),
            None => cwd,
        };
        if !base_dir.is_dir() {
            return Err(anyhow!("Could not find directory : {}", base_dir.display()));
        }

        let config_path = base_dir.join(Config::FILE_NAME);
        if config_path.exists() && !self.overwrite {
            let message = format!("Overwrite {} ?", config_path.display());
            if !cnsl.confirm(&message, false)? {
                return Err(anyhow!(
                    "Config file already exists : {}",
                    config_path.display()
                ));
            }
        }

        let mut file = File::create(&config_path)
            .with_context(|| format!("Could not create file : {}", config_path.display()))?;
        ConfigBody::generate_to(&mut file).context("Could not save config")?;

        Ok(InitOutcome { config_path })
    }
}

impl Run for InitOpt {
    fn run(&self, _global_opt: &GlobalOpt, cnsl: &mut Console) -> Result<Box<dyn Outcome>> {
        Ok(Box::new(self.init(cnsl)?))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InitOutcome {
    config_path: PathBuf,
}

impl fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Saved config file : {}", self.config_path.display())
    }
}
