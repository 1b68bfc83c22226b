use std::fmt;
use std::path::PathBuf;

use ojcrawl_config::Config;
use serde::Serialize;
use structopt::StructOpt;

use crate::cmd::{Outcome, Run};
use crate::{Console, GlobalOpt, Result};

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct ShowOpt {}

impl Run for ShowOpt {
    fn run(&self, global_opt: &GlobalOpt, cnsl: &mut Console) -> Result<Box<dyn Outcome>> {
        let config = global_opt.load_config(cnsl)?;
        Ok(Box::new(ShowOutcome::new(config)))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowOutcome {
    config_path: Option<PathBuf>,
    config: Config,
}

impl ShowOutcome {
    fn new(config: Config) -> Self {
        Self {
            config_path: config.path().map(ToOwned::to_owned),
            config,
        }
    }
}

impl fmt::Display for ShowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.config_path {
            Some(path) => writeln!(f, "# {}", path.display())?,
            None => writeln!(f, "# default config")?,
        }
        write!(f, "{}", self.config)
    }
}
