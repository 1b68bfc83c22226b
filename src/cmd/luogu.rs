use std::fmt;

use anyhow::Context as _;
use ojcrawl_luogu::{LuoguClient, PracticeResult};
use ojcrawl_util::model::{ServiceKind, Uid};
use serde::Serialize;
use structopt::StructOpt;

use crate::cmd::{Outcome, Run, SleepOpt};
use crate::{Console, GlobalOpt, Result};

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct LuoguOpt {
    #[structopt(subcommand)]
    cmd: LuoguCmd,
}

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub enum LuoguCmd {
    /// Lists problems passed by a user
    Practice(UidArgs),
}

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
pub struct UidArgs {
    /// Numeric user id on Luogu
    uid: Uid,
    #[structopt(flatten)]
    sleep: SleepOpt,
}

impl Run for LuoguOpt {
    fn run(&self, global_opt: &GlobalOpt, cnsl: &mut Console) -> Result<Box<dyn Outcome>> {
        match &self.cmd {
            LuoguCmd::Practice(args) => {
                let conf = global_opt
                    .load_config(cnsl)?
                    .client_config(ServiceKind::Luogu, args.sleep.get());
                let mut client = LuoguClient::new(conf).context("Could not create Luogu client")?;
                let practice = client
                    .fetch_user_practice(args.uid, cnsl)
                    .with_context(|| format!("Could not fetch practice of user : {}", args.uid))?;
                Ok(Box::new(PracticeOutcome { practice }))
            }
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PracticeOutcome {
    practice: PracticeResult,
}

impl fmt::Display for PracticeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.practice.user() {
            Some(user) => write!(f, "{}", user.name)?,
            None => write!(f, "Unknown user")?,
        }
        write!(f, " : {} passed", self.practice.passed_count())?;
        for problem in self.practice.passed() {
            write!(f, "\n{:<8} {}", problem.pid, problem.title)?;
        }
        Ok(())
    }
}
