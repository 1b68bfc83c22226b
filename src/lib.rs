#![warn(clippy::all)]

#[macro_use]
extern crate strum;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use serde::Serialize;
use structopt::StructOpt;
use strum::VariantNames;

mod cmd;

use cmd::{Cmd, Envelope, Run as _};
use ojcrawl_config::Config;
pub use ojcrawl_util::{Console, ConsoleConfig};

pub type Error = anyhow::Error;
pub type Result<T> = anyhow::Result<T>;

#[derive(
    Serialize,
    EnumString,
    EnumVariantNames,
    IntoStaticStr,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    Default,
    Debug,
    Json,
    Yaml,
}

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(about = "Crawls user profiles and solved problems on online judges")]
pub struct Opt {
    #[structopt(flatten)]
    global_opt: GlobalOpt,
    #[structopt(subcommand)]
    cmd: Cmd,
}

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobalOpt {
    /// Path to config file. Defaults to ojcrawl.yaml in the current directory
    #[structopt(long, global = true, env = "OJCRAWL_CONFIG")]
    config: Option<PathBuf>,
    /// Format of the outcome written to stdout
    #[structopt(
        long,
        short,
        global = true,
        default_value = OutputFormat::Default.into(),
        possible_values = &OutputFormat::VARIANTS,
    )]
    output: OutputFormat,
    /// Hides request logs and warnings
    #[structopt(long, short, global = true)]
    quiet: bool,
    /// Assumes yes for every confirmation
    #[structopt(long, short = "y", global = true)]
    assume_yes: bool,
}

impl GlobalOpt {
    pub fn load_config(&self, cnsl: &mut Console) -> Result<Config> {
        Config::load(self.config.as_deref(), cnsl).context("Could not load config")
    }
}

impl Opt {
    pub fn console(&self) -> Console {
        let conf = ConsoleConfig {
            assume_yes: self.global_opt.assume_yes,
        };
        if self.global_opt.quiet {
            Console::sink(conf)
        } else {
            Console::term(conf)
        }
    }

    /// Runs the command and prints its outcome to `stdout`.
    ///
    /// On failure the error is still returned, after an `ok: false` envelope is
    /// printed for machine readable formats.
    pub fn run(&self, stdout: &mut dyn Write, cnsl: &mut Console) -> Result<()> {
        let format = self.global_opt.output;
        match self.cmd.run(&self.global_opt, cnsl) {
            Ok(outcome) => outcome.print(stdout, format),
            Err(err) => {
                let envelope = Envelope::<()>::failure(&err);
                match format {
                    OutputFormat::Json => {
                        serde_json::to_writer_pretty(&mut *stdout, &envelope)?;
                        writeln!(stdout)?;
                    }
                    OutputFormat::Yaml => serde_yaml::to_writer(&mut *stdout, &envelope)?,
                    OutputFormat::Default | OutputFormat::Debug => {}
                }
                Err(err)
            }
        }
    }
}
