use std::time::Duration;
use std::{fmt, io};

use anyhow::{anyhow, Context as _};
use serde::Serialize;
use structopt::StructOpt;

use crate::{Console, GlobalOpt, OutputFormat, Result};

mod init;
mod leetcode;
mod luogu;
mod show;

pub use init::InitOpt;
pub use leetcode::LeetcodeOpt;
pub use luogu::LuoguOpt;
pub use show::ShowOpt;

/// Upper bound of `--sleep`.
const SLEEP_MAX: Duration = Duration::from_secs(10);

/// Wrapper printed around every outcome in json and yaml formats.
#[derive(Serialize, Debug)]
pub struct Envelope<'a, T> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a, T> Envelope<'a, T> {
    pub fn success(data: &'a T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(err: &anyhow::Error) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(format!("{:#}", err)),
        }
    }
}

pub trait Outcome: fmt::Display + fmt::Debug {
    fn write_json(&self, writer: &mut dyn io::Write) -> Result<()>;

    fn write_yaml(&self, writer: &mut dyn io::Write) -> Result<()>;

    fn print(&self, stdout: &mut dyn io::Write, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Default => writeln!(stdout, "{}", self)?,
            OutputFormat::Debug => writeln!(stdout, "{:#?}", self)?,
            OutputFormat::Json => {
                self.write_json(stdout)?;
                writeln!(stdout)?;
            }
            OutputFormat::Yaml => self.write_yaml(stdout)?,
        }
        Ok(())
    }
}

impl<T: Serialize + fmt::Display + fmt::Debug> Outcome for T {
    fn write_json(&self, writer: &mut dyn io::Write) -> Result<()> {
        serde_json::to_writer_pretty(writer, &Envelope::success(self))
            .context("Could not print outcome as json")
    }

    fn write_yaml(&self, writer: &mut dyn io::Write) -> Result<()> {
        serde_yaml::to_writer(writer, &Envelope::success(self))
            .context("Could not print outcome as yaml")
    }
}

pub trait Run {
    fn run(&self, global_opt: &GlobalOpt, cnsl: &mut Console) -> Result<Box<dyn Outcome>>;
}

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub enum Cmd {
    /// Writes the default config file
    Init(InitOpt),
    /// Shows the effective config
    Show(ShowOpt),
    /// Fetches user data from LeetCode
    Leetcode(LeetcodeOpt),
    /// Fetches user data from Luogu
    Luogu(LuoguOpt),
}

impl Run for Cmd {
    fn run(&self, global_opt: &GlobalOpt, cnsl: &mut Console) -> Result<Box<dyn Outcome>> {
        match self {
            Self::Init(opt) => opt.run(global_opt, cnsl),
            Self::Show(opt) => opt.run(global_opt, cnsl),
            Self::Leetcode(opt) => opt.run(global_opt, cnsl),
            Self::Luogu(opt) => opt.run(global_opt, cnsl),
        }
    }
}

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SleepOpt {
    /// Seconds to wait before each request, between 0 and 10. Overrides the config
    #[structopt(long, parse(try_from_str = parse_sleep))]
    sleep: Option<Duration>,
}

impl SleepOpt {
    pub fn get(&self) -> Option<Duration> {
        self.sleep
    }
}

fn parse_sleep(s: &str) -> Result<Duration> {
    let secs: f64 = s
        .trim()
        .parse()
        .with_context(|| format!("Could not parse sleep seconds : {}", s))?;
    if !secs.is_finite() || secs < 0.0 || secs > SLEEP_MAX.as_secs_f64() {
        return Err(anyhow!(
            "Sleep must be between 0 and {} seconds : {}",
            SLEEP_MAX.as_secs(),
            s
        ));
    }
    Ok(Duration::from_secs_f64(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sleep() -> anyhow::Result<()> {
        assert_eq!(parse_sleep("0")?, Duration::from_secs(0));
        assert_eq!(parse_sleep("0.8")?, Duration::from_millis(800));
        assert_eq!(parse_sleep("10")?, Duration::from_secs(10));
        assert!(parse_sleep("10.5").is_err());
        assert!(parse_sleep("-1").is_err());
        assert!(parse_sleep("NaN").is_err());
        assert!(parse_sleep("inf").is_err());
        assert!(parse_sleep("fast").is_err());
        Ok(())
    }

    #[test]
    fn test_envelope() -> anyhow::Result<()> {
        let data = vec![1, 2];
        let value = serde_json::to_value(&Envelope::success(&data))?;
        assert_eq!(value, serde_json::json!({"ok": true, "data": [1, 2]}));

        let err = anyhow!("boom").context("Could not fetch");
        let value = serde_json::to_value(&Envelope::<()>::failure(&err))?;
        assert_eq!(
            value,
            serde_json::json!({"ok": false, "error": "Could not fetch: boom"})
        );
        Ok(())
    }
}
