use std::io::{self, BufRead as _, Write};

use anyhow::Context as _;
use console::Term;

#[derive(Debug)]
enum Inner {
    Term(Term),
    Buf {
        input: io::BufReader<io::Cursor<String>>,
        output: Vec<u8>,
    },
    Sink(io::Sink),
}

/// Config for console.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ConsoleConfig {
    /// If true, assumes yes and skips any confirmation.
    pub assume_yes: bool,
}

/// Destination of progress messages and warnings.
///
/// Request logs go here, never to stdout, so that stdout only carries outcomes.
#[derive(Debug)]
pub struct Console {
    inner: Inner,
    conf: ConsoleConfig,
}

impl Console {
    pub fn term(conf: ConsoleConfig) -> Self {
        Self {
            inner: Inner::Term(Term::stderr()),
            conf,
        }
    }

    pub fn buf(conf: ConsoleConfig) -> Self {
        Self {
            inner: Inner::Buf {
                input: io::BufReader::new(io::Cursor::new(String::new())),
                output: Vec::new(),
            },
            conf,
        }
    }

    pub fn sink(conf: ConsoleConfig) -> Self {
        Self {
            inner: Inner::Sink(io::sink()),
            conf,
        }
    }

    #[cfg(test)]
    pub fn write_input(&mut self, s: &str) {
        if let Inner::Buf { ref mut input, .. } = self.inner {
            input.get_mut().get_mut().push_str(s)
        }
    }

    pub fn take_buf(self) -> Option<Vec<u8>> {
        match self.inner {
            Inner::Buf { output: buf, .. } => Some(buf),
            _ => None,
        }
    }

    pub fn take_output(self) -> crate::Result<String> {
        self.take_buf()
            .context("Could not take buf from console")
            .and_then(|buf| Ok(String::from_utf8(buf)?))
    }

    #[inline]
    fn as_mut_write(&mut self) -> &mut dyn Write {
        match self.inner {
            Inner::Term(ref mut w) => w,
            Inner::Buf {
                output: ref mut w, ..
            } => w,
            Inner::Sink(ref mut w) => w,
        }
    }

    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        writeln!(self, "WARN: {}", message)
    }

    pub fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        if self.conf.assume_yes {
            return Ok(true);
        }

        let prompt = format!("{} ({}) ", message, if default { "Y/n" } else { "y/N" });
        write!(self, "{}", prompt)?;
        self.flush()?;
        let input = self.read_line()?;
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Ok(default),
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        match self.inner {
            Inner::Term(ref term) => term.read_line(),
            Inner::Buf { ref mut input, .. } => {
                let mut buf = String::new();
                input.read_line(&mut buf)?;
                Ok(buf)
            }
            Inner::Sink(_) => Ok(String::from("")),
        }
    }
}

impl Write for Console {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.as_mut_write().write(buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.as_mut_write().flush()
    }
}
