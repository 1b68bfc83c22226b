#![warn(clippy::all)]

use std::io::{self, Write as _};

use structopt::StructOpt;

use ojcrawl::{Opt, Result};

fn main() -> Result<()> {
    let opt = Opt::from_args();
    let mut cnsl = opt.console();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    opt.run(&mut stdout, &mut cnsl).map_err(|err| {
        stdout.flush().expect("Could not flush stdout");
        eprintln!();
        err
    })
}
