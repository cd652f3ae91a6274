use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, trace};

/// First value printed
const FIRST: u32 = 1;
/// Last value printed, inclusive
const LAST: u32 = 10;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    debug!("CLI: {:?}", cli);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    count(&mut out)?;
    out.flush().context("Unable to flush standard output")?;

    Ok(())
}

/// Writes each integer from `FIRST` to `LAST` to `out`, one per line
fn count(out: &mut impl Write) -> Result<()> {
    for i in FIRST..=LAST {
        trace!("Value: {}", i);
        writeln!(out, "{}", i).with_context(|| format!("Unable to write value ({})", i))?;
    }
    Ok(())
}
