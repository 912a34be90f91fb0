//! street-address - parse US street addresses from the command line
//!
//! Parses the address given as arguments, or one address per stdin line with
//! the two address lines separated by a TAB.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use street_address::{AddressParser, JsonLinesRejectLog, ParsedAddress};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// street-address - US street address parser
#[derive(Parser, Debug)]
#[command(name = "street-address")]
#[command(version, about, long_about = None)]
struct Cli {
    /// First address line; read addresses from stdin when omitted
    address1: Option<String>,

    /// Second address line (unit, suite, or a swapped first line)
    address2: Option<String>,

    /// Print each parsed address as one JSON document
    #[arg(long)]
    json: bool,

    /// Append addresses that fail to parse to this JSON-lines file
    #[arg(long)]
    reject_log: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let mut parser = AddressParser::new().context("Failed to build address parser")?;
    if let Some(path) = &cli.reject_log {
        parser = parser.with_reject_log(JsonLinesRejectLog::new(path));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(address1) = &cli.address1 {
        let address = parser.parse(address1, cli.address2.as_deref().unwrap_or_default());
        return print_address(&mut out, &address, cli.json);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let (address1, address2) = line.split_once('\t').unwrap_or((line.as_str(), ""));
        let address = parser.parse(address1, address2);
        print_address(&mut out, &address, cli.json)?;
    }

    Ok(())
}

fn print_address(out: &mut impl Write, address: &ParsedAddress, json: bool) -> Result<()> {
    if json {
        let doc = serde_json::to_string(address).context("Failed to serialize address")?;
        writeln!(out, "{doc}")?;
        return Ok(());
    }

    for (name, value) in address.fields() {
        writeln!(out, "{name:>20}: {value}")?;
    }
    writeln!(out)?;

    Ok(())
}
