//! `telform` - validate and format telephone numbers read line by line from stdin.
//!
//! Results are written to stdout as one JSON object per line; logs go to stderr.

mod config;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use telform_adapters::LibPhoneNumber;
use telform_app::TelephoneService;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "telform", version, about = "Telephone number validation and formatting")]
struct Args {
    /// Region used for lines that do not name one (overrides TELFORM_DEFAULT_REGION)
    #[arg(short, long)]
    region: Option<String>,

    /// Print the supported region codes and exit
    #[arg(long)]
    list_regions: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env().and_then(|c| c.with_region(args.region.as_deref()))?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let service = TelephoneService::new(LibPhoneNumber::new());
    let default_region = config.default_region.as_ref().map(|r| r.as_str());
    info!(default_region, "telform ready");

    let mut out = io::stdout().lock();

    if args.list_regions {
        for region in service.supported_regions() {
            writeln!(out, "{region}")?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("failed to read stdin: {}", e);
                return Err(e.into());
            }
        };
        if let Some(command) = session::parse_line(&line, default_region) {
            let result = session::run(&service, command);
            writeln!(out, "{result}")?;
        }
    }

    Ok(())
}
