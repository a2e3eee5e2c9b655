#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use trenirovka::{cli, packages, report, utils};

#[macro_use]
extern crate trenirovka;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let pkgs = match &cli.packages {
        Some(path) => packages::load_packages(path)?,
        None => {
            dlog!("mode=reference packages");
            packages::reference_packages()
        }
    };
    dlog!("format={:?} packages={}", cli.format, pkgs.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = report::run_packages(&pkgs, cli.format, &mut out)?;
    out.flush()?;

    if stats.failed > 0 {
        tracing::warn!(ok = stats.ok, failed = stats.failed, "some packages were skipped");
        if cli.strict {
            anyhow::bail!("{} of {} packages failed", stats.failed, pkgs.len());
        }
    }

    Ok(())
}
