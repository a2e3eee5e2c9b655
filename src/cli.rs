use crate::types::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "trenirovka",
    about = "Print workout summaries (distance, speed, calories) for tracker packages"
)]
pub struct Cli {
    /// JSON file with `[["CODE", [values...]], ...]` packages.
    ///
    /// Default: the built-in reference packages (SWM, RUN, WLK).
    #[arg(long, value_name = "FILE")]
    pub packages: Option<PathBuf>,

    /// Output format, one line per package.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with an error if any package could not be summarised.
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
