use std::path::PathBuf;

use clap::Parser;

/// Voyager: pick a Wikivoyage destination and ask an AI travel guide about it.
#[derive(Parser, Debug)]
#[command(name = "voyager", version, about)]
pub struct Args {
    /// Location to search for. Prompted for when omitted.
    pub location: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `voyager=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
