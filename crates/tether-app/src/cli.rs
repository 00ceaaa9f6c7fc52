use std::path::PathBuf;

use clap::Parser;
use tether_config::MoveEventMode;

/// Tether - a popup window that follows its opener around the screen.
#[derive(Parser, Debug)]
#[command(name = "tether", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. "tether=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Source of opener move notifications: auto, native or polyfill.
    #[arg(long)]
    pub move_events: Option<MoveEventMode>,
}

pub fn parse() -> Args {
    Args::parse()
}
