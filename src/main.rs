//! # Student Roster
//!
//! Entry point of the `roster` binary: parses the command line, loads the
//! configuration, sets up logging and hands control to the terminal UI.
//!
//! ## Usage
//! ```bash
//! roster --config roster.toml --log-file roster.log
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use roster::config::load_config;
use roster::{logging, tui, App};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Keep a roster of students from the terminal")]
struct Args {
    /// TOML configuration file; defaults apply when it does not exist
    #[arg(short, long, default_value = "roster.toml")]
    config: PathBuf,

    /// Write diagnostics to this file (filter with RUST_LOG)
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Header title, overriding the config file
    #[arg(long)]
    title: Option<String>,

    /// Header subtitle, overriding the config file
    #[arg(long)]
    subtitle: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let mut config = load_config(&args.config)?;
    if let Some(title) = args.title {
        config.header.title = title;
    }
    if let Some(subtitle) = args.subtitle {
        config.header.subtitle = subtitle;
    }
    config.validate().context("invalid command line overrides")?;
    tracing::debug!(?config, "configuration loaded");

    let mut app = App::new(&config)?;
    tui::run(&mut app, Duration::from_millis(config.tick_rate_ms))
}
