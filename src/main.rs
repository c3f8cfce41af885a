//! Static site builder.
//!
//! Renders the landing page and its web app manifest into a directory that can
//! be served next to the wasm-bindgen bundle (`pkg/`).
//!
//! ```text
//! leavedesk-landing [--config <file>] [--out <dir>] [--theme <name>]
//! ```
//!
//! # Pipeline
//!
//! 1. **Configure**: Read the TOML config file (if any), apply CLI overrides
//! 2. **Initialize**: Install tracing, load content and theme
//! 3. **Write**: `index.html` + `manifest.webmanifest` into the output directory

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use leavedesk_landing::infrastructure::write_site;
use leavedesk_landing::{Config, LandingError, SiteContent};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "leavedesk-landing", version, about = "Build the LeaveDesk landing page")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    out: PathBuf,

    /// Built-in theme name, overriding the configuration
    #[arg(long)]
    theme: Option<String>,

    /// Tracing level, overriding the configuration (RUST_LOG still wins)
    #[arg(long)]
    trace_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "build failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), LandingError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(theme) = &cli.theme {
        config.theme_name = Some(theme.clone());
    }
    if let Some(level) = &cli.trace_level {
        config.trace_level = Some(level.clone());
    }

    leavedesk_landing::observability::init_tracing(&config);
    let _span = tracing::info_span!("build", out = %cli.out.display()).entered();

    let content = match &config.content_file {
        Some(path) => SiteContent::from_file(path)?,
        None => SiteContent::default(),
    };
    let state = leavedesk_landing::initialize_with_content(&config, content);

    let written = write_site(&cli.out, &state, &config)?;
    for path in &written {
        tracing::info!(path = %path.display(), "written");
    }
    Ok(())
}
