//! CRONOS console - terminal client for the CRONOS code analyzer
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use cronos::HeadlessOptions;
use cronos_app::{config, ApiBase, AppState};
use cronos_core::prelude::*;
use cronos_core::{Constraints, Mode};

/// CRONOS console - check code against a contract or analyze a behavior change
#[derive(Parser, Debug)]
#[command(name = "cronos")]
#[command(about = "Terminal client for the CRONOS dual-mode code analyzer", long_about = None)]
struct Args {
    /// Analysis service base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Run one analysis without the TUI and print NDJSON events
    #[arg(long)]
    headless: bool,

    /// Workflow for headless mode (compliance or change)
    #[arg(long, requires = "headless")]
    mode: Option<Mode>,

    /// File with the source code to analyze ("-" reads stdin)
    #[arg(long, value_name = "FILE", requires = "headless")]
    source: Option<PathBuf>,

    /// Expected behavior (contract or post-change expectation)
    #[arg(long, default_value = "")]
    expected: String,

    /// Old condition (change mode)
    #[arg(long, default_value = "")]
    old: String,

    /// New condition (change mode)
    #[arg(long, default_value = "")]
    new: String,

    #[arg(long)]
    no_behavior_change: bool,

    #[arg(long)]
    allow_boundary_change: bool,

    /// Write the rendered report fragment to FILE
    #[arg(long, value_name = "FILE", requires = "headless")]
    html: Option<PathBuf>,

    /// Write a default .cronos/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::error_reporting(e.to_string()))?;

    // Logs go to a file; stdout belongs to the TUI or the NDJSON stream
    cronos_core::logging::init()?;

    let project_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        config::init_config_dir(&project_path)?;
        eprintln!(
            "Config written to {}",
            config::config_path(&project_path).display()
        );
        return Ok(());
    }

    let settings = config::load_settings(&project_path);
    let api_base = match &args.server {
        Some(url) => ApiBase::parse(url)?,
        None => settings.api_base()?,
    };
    let state = AppState::with_settings(settings, api_base);

    if args.headless {
        let options = headless_options(&args)?;
        if !cronos::run_headless(state, options).await? {
            std::process::exit(1);
        }
        return Ok(());
    }

    let result = cronos::run(state).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("CRONOS exiting");
    result
}

fn headless_options(args: &Args) -> Result<HeadlessOptions> {
    let mode = args
        .mode
        .ok_or_else(|| Error::config("--mode is required with --headless"))?;
    let source = args
        .source
        .as_deref()
        .ok_or_else(|| Error::config("--source is required with --headless"))?;

    Ok(HeadlessOptions {
        mode,
        source_code: read_source(source)?,
        expected_output: args.expected.clone(),
        old_condition: args.old.clone(),
        new_condition: args.new.clone(),
        constraints: Constraints {
            no_behavior_change: args.no_behavior_change,
            allow_boundary_change: args.allow_boundary_change,
        },
        html_out: args.html.clone(),
    })
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file {}", path.display()))
}
