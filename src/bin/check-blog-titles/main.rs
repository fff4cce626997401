use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{debug, warn};

use blog_titles::logger::configure_logger;
use blog_titles::title_checker::{CheckStatus, TitleChecker};

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "blog-titles.toml";
const ERROR_EXIT_CODE: u8 = 2;

/// Check blog post folder names match their titles
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to blog content directory. Defaults to the configured one
    #[arg(short, long)]
    path: Option<String>,

    /// Automatically rename folders to match titles
    #[arg(long)]
    fix: bool,

    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Do not print mismatches and renames
    #[arg(short, long)]
    quiet: bool,
}

fn run(args: Args) -> Result<CheckStatus> {
    let config = open_config(args.config_path.map(PathBuf::from))?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let blog_dir = args.path.map(PathBuf::from).unwrap_or_else(|| config.paths.blog_dir.clone());
    let checker = TitleChecker::new(config.check_options(args.fix, args.quiet));

    let report = checker.run(&blog_dir)
        .with_context(|| format!("Checking blog titles in {} failed", blog_dir.display()))?;

    let status = report.status();
    debug!("{} - scanned={}, skipped={}, mismatches={}, renamed={}",
        status, report.scanned, report.skipped.len(), report.mismatches.len(), report.renamed.len());

    Ok(status)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
