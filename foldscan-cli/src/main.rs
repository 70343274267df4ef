use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use foldscan_core::{ReportConfig, ScanConfig, ScanError, Scanner, render, write_report};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scan a folder and generate a summary report
#[derive(Parser, Debug)]
#[command(name = "foldscan")]
#[command(about = "Scan a folder and generate a summary report.")]
#[command(version)]
struct Args {
    /// Path to the folder to scan
    folder: PathBuf,

    /// Output report file path
    #[arg(short, long, default_value = foldscan_core::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Filter by file extension (e.g. .js, .txt). Only matching files are processed
    #[arg(short, long)]
    extension: Option<String>,

    /// Skip entries that cannot be read instead of aborting the scan
    #[arg(long)]
    skip_unreadable: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.verbose);

    let mut scan_config = ScanConfig::default().with_skip_unreadable(args.skip_unreadable);
    if let Some(ext) = &args.extension {
        scan_config = scan_config.with_extension(ext);
    }
    let report_config = ReportConfig::new(args.output.clone());

    let stats = match Scanner::new(scan_config).scan(&args.folder) {
        Ok(stats) => stats,
        Err(err @ ScanError::NotADirectory(_)) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };
    info!(
        folder = %stats.folder.display(),
        files = stats.total_files,
        "folder scanned"
    );

    let report = render(&stats);
    println!("{}", report);

    let saved = write_report(&report, &report_config)?;
    println!("\nReport saved to: {}", saved.display());

    Ok(())
}

/// Log to stderr so stdout carries only the report
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
