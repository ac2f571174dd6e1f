// HoopTriage CLI binary

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod constants;
mod error;
mod metadata;
mod pipeline;
mod preview;
mod record;
mod report;
mod scan;
mod scoring;
mod teams;
mod tools;

use pipeline::{run, TriageOptions};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "🏀 HoopTriage — Sort, score, and organise basketball clips fast.", long_about = None)]
#[command(version)]
struct Cli {
    /// Folder containing video clips
    input: Option<PathBuf>,

    /// Output directory (default: <input>/hooptriage_report)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only show clips with score >= N in the default report view
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=5))]
    min_score: u8,

    /// Skip jersey colour detection (faster)
    #[arg(long)]
    no_teams: bool,

    /// Fast path: list clips and build the report without audio or frame work
    #[arg(long)]
    scan_only: bool,

    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let input_dir = cli.input.unwrap_or_else(|| PathBuf::from("."));
    let input_dir = input_dir
        .canonicalize()
        .map_err(|_| anyhow::anyhow!("{} is not a directory", input_dir.display()))?;
    if !input_dir.is_dir() {
        anyhow::bail!("{} is not a directory", input_dir.display());
    }

    let output_dir = cli
        .output
        .unwrap_or_else(|| input_dir.join(constants::DEFAULT_OUTPUT_FOLDER));
    std::fs::create_dir_all(&output_dir)?;

    // Fatal setup check, before any processing begins
    tools::check_tools()?;

    println!("🏀 HoopTriage");
    println!("   Input:   {}", input_dir.display());
    println!("   Output:  {}", output_dir.display());
    println!();

    let options = TriageOptions {
        input_dir,
        output_dir,
        min_score: cli.min_score,
        detect_teams: !cli.no_teams,
        scan_only: cli.scan_only,
    };

    let outcome = run(&options)?;

    println!();
    println!("{}", "=".repeat(50));
    println!("🏀 HoopTriage Complete!");
    println!("{}", "=".repeat(50));

    if options.scan_only {
        println!("   Clips listed:    {}", outcome.records.len());
        println!("   (scan-only: re-run without --scan-only for scores)");
    } else {
        let scores: Vec<u8> = outcome.records.iter().map(|r| r.score).collect();
        println!("   Clips analysed:  {}", outcome.records.len());
        println!("   Hot clips (4-5): {}", scores.iter().filter(|s| **s >= 4).count());
        println!("   Medium (3):      {}", scores.iter().filter(|s| **s == 3).count());
        println!("   Likely skip (≤2):{}", scores.iter().filter(|s| **s <= 2).count());
    }

    println!();
    println!("   Report: {}", outcome.report_path.display());
    println!();
    println!("   Open it:  open \"{}\"", outcome.report_path.display());

    Ok(())
}
