use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

use renamer_core::{DirectoryScan, RenamePlan};

#[derive(Parser)]
#[command(name = "avatar-renamer")]
#[command(author, version, about = "Renames numeric image files into the sequential avatar_N scheme", long_about = None)]
struct Cli {
    /// Directory containing the image files
    #[arg(default_value = "assets/avatars")]
    dir: PathBuf,

    /// Print the rename plan without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(e) = run(&cli) {
        eprintln!("{}", format!("Error: {e:#}").red());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    log::debug!("target directory: {}", cli.dir.display());
    log::debug!("dry run: {}", cli.dry_run);

    let scan = DirectoryScan::read(&cli.dir).context("unable to scan target directory")?;
    let plan = RenamePlan::build(&scan);

    println!(
        "Found {} new files. Renaming starting from avatar_{}.png",
        plan.len(),
        plan.start_index()
    );

    if cli.dry_run {
        for step in plan.steps() {
            println!("Would rename {} -> {}", step.source, step.target);
        }
        return Ok(());
    }

    renamer_core::execute(scan.dir(), &plan, |step| {
        println!("Renamed {} -> {}", step.source, step.target);
    })
    .context("rename run aborted")?;

    Ok(())
}
