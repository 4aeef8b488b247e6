//! # scorebook-cli
//!
//! Offline generator and checker for team statistics workbooks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use scorebook_core::enrich::enrich;
use scorebook_core::store::persist;
use scorebook_core::{Dataset, Meta, Section};
use scorebook_sheet::parse_workbook_bytes;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_TEAM_NAME: &str = "Champions 11 CC";

/// scorebook - team statistics from an Excel workbook
#[derive(Parser)]
#[command(name = "scorebook")]
#[command(author, version, about = "Build the team statistics dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a workbook into the dataset file, filling derived statistics
    Generate {
        /// Source workbook
        #[arg(value_name = "WORKBOOK")]
        workbook: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "data.json")]
        output: PathBuf,

        /// Team name recorded in the metadata block
        #[arg(long, default_value = DEFAULT_TEAM_NAME)]
        team_name: String,

        /// Leave out the metadata block
        #[arg(long)]
        no_meta: bool,
    },

    /// Validate a workbook without writing anything
    Check {
        /// Workbook to validate
        #[arg(value_name = "WORKBOOK")]
        workbook: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            workbook,
            output,
            team_name,
            no_meta,
        } => {
            let meta = (!no_meta).then_some(team_name.as_str());
            let dataset = generate(&workbook, &output, meta)?;
            print_counts(&dataset);
            println!("{} {}", "Wrote".green().bold(), output.display());
        }
        Command::Check { workbook } => {
            let dataset = load_workbook(&workbook)?;
            print_counts(&dataset);
            println!("{} {}", "Valid:".green().bold(), workbook.display());
        }
    }
    Ok(())
}

fn load_workbook(path: &Path) -> Result<Dataset> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))?;
    let dataset = parse_workbook_bytes(&bytes)?;
    Ok(dataset)
}

/// Parse, enrich and write a workbook. `team_name` of `None` omits `meta`.
fn generate(workbook: &Path, output: &Path, team_name: Option<&str>) -> Result<Dataset> {
    let mut dataset = load_workbook(workbook)?;
    enrich(&mut dataset);

    if let Some(team_name) = team_name {
        let source_file = workbook
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        dataset.meta = Some(Meta::new(team_name, source_file));
    }

    persist(output, &dataset)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    tracing::info!(output = %output.display(), "Wrote dataset");
    Ok(dataset)
}

fn print_counts(dataset: &Dataset) {
    for section in Section::ALL {
        println!(
            "  {:<22} {}",
            section.title().cyan(),
            dataset.section(section).len()
        );
    }
}
