mod analyze;
mod input;
mod model;
mod report;
mod utils;

use crate::analyze::{analyze_batches, Batch, BatchProgress, Report};
use crate::input::InputPair;
use crate::model::{MergeRequestExport, Team};
use crate::report::{ConsoleReport, MarkdownReport};
use crate::utils::ProgressStyleTemplate;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Merge request cycle time per team and ISO week")]
struct Args {
    #[arg(long = "data", default_value = "data")]
    data_path: PathBuf,
    #[arg(long = "teams", default_value = "team-members")]
    teams_path: PathBuf,
    #[arg(long, value_enum, default_value_t = Format::Console)]
    format: Format,
    #[arg(long = "output", default_value = ".")]
    output_path: PathBuf,
    #[arg(long = "log-level", env = "RUST_LOG", default_value = "info")]
    log_level: String,
    #[arg(long = "no-progress")]
    no_progress: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Console,
    Markdown,
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let pairs = input::pair_inputs(&args.data_path, &args.teams_path)?;
    info!(
        "Found {} export files in {}",
        pairs.len(),
        args.data_path.display()
    );

    let report = analyze(args, &pairs)?;
    if report.is_empty() {
        warn!("No merge request could be attributed to a team");
    }

    emit(args, &report)
}

/// Parses every paired roster first, so a broken roster stops the run before
/// any export is analyzed. Exports are then read one batch at a time.
fn analyze(args: &Args, pairs: &[InputPair]) -> model::Result<Report> {
    let rosters = pairs
        .iter()
        .map(load_roster)
        .collect::<model::Result<Vec<_>>>()?;

    let pb = progress_bar(args, pairs.len());
    let progress_pb = pb.clone();
    let progress: BatchProgress = Box::new(move |batch: &Batch| {
        progress_pb.set_message(batch.name.clone());
        progress_pb.inc(1);
    });
    let batches = pairs
        .iter()
        .zip(rosters)
        .map(|(pair, roster)| load_batch(pair, roster));
    let report = analyze_batches(batches, progress)?;
    pb.finish_with_message(format!("✅ Analyzed {} merge requests", report.len()));
    Ok(report)
}

fn progress_bar(args: &Args, len: usize) -> ProgressBar {
    if args.no_progress {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64).with_style(ProgressStyleTemplate::files_bar());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn load_roster(pair: &InputPair) -> model::Result<Option<Vec<Team>>> {
    let Some(path) = &pair.roster else {
        return Ok(None);
    };
    let teams = Team::from_config(path)?;
    info!("Successfully opened JSON file {}", path.display());
    Ok(Some(teams))
}

fn load_batch(pair: &InputPair, roster: Option<Vec<Team>>) -> model::Result<Batch> {
    let export = MergeRequestExport::from_config(&pair.export)?;
    info!(
        "Successfully opened JSON file {} ({} merge requests in {})",
        pair.export.display(),
        export.len(),
        export.project_name()
    );

    let name = pair
        .export
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| pair.index.clone());
    Ok(Batch {
        name,
        roster,
        export,
    })
}

fn emit(args: &Args, report: &Report) -> anyhow::Result<()> {
    match args.format {
        Format::Console => {
            let mut out = std::io::stdout().lock();
            report
                .write_console(&mut out)
                .context("Failed to print report")
        }
        Format::Markdown => {
            fs::create_dir_all(&args.output_path).with_context(|| {
                format!("Failed to create {}", args.output_path.display())
            })?;
            for (team, _) in report.teams() {
                let path = report.report_create(team, &args.output_path)?;
                info!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}
