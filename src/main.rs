use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use miette::{Context, IntoDiagnostic, Result};

use tenure_pool::{default_workers, run, ResultSink, WorkQueue};
use tenure_spans::analyze_repository;

#[derive(Parser)]
#[command(
    name = "tenure",
    version,
    about = "Contributor tenure statistics across a directory of git repositories",
    long_about = "Tenure mines every git repository found directly under a root directory\n\
                   and reports, per repository, how long contributors stayed active:\n\
                   the whole days between each contributor's first and most recent commit.\n\
                   Contributors whose history fits inside a single day are excluded.\n\n\
                   Output is a CSV with the columns repo,authors,smallest,middle,largest,mean.\n\n\
                   Examples:\n  \
                     tenure ~/src                      Analyze every repo under ~/src\n  \
                     tenure ~/src --output -           Write the CSV to stdout\n  \
                     tenure ~/src --workers 4          Cap the worker pool at 4 threads\n  \
                     tenure ~/src --branch develop     Walk a branch instead of HEAD"
)]
struct Cli {
    /// Directory containing one subdirectory per repository
    root: PathBuf,

    /// CSV output path; use "-" for stdout (default: tenure.csv)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Worker threads (default: processor count minus two, at least one)
    #[arg(long)]
    workers: Option<usize>,

    /// Branch to walk instead of HEAD
    #[arg(long)]
    branch: Option<String>,

    /// Path to configuration file (default: .tenure.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => tenure_core::TenureConfig::from_file(path).into_diagnostic()?,
        None => {
            let default_path = Path::new(".tenure.toml");
            if default_path.exists() {
                tenure_core::TenureConfig::from_file(default_path).into_diagnostic()?
            } else {
                tenure_core::TenureConfig::default()
            }
        }
    };

    // CLI flags win over the config file, which wins over defaults.
    let workers = cli
        .workers
        .or(config.scan.workers)
        .unwrap_or_else(default_workers)
        .max(1);
    let branch = cli.branch.or(config.scan.branch);
    let output = cli
        .output
        .or(config.report.output)
        .unwrap_or_else(|| PathBuf::from("tenure.csv"));

    let repos = enumerate_repositories(&cli.root)?;
    if repos.is_empty() {
        miette::bail!(
            "no repository directories found under {}",
            cli.root.display()
        );
    }

    if cli.verbose {
        eprintln!(
            "analyzing {} repositories with {} workers",
            repos.len(),
            workers
        );
    }

    let bar = ProgressBar::new(repos.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}").expect("progress template"),
    );
    bar.set_message("analyzing");

    let queue = WorkQueue::load(repos);
    let sink = ResultSink::new();
    let branch = branch.as_deref();
    let report = run(&queue, &sink, workers, |path| {
        let result = analyze_repository(path, branch);
        bar.inc(1);
        result
    });
    bar.finish_and_clear();

    for (path, reason) in &report.skipped {
        eprintln!("skipped {}: {reason}", path.display());
    }
    eprintln!(
        "analyzed {} repositories ({} skipped)",
        report.analyzed,
        report.skipped.len()
    );

    let mut summaries = sink.into_summaries();
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    write_report(&output, &summaries)?;

    if cli.verbose && output != Path::new("-") {
        eprintln!("report written to {}", output.display());
    }
    Ok(())
}

/// Every immediate subdirectory of `root`, sorted by name. The base name
/// of each subdirectory is the repository's display name in the report.
fn enumerate_repositories(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(root)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read root directory {}", root.display()))?;

    let mut repos = Vec::new();
    for entry in entries {
        let entry = entry.into_diagnostic()?;
        let file_type = entry.file_type().into_diagnostic()?;
        if file_type.is_dir() {
            repos.push(entry.path());
        }
    }
    repos.sort();
    Ok(repos)
}

/// Write the CSV report to `output`, or to stdout when `output` is `-`.
fn write_report(output: &Path, summaries: &[tenure_core::RepoSummary]) -> Result<()> {
    let mut content = String::with_capacity(64 * (summaries.len() + 1));
    content.push_str(tenure_core::CSV_HEADER);
    content.push('\n');
    for summary in summaries {
        content.push_str(&summary.csv_row());
        content.push('\n');
    }

    if output == Path::new("-") {
        std::io::stdout()
            .write_all(content.as_bytes())
            .into_diagnostic()?;
    } else {
        std::fs::write(output, content)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot write report to {}", output.display()))?;
    }
    Ok(())
}
