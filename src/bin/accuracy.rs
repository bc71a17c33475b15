// Predicts every verb in the elicited corpus from its own seed forms and
// reports how many paradigms come out exactly right.
// Run with: cargo run --bin kovol_accuracy -- --verbose
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;
use kovol_core::comparison::{Outcome, VerbOutcome};
use kovol_core::config::KovolConfig;
use kovol_core::corpus::load_corpus;
use kovol_core::display::comparison_table;
use kovol_core::logging::init_tracing;
use kovol_core::persistence::save_report;
use kovol_core::{compare_batch, VerbRecord};

/// Command line of the `kovol_accuracy` binary.
#[derive(Debug, Parser)]
#[command(
    name = "kovol_accuracy",
    version,
    about = "Score paradigm predictions against the elicited verb corpus"
)]
struct Cli {
    /// Verbose mode (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Corpus file, overriding `corpus.path` from kovol.toml
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Report destination, overriding `corpus.report_path` (`.bin` selects bincode)
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, config: &mut KovolConfig) {
        if let Some(corpus) = &self.corpus {
            config.corpus.path = corpus.clone();
        }
        if let Some(report) = &self.report {
            config.corpus.report_path = report.clone();
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("kovol_accuracy error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose)
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;
    let mut config = KovolConfig::load().context("failed to load kovol.toml / KOVOL_* settings")?;
    cli.apply(&mut config);

    let records = load_corpus(&config.corpus.path)
        .with_context(|| format!("failed to read corpus {}", config.corpus.path.display()))?;
    let report = compare_batch(&records);

    for (record, verb) in records.iter().zip(&report.verbs) {
        print_outcome(record, verb);
    }

    println!(
        "\n{} of {} verbs predicted correctly ({:.1}%), {} rejected",
        report.correct(),
        report.total(),
        report.accuracy() * 100.0,
        report.rejected()
    );

    save_report(&report, &config.corpus.report_path).with_context(|| {
        format!("failed to save report to {}", config.corpus.report_path.display())
    })?;
    println!("Report saved to '{}'", config.corpus.report_path.display());
    Ok(())
}

fn print_outcome(record: &VerbRecord, verb: &VerbOutcome) {
    match &verb.outcome {
        Outcome::Rejected(reason) => {
            println!("\n{} \"{}\": {}", "REJECTED".red().bold(), verb.english, reason);
        }
        Outcome::Compared { errors, .. } if errors.is_empty() => {}
        Outcome::Compared { predicted, errors } => {
            println!("\n{}", comparison_table(record, predicted));
            for (slot, mismatch) in errors.iter() {
                println!(
                    "  {:<20} {} -> {}",
                    slot.label(),
                    mismatch.actual.as_str().red(),
                    mismatch.predicted.as_str().green()
                );
            }
        }
    }
}
