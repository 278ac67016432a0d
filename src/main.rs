use clap::Parser;
use image_optimizer::{BatchOutcome, BatchProcessor, BatchSummary, Cli};
use log::LevelFilter;
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    match run(cli) {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fehler: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<BatchSummary> {
    let request = cli.into_request()?;
    let processor = BatchProcessor::new(request).with_progress(std::io::stderr().is_terminal());

    Ok(processor.run()?)
}

fn print_summary(summary: &BatchSummary) {
    match summary.outcome() {
        BatchOutcome::Empty => println!("Keine Bilder im angegebenen Ordner gefunden."),
        BatchOutcome::Complete | BatchOutcome::Partial => println!(
            "\nFertig! {} von {} Bildern erfolgreich optimiert.",
            summary.succeeded, summary.total
        ),
    }
}
