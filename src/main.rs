use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use triebench::cli::{Cli, OutputFormat};
use triebench::report::BenchReport;
use triebench::{query, runner, sampler};

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    // Sampling and formatting happen before any process is spawned, so a
    // short or malformed word list never launches the tool.
    let words = sampler::sample_words(&args.words, args.run)?;
    let payload = query::format_queries(&words, args.dist);
    tracing::debug!(queries = words.len(), bytes = payload.len(), "payload ready");

    let timeout = args.timeout.map(Duration::from_secs);
    let run = runner::run_once(&args.app, &args.trie, &payload, timeout)?;

    let report = BenchReport::new(args.run, run.elapsed);
    match args.format {
        OutputFormat::Text => println!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json().context("serializing report")?),
    }

    Ok(())
}
