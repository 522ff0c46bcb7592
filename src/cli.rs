//! CLI argument parsing for Triebench

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for the benchmark report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "triebench")]
#[command(version)]
#[command(about = "Queries-per-second benchmark for approximate-matching executables", long_about = None)]
pub struct Cli {
    /// Path to the executable under test
    #[arg(long = "app", value_name = "PATH")]
    pub app: String,

    /// Argument passed through to the executable (e.g., path to its trie data file)
    #[arg(long = "trie", value_name = "PATH")]
    pub trie: String,

    /// Number of words to sample and queries to issue
    #[arg(long = "run", value_name = "COUNT", default_value = "10")]
    pub run: usize,

    /// Word-list file, one candidate word per line
    #[arg(long = "words", value_name = "PATH")]
    pub words: PathBuf,

    /// Distance parameter embedded in every query line
    #[arg(long = "dist", value_name = "DIST", default_value = "0")]
    pub dist: i64,

    /// Kill the external call after this many seconds
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
