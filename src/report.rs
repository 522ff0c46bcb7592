//! Benchmark report rendering

use std::time::Duration;

use serde::Serialize;

/// Result of one timed benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// Number of queries issued
    pub queries: usize,
    /// Wall-clock duration of the single invocation, in seconds
    pub elapsed_secs: f64,
    /// Derived rate: queries divided by elapsed seconds
    pub queries_per_second: f64,
}

impl BenchReport {
    /// Derive a report from the requested query count and measured duration.
    pub fn new(queries: usize, elapsed: Duration) -> Self {
        let elapsed_secs = elapsed.as_secs_f64();
        Self {
            queries,
            elapsed_secs,
            queries_per_second: queries as f64 / elapsed_secs,
        }
    }

    /// Two-line human-readable report.
    pub fn render_text(&self) -> String {
        format!(
            "Ran {} queries in {:.6}s.\n{:.2} queries per second.",
            self.queries, self.elapsed_secs, self.queries_per_second
        )
    }

    /// Machine-readable report for `--format json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
