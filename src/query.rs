//! Query payload construction
//!
//! Each sampled word becomes one query line of the form `approx <dist>
//! <word>`, the command format understood by the matcher under test. The
//! lines are joined with single newlines and no trailing newline, so the
//! payload can be piped directly to the tool's stdin.

/// Format one query line per word, preserving input order.
///
/// An empty word sequence yields an empty payload. Words are embedded
/// verbatim; duplicates produce duplicate query lines.
pub fn format_queries<S: AsRef<str>>(words: &[S], distance: i64) -> String {
    words
        .iter()
        .map(|word| format!("approx {} {}", distance, word.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
