//! Word sampling from newline-delimited word-list files
//!
//! The sampler reads the first N lines of the word list in file order and
//! extracts one word per line. No line beyond the Nth is read, so results
//! are deterministic for a fixed file and fixed N.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Errors produced while sampling words from a word-list file
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("cannot open word list {path}: {source}")]
    FileNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("requested {requested} words, file contains only {available}")]
    EndOfInput { requested: usize, available: usize },

    #[error("word list line {line} is blank, expected at least one token")]
    MalformedInput { line: usize },

    #[error("read error at word list line {line}: {source}")]
    Read {
        line: usize,
        source: std::io::Error,
    },
}

/// Read the first `count` words from the word list at `path`.
///
/// A word is the token before the first whitespace run on a line; a line
/// without whitespace yields the whole line minus its trailing newline.
/// Fails with [`SampleError::EndOfInput`] if the file has fewer than
/// `count` lines, and with [`SampleError::MalformedInput`] if a sampled
/// line holds no token at all.
pub fn sample_words(path: &Path, count: usize) -> Result<Vec<String>, SampleError> {
    let file = File::open(path).map_err(|source| SampleError::FileNotFound {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    // Cap the preallocation: an oversized count must reach the EndOfInput
    // check below, not abort on an overflowing reservation.
    let mut words = Vec::with_capacity(count.min(1024));
    let mut line = String::new();
    for index in 0..count {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .map_err(|source| SampleError::Read {
                line: index + 1,
                source,
            })?;
        if bytes_read == 0 {
            return Err(SampleError::EndOfInput {
                requested: count,
                available: index,
            });
        }
        match line.split_whitespace().next() {
            Some(word) => words.push(word.to_string()),
            None => return Err(SampleError::MalformedInput { line: index + 1 }),
        }
    }

    debug!(count = words.len(), path = %path.display(), "sampled words");
    Ok(words)
}
