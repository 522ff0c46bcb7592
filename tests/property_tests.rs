//! Property-based tests for the sampling and formatting contracts

use std::io::Write;

use proptest::prelude::*;
use tempfile::NamedTempFile;

use triebench::{query, sampler};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_formatter_line_per_word(
        words in prop::collection::vec("[a-z]{1,12}", 0..50),
        dist in -1000i64..1000,
    ) {
        let payload = query::format_queries(&words, dist);
        let lines: Vec<&str> = if payload.is_empty() {
            Vec::new()
        } else {
            payload.split('\n').collect()
        };

        prop_assert_eq!(lines.len(), words.len());
        for (line, word) in lines.iter().zip(&words) {
            prop_assert_eq!(line.to_string(), format!("approx {dist} {word}"));
        }
    }

    #[test]
    fn prop_formatter_permutation_permutes_lines(
        words in prop::collection::vec("[a-z]{1,8}", 1..20),
    ) {
        let forward = query::format_queries(&words, 1);
        let mut reversed_words = words.clone();
        reversed_words.reverse();
        let reversed = query::format_queries(&reversed_words, 1);

        let mut lines: Vec<&str> = forward.split('\n').collect();
        lines.reverse();
        prop_assert_eq!(lines, reversed.split('\n').collect::<Vec<_>>());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_sampler_returns_first_tokens(
        rows in prop::collection::vec(("[a-z]{1,10}", 0u32..100), 1..30),
    ) {
        let mut file = NamedTempFile::new().unwrap();
        for (word, freq) in &rows {
            writeln!(file, "{word} {freq}").unwrap();
        }
        file.flush().unwrap();

        for n in [0, rows.len() / 2, rows.len()] {
            let words = sampler::sample_words(file.path(), n).unwrap();
            prop_assert_eq!(words.len(), n);
            for (sampled, (expected, _)) in words.iter().zip(&rows) {
                prop_assert_eq!(sampled, expected);
            }
        }
    }

    #[test]
    fn prop_sampler_fails_past_end(
        rows in prop::collection::vec("[a-z]{1,10}", 0..10),
        extra in 1usize..5,
    ) {
        let mut file = NamedTempFile::new().unwrap();
        for word in &rows {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();

        let err = sampler::sample_words(file.path(), rows.len() + extra).unwrap_err();
        match err {
            sampler::SampleError::EndOfInput { requested, available } => {
                prop_assert_eq!(requested, rows.len() + extra);
                prop_assert_eq!(available, rows.len());
            }
            other => prop_assert!(false, "expected EndOfInput, got {other:?}"),
        }
    }
}
