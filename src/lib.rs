//! Triebench - queries-per-second benchmark harness for approximate-matching tools
//!
//! This library provides the building blocks for benchmarking an external
//! approximate-string-matching executable: sampling words from a word-list
//! file, formatting them into a batched query payload, running the
//! executable once with the payload on stdin, and reporting the elapsed
//! time and derived query rate.

pub mod cli;
pub mod query;
pub mod report;
pub mod runner;
pub mod sampler;
