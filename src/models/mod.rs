// src/models/mod.rs

pub mod matching;

pub use matching::{MatchLabel, ReconciliationStats, RowOutcome, Verdict};
