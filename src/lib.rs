// src/lib.rs
// Company name / web domain reconciliation engine.
//
// The matching battery lives in `matching::verdict`; everything else is
// normalization, static equivalence data, and the thin batch shell that
// walks a delimited file row by row.

pub mod batch;
pub mod matching;
pub mod models;
pub mod utils;

// Re-export the engine surface for cleaner imports
pub use matching::email::extract_email_domain;
pub use matching::name::normalize_name;
pub use matching::url::extract_domain_label;
pub use matching::verdict::{compare, compare_with_tables};
pub use models::matching::{MatchLabel, Verdict};
pub use utils::tables::EquivalenceTables;
