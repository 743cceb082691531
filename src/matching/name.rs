// src/matching/name.rs
// Company-name normalization: lowercase, scrub punctuation, drop legal-entity
// suffix tokens. Intentionally shallow; the heavy lifting is the verdict
// battery, which works on the surviving tokens.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::tables::EquivalenceTables;

static NON_ALNUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9 ]+").expect("static pattern is valid"));

/// Normalize a raw company name into a lowercase token sequence joined by
/// single spaces, with legal-entity suffixes removed.
///
/// Idempotent: normalizing an already-normalized name returns it unchanged.
/// Malformed input degrades to an empty string rather than failing.
pub fn normalize_name(name: &str, tables: &EquivalenceTables) -> String {
    let lowered = name.to_lowercase();
    let scrubbed = NON_ALNUM.replace_all(&lowered, " ");
    scrubbed
        .split_whitespace()
        .filter(|token| !tables.legal_suffixes.contains(*token))
        .collect::<Vec<_>>()
        .join(" ")
}
