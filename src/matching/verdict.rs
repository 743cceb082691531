// src/matching/verdict.rs
// The name/domain equivalence battery: an ordered set of heuristic rules,
// first match wins. Pure function of its inputs and the static tables; no
// I/O, no locks, safe to call concurrently.

use log::debug;

use crate::matching::name::normalize_name;
use crate::matching::similarity::{partial_ratio, token_sort_ratio};
use crate::matching::url::extract_domain_label;
use crate::models::matching::{MatchLabel, Verdict};
use crate::utils::tables::{EquivalenceTables, TABLES};

// Rule thresholds, all on the 0-100 similarity scale.
const GLOBAL_MATCH_THRESHOLD: u8 = 70;
const STRONG_FUZZY_THRESHOLD: u8 = 85;
const BRAND_OVERLAP_THRESHOLD: u8 = 75;
const ACRONYM_SIMILARITY_THRESHOLD: u8 = 80;
const ACRONYM_CONFIDENCE: u8 = 95;

// Domains longer than this are never treated as acronym candidates.
const MAX_ACRONYM_DOMAIN_LEN: usize = 5;
// Company tokens must be longer than this to contribute an acronym letter.
const MIN_ACRONYM_TOKEN_LEN: usize = 2;

pub const REASON_MISSING_INPUT: &str = "missing input";
pub const REASON_DIRECT_CONTAINMENT: &str = "direct containment";
pub const REASON_TOKEN_OVERLAP: &str = "token overlap";
pub const REASON_BRAND_OVERLAP: &str = "brand pattern overlap";
pub const REASON_STRONG_FUZZY: &str = "strong fuzzy";
pub const REASON_WEAK_FUZZY: &str = "weak fuzzy";
pub const REASON_LOW_SIMILARITY: &str = "low similarity";

/// Generic corporate words that carry brand signal when they appear on both
/// sides of a comparison.
const BRAND_TERMS: [&str; 15] = [
    "group",
    "holdings",
    "international",
    "enterprise",
    "labs",
    "solutions",
    "systems",
    "network",
    "industries",
    "pharma",
    "medical",
    "health",
    "energy",
    "motors",
    "brands",
];

/// Compare a raw company name against a raw domain / URL / email-domain
/// string using the process-wide default tables.
pub fn compare(company: Option<&str>, domain: Option<&str>) -> Verdict {
    compare_with_tables(company, domain, &TABLES)
}

/// Compare with caller-supplied equivalence tables.
///
/// Missing input on either side is a legitimate terminal classification
/// (`Unsure`, score 0), never an error: a single bad row must not abort a
/// batch.
pub fn compare_with_tables(
    company: Option<&str>,
    domain: Option<&str>,
    tables: &EquivalenceTables,
) -> Verdict {
    let (Some(company), Some(domain)) = (company, domain) else {
        return Verdict::new(MatchLabel::Unsure, 0, REASON_MISSING_INPUT);
    };

    // Rule 1: normalize both sides, then apply a domain override if one is
    // registered for the extracted label. Overrides take precedence over
    // every heuristic below.
    let c = normalize_name(company, tables);
    let mut d = extract_domain_label(domain);
    if let Some(canonical) = tables.domain_overrides.get(d.as_str()) {
        debug!("domain override: {} -> {}", d, canonical);
        d = canonical.clone();
    }

    // Rule 2: direct containment, the highest-confidence and cheapest
    // signal. Checked space-free in both directions; empty strings are
    // excluded so a blank side cannot vacuously "contain" anything.
    let c_nospace: String = c.chars().filter(|ch| *ch != ' ').collect();
    let d_nospace: String = d.chars().filter(|ch| *ch != ' ').collect();
    if !c_nospace.is_empty()
        && !d_nospace.is_empty()
        && (c_nospace.contains(&d_nospace) || d_nospace.contains(&c_nospace))
    {
        return Verdict::new(MatchLabel::LikelyMatch, 100, REASON_DIRECT_CONTAINMENT);
    }

    // Rule 3: short all-alphabetic domains are often acronyms ("ibm").
    let d_len = d.chars().count();
    if d_len > 0 && d_len <= MAX_ACRONYM_DOMAIN_LEN && d.chars().all(|ch| ch.is_ascii_alphabetic())
    {
        let acronym: String = c
            .split_whitespace()
            .filter(|token| token.chars().count() > MIN_ACRONYM_TOKEN_LEN)
            .filter_map(|token| token.chars().next())
            .collect();
        if !acronym.is_empty() && partial_ratio(&acronym, &d) >= ACRONYM_SIMILARITY_THRESHOLD {
            return Verdict::new(
                MatchLabel::LikelyMatch,
                ACRONYM_CONFIDENCE,
                format!("acronym match ({} ↔ {})", d.to_uppercase(), acronym),
            );
        }
    }

    // Rule 4: shared token in either direction, confirmed by alignment.
    let token_hit = d.split_whitespace().any(|token| c.contains(token))
        || c.split_whitespace().any(|token| d.contains(token));
    if token_hit {
        let score = partial_ratio(&c, &d);
        if score >= GLOBAL_MATCH_THRESHOLD {
            return Verdict::new(MatchLabel::LikelyMatch, score, REASON_TOKEN_OVERLAP);
        }
    }

    // Rule 5: generic corporate vocabulary on both sides.
    let brand_in_company = BRAND_TERMS
        .iter()
        .any(|term| c.split_whitespace().any(|token| token == *term));
    let brand_in_domain = BRAND_TERMS.iter().any(|term| d.contains(term));
    if brand_in_company && brand_in_domain {
        let score = partial_ratio(&c, &d);
        if score >= BRAND_OVERLAP_THRESHOLD {
            return Verdict::new(MatchLabel::LikelyMatch, score, REASON_BRAND_OVERLAP);
        }
    }

    // Rule 6: fuzzy fallback, best of word-order-insensitive and windowed
    // alignment similarity.
    let score = token_sort_ratio(&c, &d).max(partial_ratio(&c, &d));
    if score >= STRONG_FUZZY_THRESHOLD {
        Verdict::new(MatchLabel::LikelyMatch, score, REASON_STRONG_FUZZY)
    } else if score >= GLOBAL_MATCH_THRESHOLD {
        Verdict::new(MatchLabel::Unsure, score, REASON_WEAK_FUZZY)
    } else {
        Verdict::new(MatchLabel::LikelyNotMatch, score, REASON_LOW_SIMILARITY)
    }
}
