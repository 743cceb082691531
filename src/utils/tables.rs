// src/utils/tables.rs
// Static equivalence data: legal-suffix set, country synonym map, and
// domain-to-canonical-name overrides. Built once at startup, immutable for
// the process lifetime.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Tokens removed during company-name normalization. Legal-entity suffixes
/// only; generic corporate words ("group", "holdings", ...) must survive
/// normalization so the brand-term rule can see them.
const LEGAL_SUFFIXES: [&str; 28] = [
    "inc",
    "incorporated",
    "corp",
    "corporation",
    "llc",
    "ltd",
    "limited",
    "plc",
    "co",
    "company",
    "gmbh",
    "ag",
    "sa",
    "sarl",
    "srl",
    "bv",
    "nv",
    "ab",
    "oy",
    "as",
    "kk",
    "pty",
    "llp",
    "lp",
    "lllp",
    "pc",
    "pllc",
    "kgaa",
];

/// Country-name aliases, alias -> canonical. Not consulted by the matching
/// battery itself; exposed for upstream column normalization.
const COUNTRY_SYNONYMS: [(&str, &str); 12] = [
    ("uk", "united kingdom"),
    ("gb", "united kingdom"),
    ("great britain", "united kingdom"),
    ("usa", "united states"),
    ("us", "united states"),
    ("america", "united states"),
    ("uae", "united arab emirates"),
    ("holland", "netherlands"),
    ("deutschland", "germany"),
    ("suisse", "switzerland"),
    ("espana", "spain"),
    ("roi", "ireland"),
];

/// Known domain labels whose registrable name does not resemble the company
/// name. A hit replaces the extracted label with the canonical phrase before
/// any heuristic runs.
const DOMAIN_OVERRIDES: [(&str, &str); 8] = [
    ("thehutgroup", "the hut group"),
    ("gsk", "glaxosmithkline"),
    ("jlr", "jaguar land rover"),
    ("pmi", "philip morris international"),
    ("ab-inbev", "anheuser busch inbev"),
    ("bat", "british american tobacco"),
    ("lvmh", "moet hennessy louis vuitton"),
    ("ihg", "intercontinental hotels group"),
];

/// Immutable lookup data shared by every comparison. Constructed once and
/// passed by reference; no synchronization needed.
#[derive(Debug, Clone)]
pub struct EquivalenceTables {
    pub legal_suffixes: HashSet<String>,
    pub country_synonyms: HashMap<String, String>,
    pub domain_overrides: HashMap<String, String>,
}

impl EquivalenceTables {
    pub fn new() -> Self {
        Self {
            legal_suffixes: LEGAL_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            country_synonyms: COUNTRY_SYNONYMS
                .iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
            domain_overrides: DOMAIN_OVERRIDES
                .iter()
                .map(|(label, canonical)| (label.to_string(), canonical.to_string()))
                .collect(),
        }
    }

    /// Canonical country name for an alias, if one is known.
    pub fn canonical_country(&self, alias: &str) -> Option<&str> {
        self.country_synonyms
            .get(alias.trim().to_lowercase().as_str())
            .map(|s| s.as_str())
    }
}

impl Default for EquivalenceTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide default tables.
pub static TABLES: Lazy<EquivalenceTables> = Lazy::new(EquivalenceTables::new);
