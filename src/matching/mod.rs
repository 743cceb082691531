// src/matching/mod.rs

pub mod email;
pub mod name;
pub mod similarity;
pub mod url;
pub mod verdict;

// Re-export the engine surface for cleaner imports
pub use email::extract_email_domain;
pub use name::normalize_name;
pub use url::extract_domain_label;
pub use verdict::{compare, compare_with_tables};
