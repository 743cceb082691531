// src/matching/url.rs
// Reduction of a URL or bare domain to its registrable-name label: the
// dot-separated segment immediately left of the TLD.

/// Reduce a URL or bare domain to the label left of the top-level domain.
///
/// "https://www.example.com/about" -> "example", "apple.com" -> "apple",
/// "ibm" -> "ibm" (no dot, returned whole). Multi-part public suffixes are
/// not special-cased, so "example.co.uk" reduces to "co" — a known quirk
/// the rest of the battery is calibrated around.
pub fn extract_domain_label(text: &str) -> String {
    let mut s = text.trim().to_lowercase();

    if let Some(rest) = s.strip_prefix("https://") {
        s = rest.to_string();
    } else if let Some(rest) = s.strip_prefix("http://") {
        s = rest.to_string();
    }

    if let Some(slash) = s.find('/') {
        s.truncate(slash);
    }

    if let Some(rest) = s.strip_prefix("www.") {
        s = rest.to_string();
    }

    let labels: Vec<&str> = s.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2].to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain() {
        assert_eq!(extract_domain_label("apple.com"), "apple");
        assert_eq!(extract_domain_label("Example.ORG"), "example");
        assert_eq!(extract_domain_label("totallyunrelated.io"), "totallyunrelated");
    }

    #[test]
    fn test_full_url() {
        assert_eq!(extract_domain_label("https://www.apple.com/uk/store"), "apple");
        assert_eq!(extract_domain_label("http://example.com/path?x=1"), "example");
        assert_eq!(extract_domain_label("  https://WWW.Example.com  "), "example");
    }

    #[test]
    fn test_second_level_tld_quirk() {
        // Documented behavior: no public-suffix awareness.
        assert_eq!(extract_domain_label("https://www.example.co.uk/path?x=1"), "co");
        assert_eq!(extract_domain_label("example.co.uk"), "co");
    }

    #[test]
    fn test_label_without_dot_passes_through() {
        assert_eq!(extract_domain_label("ibm"), "ibm");
        assert_eq!(extract_domain_label("thehutgroup"), "thehutgroup");
        assert_eq!(extract_domain_label(""), "");
    }

    #[test]
    fn test_subdomain() {
        assert_eq!(extract_domain_label("shop.example.com"), "example");
        assert_eq!(extract_domain_label("www.sub.example.com"), "example");
    }
}
