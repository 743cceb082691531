// src/matching/email.rs

/// Extract the domain part of an email address.
///
/// Returns the full host after the last '@', lowercased, with any leading
/// "www." and trailing path removed. Unlike [`extract_domain_label`], no
/// TLD-label reduction is applied: "jane@sub.example.com" yields
/// "sub.example.com". Callers wanting registrable-name granularity route
/// the result through the URL reduction themselves.
///
/// [`extract_domain_label`]: crate::matching::url::extract_domain_label
pub fn extract_email_domain(text: &str) -> String {
    let trimmed = text.trim();
    let Some(at) = trimmed.rfind('@') else {
        return String::new();
    };

    let mut domain = trimmed[at + 1..].trim().to_lowercase();

    if let Some(slash) = domain.find('/') {
        domain.truncate(slash);
    }

    if let Some(rest) = domain.strip_prefix("www.") {
        domain = rest.to_string();
    }

    domain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_address() {
        assert_eq!(extract_email_domain("jane@example.com"), "example.com");
        assert_eq!(extract_email_domain("JANE@EXAMPLE.COM"), "example.com");
        assert_eq!(extract_email_domain("  jane@example.com  "), "example.com");
    }

    #[test]
    fn test_no_tld_reduction() {
        // Distinct contract from the URL extractor: the host is kept whole.
        assert_eq!(extract_email_domain("jane@sub.example.com"), "sub.example.com");
        assert_eq!(extract_email_domain("jane@example.co.uk"), "example.co.uk");
    }

    #[test]
    fn test_www_and_path_stripping() {
        assert_eq!(extract_email_domain("jane@www.example.com"), "example.com");
        assert_eq!(extract_email_domain("jane@example.com/mailbox"), "example.com");
    }

    #[test]
    fn test_missing_or_odd_at() {
        assert_eq!(extract_email_domain("not an email"), "");
        assert_eq!(extract_email_domain(""), "");
        // Last '@' wins on malformed doubles.
        assert_eq!(extract_email_domain("a@b@example.com"), "example.com");
    }
}
