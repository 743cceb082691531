// src/matching/similarity.rs
// Internal string-similarity primitives for the verdict battery. Levenshtein
// core from strsim; the windowed and token-sorted variants are our own.
//
// All scores are integers in [0, 100]. Two empty strings score 100; exactly
// one empty string scores 0.

use strsim::normalized_levenshtein;

/// Plain normalized-Levenshtein similarity, scaled to [0, 100].
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    (normalized_levenshtein(a, b) * 100.0).round() as u8
}

/// Best similarity achievable by aligning the shorter string against any
/// equal-length character window of the longer one. Tolerant of one string
/// being a substring-ish match of the other.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let long_chars: Vec<char> = long.chars().collect();
    let window_len = short.chars().count();

    let mut best = 0u8;
    for start in 0..=(long_chars.len() - window_len) {
        let window: String = long_chars[start..start + window_len].iter().collect();
        let score = ratio(short, &window);
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }
    best
}

/// Similarity after alphabetically sorting each side's whitespace tokens,
/// making the measure insensitive to word order.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_bounds() {
        assert_eq!(ratio("apple", "apple"), 100);
        assert_eq!(ratio("abc", "xyz"), 0);
        assert_eq!(ratio("", ""), 100);
        assert_eq!(ratio("apple", ""), 0);
        assert_eq!(ratio("", "apple"), 0);
    }

    #[test]
    fn test_ratio_symmetry() {
        for (a, b) in [("apple", "aple"), ("imperial brands", "imperial"), ("x", "xyz")] {
            assert_eq!(ratio(a, b), ratio(b, a));
        }
    }

    #[test]
    fn test_partial_ratio_substring() {
        // Perfect window alignment when one string contains the other.
        assert_eq!(partial_ratio("hut group", "the hut group"), 100);
        assert_eq!(partial_ratio("the hut group", "hut group"), 100);
        assert_eq!(partial_ratio("ibm", "ibm"), 100);
    }

    #[test]
    fn test_partial_ratio_bounds_and_symmetry() {
        assert_eq!(partial_ratio("", ""), 100);
        assert_eq!(partial_ratio("apple", ""), 0);
        for (a, b) in [("glaxo", "glaxosmithkline"), ("random", "unrelated")] {
            assert_eq!(partial_ratio(a, b), partial_ratio(b, a));
            assert!(partial_ratio(a, b) <= 100);
        }
        // Windowed score never undercuts the plain ratio.
        assert!(partial_ratio("acme labs", "acme laboratories") >= ratio("acme labs", "acme laboratories"));
    }

    #[test]
    fn test_token_sort_ignores_word_order() {
        assert_eq!(token_sort_ratio("brands imperial", "imperial brands"), 100);
        assert_eq!(token_sort_ratio("the hut group", "group hut the"), 100);
        assert!(token_sort_ratio("imperial brands", "imperial tobacco") < 100);
    }

    #[test]
    fn test_multibyte_windows() {
        // Char-based windowing must not split multibyte sequences.
        let score = partial_ratio("münchen", "stadt münchen bayern");
        assert_eq!(score, 100);
    }
}
