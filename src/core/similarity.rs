use std::collections::BTreeSet;

/// Credit awarded to a term that only partially (substring) matches
const PARTIAL_MATCH_CREDIT: f64 = 0.5;

/// Normalize a term collection into a set: trimmed and lowercased
///
/// Terms that are blank after trimming are kept as "". An empty term is a
/// substring of every other term, so it earns partial credit in fuzzy scoring.
///
/// A `BTreeSet` keeps iteration order deterministic so fuzzy scanning never
/// depends on the caller's input order.
pub fn normalize_terms<S: AsRef<str>>(items: &[S]) -> BTreeSet<String> {
    items
        .iter()
        .map(|item| item.as_ref().trim().to_lowercase())
        .collect()
}

/// Whether either term contains the other
#[inline]
pub fn is_partial_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Exact Jaccard similarity over normalized term sets
///
/// Returns 0.0 when both collections are empty.
pub fn jaccard_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a = normalize_terms(a);
    let set_b = normalize_terms(b);

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// Substring-tolerant Jaccard similarity
///
/// Every term of `a` earns 1.0 for an exact hit in `b`, otherwise 0.5 for the
/// first term of `b` it contains or is contained by. The total is divided by
/// the size of the exact union. Short tokens match generously: "ai" partially
/// matches "air".
pub fn fuzzy_jaccard_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a = normalize_terms(a);
    let set_b = normalize_terms(b);

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let mut total = 0.0;
    for term in &set_a {
        if set_b.contains(term) {
            total += 1.0;
        } else if set_b.iter().any(|other| is_partial_match(term, other)) {
            total += PARTIAL_MATCH_CREDIT;
        }
    }

    (total / union as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: [&str; 0] = [];

    #[test]
    fn test_normalize_terms() {
        let terms = normalize_terms(&["  AI ", "ai", "", "   ", "Product"]);
        assert_eq!(terms.len(), 3);
        assert!(terms.contains("ai"));
        assert!(terms.contains("product"));
        assert!(terms.contains(""));
    }

    #[test]
    fn test_blank_terms_count_toward_union() {
        // "" is a substring of "y": one partial credit over a union of 3
        let fuzzy = fuzzy_jaccard_similarity(&["", "x"], &["y"]);
        assert!((fuzzy - 0.5 / 3.0).abs() < 1e-9);

        // "" is shared exactly: 1 of {"", "a", "b"}
        let exact = jaccard_similarity(&["", "a"], &["", "b"]);
        assert!((exact - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_jaccard_empty_is_zero() {
        assert_eq!(jaccard_similarity(&EMPTY, &EMPTY), 0.0);
        assert_eq!(fuzzy_jaccard_similarity(&EMPTY, &EMPTY), 0.0);
    }

    #[test]
    fn test_jaccard_identical_is_one() {
        let set = ["rust", "go", "python"];
        assert_eq!(jaccard_similarity(&set, &set), 1.0);
        assert_eq!(fuzzy_jaccard_similarity(&set, &set), 1.0);
    }

    #[test]
    fn test_jaccard_case_and_whitespace_insensitive() {
        assert_eq!(jaccard_similarity(&[" Rust"], &["rust "]), 1.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        let a = ["rust", "go"];
        let b = ["go", "python"];
        // 1 shared / 3 total
        assert!((jaccard_similarity(&a, &b) - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_jaccard_one_side_empty() {
        assert_eq!(jaccard_similarity(&["rust"], &EMPTY), 0.0);
        assert_eq!(fuzzy_jaccard_similarity(&["rust"], &EMPTY), 0.0);
    }

    #[test]
    fn test_fuzzy_partial_credit() {
        // "fundraising" is contained in "fundraising advice": 0.5 / union of 2
        let score = fuzzy_jaccard_similarity(&["fundraising"], &["fundraising advice"]);
        assert!((score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_partial_counts_once_per_term() {
        // "ai" is inside both "air" and "said" but only earns one partial credit
        let score = fuzzy_jaccard_similarity(&["ai"], &["air", "said"]);
        assert!((score - 0.5 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_short_token_false_positive_is_kept() {
        // Known limitation: no minimum length guard on substring matches
        let score = fuzzy_jaccard_similarity(&["ai"], &["air"]);
        assert!((score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_exact_beats_partial() {
        let exact = fuzzy_jaccard_similarity(&["design"], &["design"]);
        let partial = fuzzy_jaccard_similarity(&["design"], &["product design"]);
        assert!(exact > partial);
    }
}
