//! Bag-of-words term vectors and cosine similarity.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Token → occurrence count for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    counts: HashMap<String, u32>,
}

impl TermVector {
    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Euclidean norm over every term in this vector.
    pub fn norm(&self) -> f64 {
        self.counts
            .values()
            .map(|&c| f64::from(c) * f64::from(c))
            .sum::<f64>()
            .sqrt()
    }
}

/// Splits `text` into maximal runs of word characters, case-folds them and counts.
pub fn vectorize(text: &str) -> TermVector {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for m in WORD_RE.find_iter(text) {
        *counts.entry(m.as_str().to_lowercase()).or_insert(0) += 1;
    }
    TermVector { counts }
}

/// Dot product over the shared vocabulary divided by the product of the full norms.
/// Returns 0.0 when either vector is empty.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Iterate the smaller side; absent terms contribute zero.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let numerator: f64 = small
        .counts
        .iter()
        .map(|(term, &count)| f64::from(count) * f64::from(large.get(term)))
        .sum();

    numerator / (a.norm() * b.norm())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectorize_is_case_insensitive() {
        assert_eq!(vectorize("Go Go"), vectorize("go GO"));
        assert_eq!(vectorize("Go Go").get("go"), 2);
    }

    #[test]
    fn test_vectorize_splits_on_punctuation() {
        let v = vectorize("C++, Rust/Go; node_js (5+ years)");
        assert_eq!(v.get("c"), 1);
        assert_eq!(v.get("rust"), 1);
        assert_eq!(v.get("go"), 1);
        assert_eq!(v.get("node_js"), 1);
        assert_eq!(v.get("5"), 1);
        assert_eq!(v.get("years"), 1);
        assert_eq!(v.len(), 6);
    }

    #[test]
    fn test_vectorize_empty_and_symbol_only_input() {
        assert!(vectorize("").is_empty());
        assert!(vectorize("  --- !!! ...").is_empty());
    }

    #[test]
    fn test_vectorize_handles_unicode_words() {
        let v = vectorize("Müller ÉCOLE école");
        assert_eq!(v.get("müller"), 1);
        assert_eq!(v.get("école"), 2);
    }

    #[test]
    fn test_norm() {
        // counts 3 and 4 → sqrt(9 + 16) = 5
        let v = vectorize("a a a b b b b");
        assert!((v.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_identical_is_one() {
        let v = vectorize("rust tokio axum serde tracing");
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_disjoint_is_zero() {
        let a = vectorize("rust tokio");
        let b = vectorize("java spring");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_with_empty_vector_is_zero() {
        let a = vectorize("rust tokio");
        assert_eq!(cosine_similarity(&a, &TermVector::default()), 0.0);
        assert_eq!(cosine_similarity(&TermVector::default(), &a), 0.0);
    }

    #[test]
    fn test_cosine_uses_full_norms() {
        // dot = 1, |a| = sqrt(2), |b| = sqrt(2) → 0.5
        let a = vectorize("rust go");
        let b = vectorize("rust java");
        assert!((cosine_similarity(&a, &b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = vectorize("rust rust go kafka");
        let b = vectorize("rust kafka kafka python sql");
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }
}
