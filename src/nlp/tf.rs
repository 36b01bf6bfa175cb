//! Term-frequency document model
//!
//! A word-count vector over a token sequence, built once per scoring call
//! and immutable afterwards. Counts are case-normalized.

use rustc_hash::FxHashMap;

/// Term-frequency model (term = case-folded word).
#[derive(Debug, Clone)]
pub struct TfModel {
    terms: FxHashMap<String, u32>,
    max_frequency: u32,
}

impl TfModel {
    /// Build a model from a flat word sequence.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: FxHashMap<String, u32> = FxHashMap::default();
        for word in words {
            *terms.entry(word.as_ref().to_lowercase()).or_insert(0) += 1;
        }
        let max_frequency = terms.values().copied().max().unwrap_or(1);
        Self {
            terms,
            max_frequency,
        }
    }

    /// L2 norm of the count vector, usually written `||d||`.
    pub fn magnitude(&self) -> f64 {
        self.terms
            .values()
            .map(|&c| (c as f64) * (c as f64))
            .sum::<f64>()
            .sqrt()
    }

    /// Iterate over the distinct terms of the model.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Terms sorted by frequency in descending order, ties broken by term
    /// so the result is deterministic. `count` of 0 means no limit.
    pub fn most_frequent_terms(&self, count: usize) -> Vec<&str> {
        let mut terms: Vec<(&str, u32)> = self
            .terms
            .iter()
            .map(|(term, &freq)| (term.as_str(), freq))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let mut terms: Vec<&str> = terms.into_iter().map(|(term, _)| term).collect();
        if count > 0 {
            terms.truncate(count);
        }
        terms
    }

    /// Number of occurrences of `term` in the document.
    pub fn term_frequency(&self, term: &str) -> u32 {
        self.terms.get(term).copied().unwrap_or(0)
    }

    /// Maximum-normalized frequency of `term`, optionally smoothed:
    /// `smooth + (1 - smooth) * tf / max_tf`.
    ///
    /// Returns a value in `[0.0, 1.0]` for `smooth` in that range; 1.0 marks
    /// the most frequent term.
    pub fn normalized_term_frequency(&self, term: &str, smooth: f64) -> f64 {
        let frequency = self.term_frequency(term) as f64 / self.max_frequency as f64;
        smooth + (1.0 - smooth) * frequency
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the model has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_counts_are_case_normalized() {
        let model = TfModel::new(["The", "the", "fox"]);
        assert_eq!(model.term_frequency("the"), 2);
        assert_eq!(model.term_frequency("fox"), 1);
        assert_eq!(model.term_frequency("dog"), 0);
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_magnitude() {
        let model = TfModel::new(["a", "a", "b"]);
        // sqrt(2^2 + 1^2)
        assert_relative_eq!(model.magnitude(), 5.0_f64.sqrt());
    }

    #[test]
    fn test_most_frequent_terms_deterministic_ties() {
        let model = TfModel::new(["b", "a", "c", "c", "a", "b"]);
        // all tied at 2 -> alphabetical
        assert_eq!(model.most_frequent_terms(0), vec!["a", "b", "c"]);
        assert_eq!(model.most_frequent_terms(2), vec!["a", "b"]);
    }

    #[test]
    fn test_most_frequent_terms_by_frequency() {
        let model = TfModel::new(["x", "y", "y", "z", "z", "z"]);
        assert_eq!(model.most_frequent_terms(0), vec!["z", "y", "x"]);
    }

    #[test]
    fn test_normalized_term_frequency() {
        let model = TfModel::new(["w", "w", "w", "q"]);
        assert_relative_eq!(model.normalized_term_frequency("w", 0.0), 1.0);
        assert_relative_eq!(model.normalized_term_frequency("q", 0.0), 1.0 / 3.0);
        // smoothing dampens toward the constant
        assert_relative_eq!(model.normalized_term_frequency("q", 0.4), 0.4 + 0.6 / 3.0);
        assert_relative_eq!(model.normalized_term_frequency("missing", 0.4), 0.4);
    }

    #[test]
    fn test_empty_model() {
        let model = TfModel::new(Vec::<String>::new());
        assert!(model.is_empty());
        assert_eq!(model.magnitude(), 0.0);
        assert!(model.most_frequent_terms(0).is_empty());
    }
}
