//! Random baseline
//!
//! Assigns a uniformly random permutation of `0..N` as ratings. Useful as an
//! evaluation floor; the only sanctioned nondeterminism in the crate. Seed it
//! for reproducible runs.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::types::Document;

use super::{Ratings, Summarizer};

/// Random-permutation summarizer.
#[derive(Debug, Clone, Default)]
pub struct RandomSummarizer {
    seed: Option<u64>,
}

impl RandomSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed for reproducible ratings.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Summarizer for RandomSummarizer {
    fn rate_sentences(&self, document: &Document) -> Result<Ratings> {
        let sentences = document.sentences();

        let mut values: Vec<f64> = (0..sentences.len()).map(|i| i as f64).collect();
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        values.shuffle(&mut rng);

        Ok(sentences.iter().cloned().zip(values).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::selector::ItemsCount;
    use crate::types::{Paragraph, Sentence};

    fn document(count: usize) -> Document {
        let sentences: Vec<Sentence> = (0..count)
            .map(|i| Sentence::new([format!("sentence{i}").as_str(), "filler"]))
            .collect();
        Document::new(vec![Paragraph::new(sentences)])
    }

    #[test]
    fn test_ratings_are_a_permutation() {
        let doc = document(6);
        let ratings = RandomSummarizer::new().rate_sentences(&doc).unwrap();

        let mut values: Vec<f64> = ratings.values().copied().collect();
        values.sort_by(f64::total_cmp);
        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let doc = document(8);
        let summarizer = RandomSummarizer::new().with_seed(7);

        let first = summarizer.rate_sentences(&doc).unwrap();
        let second = summarizer.rate_sentences(&doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_still_in_document_order() {
        let doc = document(10);
        let summary = RandomSummarizer::new()
            .with_seed(3)
            .summarize(&doc, &ItemsCount::Count(4))
            .unwrap();

        assert_eq!(summary.len(), 4);
        let all = doc.sentences();
        let positions: Vec<usize> = summary
            .iter()
            .map(|s| all.iter().position(|o| o == s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_document() {
        let summarizer = RandomSummarizer::new();
        assert!(summarizer
            .rate_sentences(&Document::new(Vec::new()))
            .unwrap()
            .is_empty());
    }
}
