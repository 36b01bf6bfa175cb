//! Greedy KL-divergence minimization
//!
//! Grows the summary one sentence at a time, always adding the candidate
//! whose joint word distribution stays closest to the document-wide
//! distribution. Every sentence ends up rated: the k-th pick gets `-k`, so
//! the ranking covers the whole document, not just the top of it.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Document, Sentence};

use super::{Ratings, Summarizer};

/// KL-divergence summarizer.
#[derive(Debug, Clone, Default)]
pub struct KlSummarizer {
    stop_words: StopwordFilter,
}

impl KlSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words(mut self, stop_words: StopwordFilter) -> Self {
        self.stop_words = stop_words;
        self
    }

    fn content_words(&self, sentence: &Sentence) -> Vec<String> {
        sentence
            .words()
            .iter()
            .filter(|word| !self.stop_words.is_stopword(word.as_str()))
            .map(|word| word.as_str().to_string())
            .collect()
    }

    fn word_counts(words: &[String]) -> FxHashMap<String, f64> {
        let mut counts = FxHashMap::default();
        for word in words {
            *counts.entry(word.clone()).or_insert(0.0) += 1.0;
        }
        counts
    }

    /// Document-wide content-word distribution, normalized by total count.
    fn document_frequencies(&self, sentences_as_words: &[Vec<String>]) -> FxHashMap<String, f64> {
        let total: usize = sentences_as_words.iter().map(Vec::len).sum();
        if total == 0 {
            return FxHashMap::default();
        }

        let mut frequencies = FxHashMap::default();
        for words in sentences_as_words {
            for word in words {
                *frequencies.entry(word.clone()).or_insert(0.0) += 1.0;
            }
        }
        for frequency in frequencies.values_mut() {
            *frequency /= total as f64;
        }
        frequencies
    }

    /// Joint distribution of two word lists over their combined length.
    fn joint_frequencies(
        candidate: &[String],
        summary: &[String],
    ) -> FxHashMap<String, f64> {
        let total = candidate.len() + summary.len();
        if total == 0 {
            return FxHashMap::default();
        }

        let mut joint = Self::word_counts(candidate);
        for (word, count) in Self::word_counts(summary) {
            *joint.entry(word).or_insert(0.0) += count;
        }
        for frequency in joint.values_mut() {
            *frequency /= total as f64;
        }
        joint
    }

    /// `Σ doc[w] · ln(doc[w] / joint[w])` over the joint terms. Terms absent
    /// from the document distribution contribute nothing; the same policy
    /// applies to every candidate across the whole pass.
    fn kl_divergence(
        joint: &FxHashMap<String, f64>,
        document: &FxHashMap<String, f64>,
    ) -> f64 {
        joint
            .iter()
            .filter_map(|(word, &joint_frequency)| {
                document
                    .get(word)
                    .map(|&frequency| frequency * (frequency / joint_frequency).ln())
            })
            .sum()
    }

    fn compute_ratings(&self, sentences: &[Sentence]) -> Ratings {
        let sentences_as_words: Vec<Vec<String>> = sentences
            .iter()
            .map(|sentence| self.content_words(sentence))
            .collect();
        let document_frequencies = self.document_frequencies(&sentences_as_words);

        let mut remaining: Vec<usize> = (0..sentences.len()).collect();
        let mut summary_words: Vec<String> = Vec::new();
        let mut ratings = Ratings::default();
        let mut picked = 0usize;

        while !remaining.is_empty() {
            let mut best_position = 0;
            let mut best_divergence = f64::INFINITY;

            for (position, &index) in remaining.iter().enumerate() {
                let joint =
                    Self::joint_frequencies(&sentences_as_words[index], &summary_words);
                let divergence = Self::kl_divergence(&joint, &document_frequencies);
                if divergence < best_divergence {
                    best_divergence = divergence;
                    best_position = position;
                }
            }

            let index = remaining.remove(best_position);
            summary_words.extend(sentences_as_words[index].iter().cloned());
            ratings.insert(sentences[index].clone(), -(picked as f64));
            picked += 1;
        }

        ratings
    }
}

impl Summarizer for KlSummarizer {
    fn rate_sentences(&self, document: &Document) -> Result<Ratings> {
        Ok(self.compute_ratings(document.sentences()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::selector::ItemsCount;
    use crate::types::Paragraph;
    use approx::assert_relative_eq;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn document(texts: &[&str]) -> Document {
        Document::new(vec![Paragraph::new(
            texts
                .iter()
                .map(|t| Sentence::new(t.split_whitespace()))
                .collect::<Vec<_>>(),
        )])
    }

    #[test]
    fn test_joint_frequencies() {
        let joint = KlSummarizer::joint_frequencies(&words(&["a", "b"]), &words(&["a"]));
        assert_relative_eq!(joint["a"], 2.0 / 3.0);
        assert_relative_eq!(joint["b"], 1.0 / 3.0);
    }

    #[test]
    fn test_kl_divergence_of_identical_distributions_is_zero() {
        let mut distribution = FxHashMap::default();
        distribution.insert("a".to_string(), 0.5);
        distribution.insert("b".to_string(), 0.5);

        assert_relative_eq!(
            KlSummarizer::kl_divergence(&distribution, &distribution),
            0.0
        );
    }

    #[test]
    fn test_kl_divergence_skips_missing_terms() {
        let mut joint = FxHashMap::default();
        joint.insert("a".to_string(), 0.5);
        joint.insert("novel".to_string(), 0.5);
        let mut doc = FxHashMap::default();
        doc.insert("a".to_string(), 1.0);

        // only "a" contributes: 1.0 * ln(1.0 / 0.5)
        assert_relative_eq!(
            KlSummarizer::kl_divergence(&joint, &doc),
            2.0_f64.ln()
        );
    }

    #[test]
    fn test_every_sentence_rated_with_decreasing_ratings() {
        let doc = document(&[
            "the cat sat on the mat",
            "dogs bark at the cat",
            "fish swim in water",
            "the mat was warm",
        ]);
        let summarizer = KlSummarizer::new();

        let ratings = summarizer.rate_sentences(&doc).unwrap();
        assert_eq!(ratings.len(), 4);

        let mut values: Vec<f64> = ratings.values().copied().collect();
        values.sort_by(f64::total_cmp);
        assert_eq!(values, vec![-3.0, -2.0, -1.0, 0.0]);
    }

    #[test]
    fn test_rating_pass_is_deterministic() {
        let doc = document(&[
            "apples and oranges and pears",
            "apples only",
            "bricks and mortar",
        ]);
        let summarizer = KlSummarizer::new();

        let first = summarizer.rate_sentences(&doc).unwrap();
        let second = summarizer.rate_sentences(&doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_length_and_order() {
        let doc = document(&["one two", "two three", "three four", "four five"]);
        let summarizer = KlSummarizer::new();

        let summary = summarizer.summarize(&doc, &ItemsCount::Count(2)).unwrap();
        assert_eq!(summary.len(), 2);
        let all = doc.sentences();
        let positions: Vec<usize> = summary
            .iter()
            .map(|s| all.iter().position(|o| o == s).unwrap())
            .collect();
        assert!(positions[0] < positions[1]);
    }

    #[test]
    fn test_empty_document() {
        let summarizer = KlSummarizer::new();
        assert!(summarizer
            .rate_sentences(&Document::new(Vec::new()))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_all_stopword_sentences_fall_back_to_document_order() {
        let summarizer =
            KlSummarizer::new().with_stop_words(StopwordFilter::from_words(["the", "a"]));
        let doc = document(&["the a", "a the the"]);

        let ratings = summarizer.rate_sentences(&doc).unwrap();
        // zero divergence everywhere: pick order follows document order
        assert_relative_eq!(
            ratings[&Sentence::new("the a".split_whitespace())],
            0.0
        );
        assert_relative_eq!(
            ratings[&Sentence::new("a the the".split_whitespace())],
            -1.0
        );
    }
}
