//! Uniform pairwise word-overlap scoring
//!
//! A single pass over all unordered sentence pairs: each pair's overlap
//! weight is added to both endpoints, so a sentence's score is its
//! degree-weighted centrality in the overlap graph. No iteration.

use crate::error::Result;
use crate::nlp::stemmer::{Stemmer, StemmerRef};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Document, Sentence};

use super::{Ratings, Summarizer};

/// Reduction summarizer.
#[derive(Debug, Clone, Default)]
pub struct ReductionSummarizer {
    stemmer: StemmerRef,
    stop_words: StopwordFilter,
}

impl ReductionSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = StemmerRef::new(stemmer);
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopwordFilter) -> Self {
        self.stop_words = stop_words;
        self
    }

    fn content_stems(&self, sentence: &Sentence) -> Vec<String> {
        sentence
            .words()
            .iter()
            .filter(|word| !self.stop_words.is_stopword(word.as_str()))
            .map(|word| self.stemmer.stem_word(word))
            .collect()
    }

    /// Shared-word count over the sum of log lengths; 0.0 for disjoint
    /// pairs and for pairs of single-word sentences (log norm of zero).
    fn edge_rating(words1: &[String], words2: &[String]) -> f64 {
        let shared: usize = words1
            .iter()
            .map(|word1| words2.iter().filter(|word2| *word2 == word1).count())
            .sum();
        if shared == 0 {
            return 0.0;
        }

        let norm = (words1.len() as f64).ln() + (words2.len() as f64).ln();
        if norm == 0.0 {
            0.0
        } else {
            shared as f64 / norm
        }
    }
}

impl Summarizer for ReductionSummarizer {
    fn rate_sentences(&self, document: &Document) -> Result<Ratings> {
        let sentences = document.sentences();
        let sentences_as_words: Vec<Vec<String>> = sentences
            .iter()
            .map(|sentence| self.content_stems(sentence))
            .collect();

        let mut totals = vec![0.0f64; sentences.len()];
        for i in 0..sentences.len() {
            for j in (i + 1)..sentences.len() {
                let rating = Self::edge_rating(&sentences_as_words[i], &sentences_as_words[j]);
                totals[i] += rating;
                totals[j] += rating;
            }
        }

        let mut ratings = Ratings::default();
        for (sentence, total) in sentences.iter().zip(totals) {
            *ratings.entry(sentence.clone()).or_insert(0.0) += total;
        }
        Ok(ratings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::selector::ItemsCount;
    use crate::types::Paragraph;
    use approx::assert_relative_eq;

    fn stems(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn sentence(text: &str) -> Sentence {
        Sentence::new(text.split_whitespace())
    }

    fn document(texts: &[&str]) -> Document {
        Document::new(vec![Paragraph::new(
            texts.iter().map(|t| sentence(t)).collect::<Vec<_>>(),
        )])
    }

    #[test]
    fn test_edge_rating() {
        let rating =
            ReductionSummarizer::edge_rating(&stems(&["a", "b"]), &stems(&["b", "c"]));
        assert_relative_eq!(rating, 1.0 / (2.0 * 2.0_f64.ln()));
    }

    #[test]
    fn test_single_word_pair_rates_zero() {
        // ln(1) + ln(1) = 0 is treated as no contribution
        let rating = ReductionSummarizer::edge_rating(&stems(&["a"]), &stems(&["a"]));
        assert_relative_eq!(rating, 0.0);
    }

    #[test]
    fn test_hub_sentence_scores_highest() {
        let doc = document(&[
            "cats eat fish",
            "cats eat mice and fish",
            "mice fear cats",
        ]);
        let ratings = ReductionSummarizer::new().rate_sentences(&doc).unwrap();

        let hub = ratings[&sentence("cats eat mice and fish")];
        for (other, &rating) in &ratings {
            if other != &sentence("cats eat mice and fish") {
                assert!(rating < hub);
            }
        }
    }

    #[test]
    fn test_single_sentence_document_rates_zero() {
        let doc = document(&["just one sentence"]);
        let ratings = ReductionSummarizer::new().rate_sentences(&doc).unwrap();

        assert_eq!(ratings.len(), 1);
        assert_relative_eq!(ratings[&sentence("just one sentence")], 0.0);
    }

    #[test]
    fn test_summary_in_document_order() {
        let doc = document(&[
            "shared words everywhere",
            "totally different content",
            "shared words again",
        ]);
        let summary = ReductionSummarizer::new()
            .summarize(&doc, &ItemsCount::Count(2))
            .unwrap();

        assert_eq!(
            summary,
            vec![sentence("shared words everywhere"), sentence("shared words again")]
        );
    }

    #[test]
    fn test_empty_document() {
        let summarizer = ReductionSummarizer::new();
        assert!(summarizer
            .rate_sentences(&Document::new(Vec::new()))
            .unwrap()
            .is_empty());
    }
}
