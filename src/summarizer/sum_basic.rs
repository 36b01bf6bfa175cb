//! Greedy frequency-adjusting scoring
//!
//! Repeatedly picks the sentence whose content words carry the highest mean
//! document probability, then squares the frequency of every word in the
//! pick so later sentences reusing the same vocabulary are discounted.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::nlp::stemmer::{Stemmer, StemmerRef};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Document, Sentence};

use super::{Ratings, Summarizer};

/// SumBasic summarizer.
#[derive(Debug, Clone, Default)]
pub struct SumBasicSummarizer {
    stemmer: StemmerRef,
    stop_words: StopwordFilter,
}

impl SumBasicSummarizer {
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

    /// Content-word probabilities, normalized by the total content count.
    fn term_frequencies(sentences_as_words: &[Vec<String>]) -> FxHashMap<String, f64> {
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

    fn average_probability(
        frequencies: &FxHashMap<String, f64>,
        words: &[String],
    ) -> f64 {
        if words.is_empty() {
            return 0.0;
        }
        let sum: f64 = words
            .iter()
            .map(|word| frequencies.get(word).copied().unwrap_or(0.0))
            .sum();
        sum / words.len() as f64
    }

    fn compute_ratings(&self, sentences: &[Sentence]) -> Ratings {
        let sentences_as_words: Vec<Vec<String>> = sentences
            .iter()
            .map(|sentence| self.content_stems(sentence))
            .collect();
        let mut frequencies = Self::term_frequencies(&sentences_as_words);

        let mut remaining: Vec<usize> = (0..sentences.len()).collect();
        let mut ratings = Ratings::default();
        let mut picked = 0usize;

        while !remaining.is_empty() {
            let mut best_position = 0;
            let mut best_average = -1.0;

            for (position, &index) in remaining.iter().enumerate() {
                let average =
                    Self::average_probability(&frequencies, &sentences_as_words[index]);
                if average > best_average {
                    best_average = average;
                    best_position = position;
                }
            }

            let index = remaining.remove(best_position);
            ratings.insert(sentences[index].clone(), -(picked as f64));
            picked += 1;

            // discount the words just used
            for word in &sentences_as_words[index] {
                if let Some(frequency) = frequencies.get_mut(word) {
                    *frequency *= *frequency;
                }
            }
        }

        ratings
    }
}

impl Summarizer for SumBasicSummarizer {
    fn rate_sentences(&self, document: &Document) -> Result<Ratings> {
        Ok(self.compute_ratings(document.sentences()))
    }
}
