//! Co-occurrence graph centrality with damping
//!
//! Sentences are connected by the number of words they share, normalized by
//! the sum of the logarithms of their lengths. The row-normalized matrix is
//! damped PageRank-style before power iteration.

use ndarray::Array2;

use crate::error::Result;
use crate::linalg::PowerIteration;
use crate::nlp::stemmer::{Stemmer, StemmerRef};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Document, Sentence};

use super::{Ratings, Summarizer};

// guard against zero-degree rows during normalization
const ZERO_DIVISION_GUARD: f64 = 1e-7;

/// TextRank summarizer.
#[derive(Debug, Clone)]
pub struct TextRankSummarizer {
    stemmer: StemmerRef,
    stop_words: StopwordFilter,
    epsilon: f64,
    damping: f64,
}

impl Default for TextRankSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRankSummarizer {
    pub fn new() -> Self {
        Self {
            stemmer: StemmerRef::default(),
            stop_words: StopwordFilter::empty(),
            epsilon: 1e-4,
            damping: 0.85,
        }
    }

    pub fn with_stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = StemmerRef::new(stemmer);
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopwordFilter) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Power-iteration convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Damping factor of the random-jump component.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
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

    /// Shared-word count normalized by the sum of log sentence lengths.
    /// Two single-word sentences would make the norm zero; the raw shared
    /// count (0 or 1) is used instead.
    fn edge_rating(words1: &[String], words2: &[String]) -> f64 {
        let shared: usize = words1
            .iter()
            .map(|word1| words2.iter().filter(|word2| *word2 == word1).count())
            .sum();
        if shared == 0 {
            return 0.0;
        }

        let norm = (words1.len() as f64).ln() + (words2.len() as f64).ln();
        if norm.abs() < f64::EPSILON {
            shared as f64
        } else {
            shared as f64 / norm
        }
    }

    /// Row-normalized, damped stochastic matrix ready for power iteration.
    fn create_matrix(&self, sentences_as_words: &[Vec<String>]) -> Array2<f64> {
        let n = sentences_as_words.len();
        let mut weights = Array2::zeros((n, n));

        for i in 0..n {
            for j in i..n {
                let rating = Self::edge_rating(&sentences_as_words[i], &sentences_as_words[j]);
                weights[[i, j]] = rating;
                weights[[j, i]] = rating;
            }
        }

        for mut row in weights.rows_mut() {
            let sum = row.sum() + ZERO_DIVISION_GUARD;
            row.mapv_inplace(|weight| weight / sum);
        }

        // The random-jump probability is divided by N, unlike the original
        // paper, so the stationary probability stays bounded; rankings are
        // unaffected.
        let teleport = (1.0 - self.damping) / n as f64;
        weights.mapv(|weight| teleport + self.damping * weight)
    }
}

impl Summarizer for TextRankSummarizer {
    fn rate_sentences(&self, document: &Document) -> Result<Ratings> {
        let sentences = document.sentences();
        if sentences.is_empty() {
            return Ok(Ratings::default());
        }

        let sentences_as_words: Vec<Vec<String>> = sentences
            .iter()
            .map(|sentence| self.content_stems(sentence))
            .collect();

        let matrix = self.create_matrix(&sentences_as_words);
        let result = PowerIteration::new()
            .with_epsilon(self.epsilon)
            .run(&matrix);

        Ok(sentences.iter().cloned().zip(result.scores).collect())
    }
}
