//! Similarity-graph eigenvector centrality
//!
//! Builds a sentence graph from TF·IDF-weighted modified cosine similarity,
//! binarizes edges at a threshold, degree-normalizes the rows, and finds the
//! stationary distribution by power iteration. The IDF here is the plain
//! `N / n_j` collection frequency ratio.

use ndarray::Array2;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::linalg::PowerIteration;
use crate::nlp::stemmer::{Stemmer, StemmerRef};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Document, Sentence};

use super::{Ratings, Summarizer};

type TermWeights = FxHashMap<String, f64>;

/// LexRank summarizer.
#[derive(Debug, Clone)]
pub struct LexRankSummarizer {
    stemmer: StemmerRef,
    stop_words: StopwordFilter,
    threshold: f64,
    epsilon: f64,
}

impl Default for LexRankSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexRankSummarizer {
    pub fn new() -> Self {
        Self {
            stemmer: StemmerRef::default(),
            stop_words: StopwordFilter::empty(),
            threshold: 0.1,
            epsilon: 0.1,
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

    /// Similarity threshold above which sentences are considered connected.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Power-iteration convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
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

    /// Per-sentence term frequency, normalized by the sentence maximum.
    fn term_frequencies(sentences: &[Vec<String>]) -> Vec<TermWeights> {
        sentences
            .iter()
            .map(|words| {
                let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
                for word in words {
                    *counts.entry(word).or_insert(0) += 1;
                }
                let max = counts.values().copied().max().unwrap_or(1) as f64;
                counts
                    .into_iter()
                    .map(|(term, count)| (term.to_string(), count as f64 / max))
                    .collect()
            })
            .collect()
    }

    /// Inverse document frequency over the sentence collection: `N / n_j`.
    fn inverse_document_frequencies(sentences: &[Vec<String>]) -> TermWeights {
        let sentences_count = sentences.len() as f64;
        let mut idf = TermWeights::default();

        for words in sentences {
            for term in words {
                if !idf.contains_key(term) {
                    let containing = sentences
                        .iter()
                        .filter(|other| other.iter().any(|word| word == term))
                        .count() as f64;
                    idf.insert(term.clone(), sentences_count / containing);
                }
            }
        }

        idf
    }

    /// Modified cosine similarity with TF·IDF weighting.
    fn cosine(tf1: &TermWeights, tf2: &TermWeights, idf: &TermWeights) -> f64 {
        let mut numerator = 0.0;
        for (term, weight1) in tf1 {
            if let (Some(weight2), Some(term_idf)) = (tf2.get(term), idf.get(term)) {
                numerator += weight1 * weight2 * term_idf * term_idf;
            }
        }

        let norm = |tf: &TermWeights| {
            tf.iter()
                .map(|(term, weight)| {
                    let term_idf = idf.get(term).copied().unwrap_or(0.0);
                    (weight * term_idf) * (weight * term_idf)
                })
                .sum::<f64>()
                .sqrt()
        };

        let denominator = norm(tf1) * norm(tf2);
        if denominator > 0.0 {
            numerator / denominator
        } else {
            0.0
        }
    }

    fn similarity_matrix(&self, tf_metrics: &[TermWeights], idf: &TermWeights) -> Array2<f64> {
        let n = tf_metrics.len();

        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (0..n)
                    .map(|j| Self::cosine(&tf_metrics[i], &tf_metrics[j], idf))
                    .collect()
            })
            .collect();

        let mut matrix = Array2::zeros((n, n));
        let mut degrees = vec![0.0f64; n];
        for (i, row) in rows.iter().enumerate() {
            for (j, &similarity) in row.iter().enumerate() {
                if similarity > self.threshold {
                    matrix[[i, j]] = 1.0;
                    degrees[i] += 1.0;
                }
            }
        }

        // degree-zero rows stay zero rather than dividing by zero
        for (i, mut row) in matrix.rows_mut().into_iter().enumerate() {
            let degree = if degrees[i] == 0.0 { 1.0 } else { degrees[i] };
            row.mapv_inplace(|weight| weight / degree);
        }

        matrix
    }
}

impl Summarizer for LexRankSummarizer {
    fn rate_sentences(&self, document: &Document) -> Result<Ratings> {
        let sentences = document.sentences();
        if sentences.is_empty() {
            return Ok(Ratings::default());
        }

        let sentence_words: Vec<Vec<String>> = sentences
            .iter()
            .map(|sentence| self.content_stems(sentence))
            .collect();

        let tf_metrics = Self::term_frequencies(&sentence_words);
        let idf_metrics = Self::inverse_document_frequencies(&sentence_words);
        let matrix = self.similarity_matrix(&tf_metrics, &idf_metrics);

        let result = PowerIteration::new()
            .with_epsilon(self.epsilon)
            .run(&matrix);

        Ok(sentences.iter().cloned().zip(result.scores).collect())
    }
}
