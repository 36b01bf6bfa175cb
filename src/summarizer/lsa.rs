//! Latent-dimension scoring
//!
//! Decomposes the term–sentence occurrence matrix and scores each sentence
//! by the weighted L2 norm of its row in the reduced right-singular-vector
//! space: `sqrt(Σ σ_k² · V[k, sentence]²)` over the retained dimensions.

use std::collections::BTreeMap;

use ndarray::Array2;

use crate::error::{Result, SummarizeError};
use crate::linalg::thin_svd;
use crate::nlp::stemmer::{Stemmer, StemmerRef};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Document, Sentence};

use super::selector::ItemsCount;
use super::{Ratings, Summarizer};

/// Latent semantic analysis summarizer.
#[derive(Debug, Clone)]
pub struct LsaSummarizer {
    stemmer: StemmerRef,
    stop_words: StopwordFilter,
    min_dimensions: usize,
    reduction_ratio: f64,
    smoothing: f64,
}

impl Default for LsaSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LsaSummarizer {
    pub fn new() -> Self {
        Self {
            stemmer: StemmerRef::default(),
            stop_words: StopwordFilter::empty(),
            min_dimensions: 3,
            reduction_ratio: 1.0,
            smoothing: 0.4,
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

    /// Lower bound on the retained latent dimensions.
    pub fn with_min_dimensions(mut self, min_dimensions: usize) -> Self {
        self.min_dimensions = min_dimensions;
        self
    }

    /// Fraction of the decomposition rank to retain.
    pub fn with_reduction_ratio(mut self, reduction_ratio: f64) -> Self {
        self.reduction_ratio = reduction_ratio;
        self
    }

    /// Term-frequency smoothing constant; must satisfy `0.0 <= s < 1.0`,
    /// validated at call time.
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    fn check_smoothing(&self) -> Result<()> {
        if (0.0..1.0).contains(&self.smoothing) {
            Ok(())
        } else {
            Err(SummarizeError::InvalidSmoothing {
                value: self.smoothing,
            })
        }
    }

    /// Maps each distinct non-stopword stem to a row index. Sorted order
    /// keeps the matrix layout deterministic.
    fn dictionary(&self, document: &Document) -> BTreeMap<String, usize> {
        let unique: std::collections::BTreeSet<String> = document
            .words()
            .iter()
            .filter(|word| !self.stop_words.is_stopword(word.as_str()))
            .map(|word| self.stemmer.stem_word(word))
            .collect();

        unique
            .into_iter()
            .enumerate()
            .map(|(index, stem)| (stem, index))
            .collect()
    }

    /// Occurrence-count matrix of shape `words × sentences`.
    fn term_sentence_matrix(
        &self,
        document: &Document,
        dictionary: &BTreeMap<String, usize>,
    ) -> Array2<f64> {
        let sentences = document.sentences();
        let words_count = dictionary.len();
        let sentences_count = sentences.len();

        if words_count < sentences_count {
            tracing::warn!(
                words_count,
                sentences_count,
                "fewer distinct terms than sentences, decomposition may be under-determined"
            );
        }

        let mut matrix = Array2::zeros((words_count, sentences_count));
        for (col, sentence) in sentences.iter().enumerate() {
            for word in sentence.words() {
                if let Some(&row) = dictionary.get(&self.stemmer.stem_word(word)) {
                    matrix[[row, col]] += 1.0;
                }
            }
        }

        matrix
    }

    /// Max-normalized term-frequency smoothing per column:
    /// `smooth + (1 - smooth) * count / column_max` for non-zero columns.
    fn smooth_term_frequency(&self, mut matrix: Array2<f64>) -> Array2<f64> {
        for mut column in matrix.columns_mut() {
            let max = column.iter().copied().fold(0.0, f64::max);
            if max > 0.0 {
                column.mapv_inplace(|count| self.smoothing + (1.0 - self.smoothing) * count / max);
            }
        }
        matrix
    }

    fn ranks(&self, singular_values: &[f64], vt: &Array2<f64>) -> Vec<f64> {
        let rank = singular_values.len();
        let dimensions = self
            .min_dimensions
            .max((rank as f64 * self.reduction_ratio) as usize);

        let powered: Vec<f64> = singular_values
            .iter()
            .enumerate()
            .map(|(k, &sigma)| if k < dimensions { sigma * sigma } else { 0.0 })
            .collect();

        (0..vt.ncols())
            .map(|col| {
                powered
                    .iter()
                    .enumerate()
                    .map(|(k, &weight)| weight * vt[[k, col]] * vt[[k, col]])
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    }
}

impl Summarizer for LsaSummarizer {
    fn rate_sentences(&self, document: &Document) -> Result<Ratings> {
        self.check_smoothing()?;

        let dictionary = self.dictionary(document);
        if dictionary.is_empty() {
            return Ok(Ratings::default());
        }

        let matrix = self.term_sentence_matrix(document, &dictionary);
        let matrix = self.smooth_term_frequency(matrix);
        let svd = thin_svd(&matrix);
        let ranks = self.ranks(&svd.singular_values, &svd.vt);

        Ok(document
            .sentences()
            .iter()
            .cloned()
            .zip(ranks)
            .collect())
    }

    fn summarize(&self, document: &Document, count: &ItemsCount) -> Result<Vec<Sentence>> {
        self.check_smoothing()?;

        // an all-stopword document has no latent space at all
        if self.dictionary(document).is_empty() {
            return Ok(Vec::new());
        }

        let ratings = self.rate_sentences(document)?;
        Ok(super::selector::select_best(
            document.sentences(),
            count,
            &ratings,
        ))
    }
}
