//! Frequency/significant-word chunk scoring
//!
//! Scores a sentence by its densest run of significant words: a chunk opens
//! at a significant word and survives gaps of up to `max_gap_size`
//! non-significant words. The chunk rating is the squared significant-word
//! count over the chunk length, and a sentence takes its best chunk.

use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::nlp::stemmer::{Stemmer, StemmerRef};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tf::TfModel;
use crate::types::{Document, Sentence};

use super::{Ratings, Summarizer};

/// Luhn's significant-word chunk summarizer.
#[derive(Debug, Clone)]
pub struct LuhnSummarizer {
    stemmer: StemmerRef,
    stop_words: StopwordFilter,
    max_gap_size: usize,
    significant_percentage: f64,
}

impl Default for LuhnSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LuhnSummarizer {
    /// Create a summarizer with the identity stemmer and no stop words.
    pub fn new() -> Self {
        Self {
            stemmer: StemmerRef::default(),
            stop_words: StopwordFilter::empty(),
            max_gap_size: 4,
            significant_percentage: 1.0,
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

    /// Longest run of non-significant words a chunk may bridge.
    pub fn with_max_gap_size(mut self, max_gap_size: usize) -> Self {
        self.max_gap_size = max_gap_size;
        self
    }

    /// Fraction of the document's word count kept as significant terms.
    pub fn with_significant_percentage(mut self, percentage: f64) -> Self {
        self.significant_percentage = percentage;
        self
    }

    /// Stems considered significant: the most frequent fraction of the
    /// document's non-stopword stems, excluding hapax legomena.
    fn significant_stems(&self, document: &Document) -> FxHashSet<String> {
        let stems: Vec<String> = document
            .words()
            .iter()
            .filter(|word| !self.stop_words.is_stopword(word.as_str()))
            .map(|word| self.stemmer.stem_word(word))
            .collect();

        let model = TfModel::new(stems.iter());
        let keep = (stems.len() as f64 * self.significant_percentage) as usize;

        model
            .most_frequent_terms(keep)
            .into_iter()
            .filter(|term| model.term_frequency(term) > 1)
            .map(str::to_string)
            .collect()
    }

    /// Rate one sentence against a set of significant stems: the maximum
    /// chunk rating, or 0.0 when the sentence has no chunk.
    pub fn rate_sentence(
        &self,
        sentence: &Sentence,
        significant_stems: &FxHashSet<String>,
    ) -> f64 {
        self.chunk_ratings(sentence, significant_stems)
            .into_iter()
            .fold(0.0, f64::max)
    }

    fn chunk_ratings(
        &self,
        sentence: &Sentence,
        significant_stems: &FxHashSet<String>,
    ) -> Vec<f64> {
        let mut chunks: Vec<Vec<u8>> = Vec::new();
        let mut in_chunk = false;

        for word in sentence.words() {
            let significant = significant_stems.contains(&self.stemmer.stem_word(word));

            if significant && !in_chunk {
                in_chunk = true;
                chunks.push(vec![1]);
            } else if in_chunk {
                if let Some(chunk) = chunks.last_mut() {
                    chunk.push(significant as u8);
                }
            }

            // a chunk closes once the trailing gap reaches max_gap_size
            if in_chunk {
                if let Some(chunk) = chunks.last() {
                    if chunk.len() >= self.max_gap_size
                        && chunk[chunk.len() - self.max_gap_size..]
                            .iter()
                            .all(|&flag| flag == 0)
                    {
                        in_chunk = false;
                    }
                }
            }
        }

        chunks.iter().map(|chunk| Self::chunk_rating(chunk)).collect()
    }

    fn chunk_rating(chunk: &[u8]) -> f64 {
        // strip trailing non-significant words before scoring
        let end = chunk
            .iter()
            .rposition(|&flag| flag == 1)
            .map_or(0, |index| index + 1);
        let chunk = &chunk[..end];
        if chunk.is_empty() {
            return 0.0;
        }

        let significant: u32 = chunk.iter().map(|&flag| u32::from(flag)).sum();
        if significant <= 1 {
            // a single significant word carries no density signal
            0.0
        } else {
            (significant * significant) as f64 / chunk.len() as f64
        }
    }
}

impl Summarizer for LuhnSummarizer {
    fn rate_sentences(&self, document: &Document) -> Result<Ratings> {
        let significant = self.significant_stems(document);

        let mut ratings = Ratings::default();
        for sentence in document.sentences() {
            ratings.insert(sentence.clone(), self.rate_sentence(sentence, &significant));
        }
        Ok(ratings)
    }
}
