//! Key signal
//!
//! Bonus words whose document frequency stands out become key words; a
//! sentence is rated by how many of them it contains.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::nlp::stemmer::StemmerRef;
use crate::summarizer::Ratings;
use crate::types::{Document, Sentence};

/// The key sub-scorer.
#[derive(Debug, Clone)]
pub struct KeyMethod {
    stemmer: StemmerRef,
    bonus_words: FxHashSet<String>,
    weight: f64,
}

impl KeyMethod {
    pub fn new(stemmer: StemmerRef, bonus_words: FxHashSet<String>) -> Self {
        Self {
            stemmer,
            bonus_words,
            weight: 0.5,
        }
    }

    /// Threshold on the max-normalized bonus-word frequency; only words
    /// strictly above it count as significant.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    fn significant_words(&self, document: &Document) -> FxHashSet<String> {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for word in document.words() {
            let stem = self.stemmer.stem_word(word);
            if self.bonus_words.contains(&stem) {
                *counts.entry(stem).or_insert(0) += 1;
            }
        }

        let Some(max_frequency) = counts.values().copied().max() else {
            return FxHashSet::default();
        };

        counts
            .into_iter()
            .filter(|&(_, frequency)| frequency as f64 / max_frequency as f64 > self.weight)
            .map(|(stem, _)| stem)
            .collect()
    }

    pub fn rate_sentences(&self, document: &Document) -> Ratings {
        let significant = self.significant_words(document);

        document
            .sentences()
            .iter()
            .map(|sentence| {
                let rating = sentence
                    .words()
                    .iter()
                    .filter(|word| significant.contains(&self.stemmer.stem_word(word)))
                    .count();
                (sentence.clone(), rating as f64)
            })
            .collect()
    }
}
