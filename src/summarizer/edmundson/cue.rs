//! Cue signal
//!
//! Rates a sentence by its pragmatic cue words: bonus words add, stigma
//! words subtract.

use rustc_hash::FxHashSet;

use crate::nlp::stemmer::StemmerRef;
use crate::summarizer::Ratings;
use crate::types::{Document, Sentence};

/// The cue sub-scorer. Both word sets are guaranteed non-empty by the
/// combined summarizer.
#[derive(Debug, Clone)]
pub struct CueMethod {
    stemmer: StemmerRef,
    bonus_words: FxHashSet<String>,
    stigma_words: FxHashSet<String>,
    bonus_weight: f64,
    stigma_weight: f64,
}

impl CueMethod {
    pub fn new(
        stemmer: StemmerRef,
        bonus_words: FxHashSet<String>,
        stigma_words: FxHashSet<String>,
    ) -> Self {
        Self {
            stemmer,
            bonus_words,
            stigma_words,
            bonus_weight: 1.0,
            stigma_weight: 1.0,
        }
    }

    /// Override the per-occurrence bonus and stigma weights.
    pub fn with_word_weights(mut self, bonus_weight: f64, stigma_weight: f64) -> Self {
        self.bonus_weight = bonus_weight;
        self.stigma_weight = stigma_weight;
        self
    }

    pub fn rate_sentences(&self, document: &Document) -> Ratings {
        document
            .sentences()
            .iter()
            .map(|sentence| (sentence.clone(), self.rate_sentence(sentence)))
            .collect()
    }

    fn rate_sentence(&self, sentence: &Sentence) -> f64 {
        let mut bonus_count = 0usize;
        let mut stigma_count = 0usize;

        for word in sentence.words() {
            let stem = self.stemmer.stem_word(word);
            if self.bonus_words.contains(&stem) {
                bonus_count += 1;
            }
            if self.stigma_words.contains(&stem) {
                stigma_count += 1;
            }
        }

        bonus_count as f64 * self.bonus_weight - stigma_count as f64 * self.stigma_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Paragraph;

    fn words(list: &[&str]) -> FxHashSet<String> {
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
    fn test_bonus_minus_stigma() {
        let method = CueMethod::new(
            StemmerRef::default(),
            words(&["important", "key"]),
            words(&["useless"]),
        );
        let doc = document(&["important key useless point", "useless useless remark"]);

        let ratings = method.rate_sentences(&doc);
        assert_eq!(
            ratings[&Sentence::new("important key useless point".split_whitespace())],
            1.0
        );
        assert_eq!(
            ratings[&Sentence::new("useless useless remark".split_whitespace())],
            -2.0
        );
    }

    #[test]
    fn test_word_weights_scale_counts() {
        let method = CueMethod::new(StemmerRef::default(), words(&["good"]), words(&["bad"]))
            .with_word_weights(2.0, 0.5);
        let doc = document(&["good bad"]);

        let ratings = method.rate_sentences(&doc);
        assert_eq!(ratings[&Sentence::new("good bad".split_whitespace())], 1.5);
    }
}
