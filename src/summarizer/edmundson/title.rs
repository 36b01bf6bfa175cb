//! Title signal
//!
//! Heading words (minus null words) are the significant set; a sentence is
//! rated by how many of them it repeats.

use rustc_hash::FxHashSet;

use crate::nlp::stemmer::StemmerRef;
use crate::summarizer::Ratings;
use crate::types::{Document, Sentence};

/// The title sub-scorer.
#[derive(Debug, Clone)]
pub struct TitleMethod {
    stemmer: StemmerRef,
    null_words: FxHashSet<String>,
}

impl TitleMethod {
    pub fn new(stemmer: StemmerRef, null_words: FxHashSet<String>) -> Self {
        Self {
            stemmer,
            null_words,
        }
    }

    pub(super) fn significant_words(&self, document: &Document) -> FxHashSet<String> {
        document
            .headings()
            .iter()
            .flat_map(|heading| heading.words())
            .map(|word| self.stemmer.stem_word(word))
            .filter(|stem| !self.null_words.contains(stem))
            .collect()
    }

    pub(super) fn title_matches(
        &self,
        sentence: &Sentence,
        significant: &FxHashSet<String>,
    ) -> f64 {
        sentence
            .words()
            .iter()
            .filter(|word| significant.contains(&self.stemmer.stem_word(word)))
            .count() as f64
    }

    pub fn rate_sentences(&self, document: &Document) -> Ratings {
        let significant = self.significant_words(document);

        document
            .sentences()
            .iter()
            .map(|sentence| {
                (
                    sentence.clone(),
                    self.title_matches(sentence, &significant),
                )
            })
            .collect()
    }
}
