//! Stemmer contract
//!
//! Stemming is a collaborator concern: language-specific rule tables live
//! outside this crate. Rankers only rely on the [`Stemmer`] trait, a pure
//! and deterministic word-to-root mapping. Any `Fn(&str) -> String` closure
//! satisfies the contract through the blanket impl.

use std::fmt;
use std::sync::Arc;

use crate::types::Word;

/// A pure function mapping a word to its root form.
///
/// Implementations must be deterministic: the same input always yields the
/// same stem. Rankers call stemmers many times per document.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// The identity stemmer: folds case and nothing else.
///
/// Document words are already case-folded, so this is a pass-through for
/// them; the explicit fold keeps direct string calls consistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStemmer;

impl Stemmer for NullStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_lowercase()
    }
}

/// Cheaply cloneable handle to a stemmer implementation.
///
/// Summarizers hold one of these so they stay `Clone` regardless of the
/// concrete stemmer behind it.
#[derive(Clone)]
pub struct StemmerRef(Arc<dyn Stemmer>);

impl StemmerRef {
    pub fn new(stemmer: impl Stemmer + 'static) -> Self {
        Self(Arc::new(stemmer))
    }

    /// Stem a raw string.
    pub fn stem(&self, word: &str) -> String {
        self.0.stem(word)
    }

    /// Stem a document word.
    pub fn stem_word(&self, word: &Word) -> String {
        self.0.stem(word.as_str())
    }

    /// Stem a word sequence, preserving order.
    pub fn stem_words(&self, words: &[Word]) -> Vec<String> {
        words.iter().map(|w| self.stem_word(w)).collect()
    }
}

impl Default for StemmerRef {
    fn default() -> Self {
        Self::new(NullStemmer)
    }
}

impl fmt::Debug for StemmerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StemmerRef(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_stemmer_folds_case() {
        assert_eq!(NullStemmer.stem("Walking"), "walking");
        assert_eq!(NullStemmer.stem("walking"), "walking");
    }

    #[test]
    fn test_closure_satisfies_contract() {
        let chop_ing = |word: &str| word.strip_suffix("ing").unwrap_or(word).to_string();
        let stemmer = StemmerRef::new(chop_ing);

        assert_eq!(stemmer.stem("walking"), "walk");
        assert_eq!(stemmer.stem("walk"), "walk");
    }

    #[test]
    fn test_stem_words_preserves_order() {
        let stemmer = StemmerRef::default();
        let words = vec![Word::new("B"), Word::new("a")];
        assert_eq!(stemmer.stem_words(&words), vec!["b", "a"]);
    }
}
