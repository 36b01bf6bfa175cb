//! Stopword filtering
//!
//! Provides multi-language stopword filtering using the `stop-words` crate
//! with support for custom stopword lists. An empty filter is valid: rankers
//! that tolerate missing stop words simply score every word as content.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from text
///
/// Words are stored lowercase; lookups fold the probe the same way.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a stopword filter for the given language.
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, pl.
    /// Unknown languages fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "pl" | "polish" => LANGUAGE::Polish,
            _ => LANGUAGE::English,
        };
        let stopwords = get(lang).into_iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Create an empty stopword filter (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Check if a word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.is_empty() {
            return false;
        }
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the filter has no stopwords.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::for_language("en");
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(!filter.is_stopword("summarization"));
    }

    #[test]
    fn test_empty_filter_rejects_nothing() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_custom_word_list() {
        let filter = StopwordFilter::from_words(["S", "und"]);
        assert_eq!(filter.len(), 2);
        assert!(filter.is_stopword("s"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("wort"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::for_language("xx");
        assert!(filter.is_stopword("the"));
    }
}
