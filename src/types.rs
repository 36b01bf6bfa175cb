//! Core document model
//!
//! A [`Document`] is an immutable tree: paragraphs contain sentences, which
//! contain case-folded words. Every derived view (flattened sentences,
//! headings, words) is computed eagerly at construction time and preserves
//! paragraph-then-sentence order. That order is the ground truth used when
//! assembling the final summary, regardless of how a ranker scored things.

use std::fmt;

/// An immutable, case-folded token.
///
/// Equality, ordering, and hashing are string-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Create a word, folding it to lowercase.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().to_lowercase())
    }

    /// The folded text of the word.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered, immutable sequence of words, optionally flagged as a heading.
///
/// Sentences are used as rating-map keys by every ranker, so equality and
/// hashing cover the heading flag and the exact word sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentence {
    words: Vec<Word>,
    is_heading: bool,
}

impl Sentence {
    /// Create a regular (non-heading) sentence.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            is_heading: false,
        }
    }

    /// Create a heading sentence.
    pub fn heading<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        Self {
            is_heading: true,
            ..Self::new(words)
        }
    }

    /// The words of the sentence, in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Whether this sentence is a heading.
    pub fn is_heading(&self) -> bool {
        self.is_heading
    }

    /// Number of words in the sentence.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sentence has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word.as_str())?;
        }
        Ok(())
    }
}

/// An ordered, immutable sequence of sentences.
///
/// The three derived views are computed once at construction: `sentences`
/// (non-heading), `headings`, and the flattened `words` of every sentence,
/// headings included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    sentences: Vec<Sentence>,
    headings: Vec<Sentence>,
    words: Vec<Word>,
}

impl Paragraph {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Sentence>,
    {
        let items: Vec<Sentence> = items.into_iter().collect();
        let words = items
            .iter()
            .flat_map(|s| s.words().iter().cloned())
            .collect();
        let (headings, sentences) = items.into_iter().partition(Sentence::is_heading);
        Self {
            sentences,
            headings,
            words,
        }
    }

    /// Non-heading sentences, in original order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Heading sentences, in original order.
    pub fn headings(&self) -> &[Sentence] {
        &self.headings
    }

    /// All words of the paragraph, headings included.
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// An ordered, immutable sequence of paragraphs with eagerly computed
/// document-wide views.
///
/// Documents are never mutated after construction, so they can be shared
/// read-only across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
    sentences: Vec<Sentence>,
    headings: Vec<Sentence>,
    words: Vec<Word>,
}

impl Document {
    pub fn new<I>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = Paragraph>,
    {
        let paragraphs: Vec<Paragraph> = paragraphs.into_iter().collect();
        let sentences = paragraphs
            .iter()
            .flat_map(|p| p.sentences().iter().cloned())
            .collect();
        let headings = paragraphs
            .iter()
            .flat_map(|p| p.headings().iter().cloned())
            .collect();
        let words = paragraphs
            .iter()
            .flat_map(|p| p.words().iter().cloned())
            .collect();
        Self {
            paragraphs,
            sentences,
            headings,
            words,
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Non-heading sentences of the whole document, in original order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Heading sentences of the whole document, in original order.
    pub fn headings(&self) -> &[Sentence] {
        &self.headings
    }

    /// All words of the document, headings included.
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[&str]) -> Sentence {
        Sentence::new(words.iter().copied())
    }

    #[test]
    fn test_word_is_case_folded() {
        let word = Word::new("Machine");
        assert_eq!(word.as_str(), "machine");
        assert_eq!(word, Word::new("MACHINE"));
    }

    #[test]
    fn test_word_ordering_is_string_based() {
        assert!(Word::new("apple") < Word::new("banana"));
        assert!(Word::new("Apple") < Word::new("banana"));
    }

    #[test]
    fn test_sentence_equality_covers_order_and_heading() {
        let a = sentence(&["the", "quick", "fox"]);
        let b = sentence(&["the", "quick", "fox"]);
        let reordered = sentence(&["quick", "the", "fox"]);
        let heading = Sentence::heading(["the", "quick", "fox"]);

        assert_eq!(a, b);
        assert_ne!(a, reordered);
        assert_ne!(a, heading);
    }

    #[test]
    fn test_sentence_display_joins_words() {
        let s = sentence(&["Hello", "World"]);
        assert_eq!(s.to_string(), "hello world");
    }

    #[test]
    fn test_paragraph_separates_headings_from_sentences() {
        let paragraph = Paragraph::new(vec![
            Sentence::heading(["introduction"]),
            sentence(&["first", "sentence"]),
            sentence(&["second", "sentence"]),
        ]);

        assert_eq!(paragraph.headings().len(), 1);
        assert_eq!(paragraph.sentences().len(), 2);
        // words cover everything, in original order
        let words: Vec<&str> = paragraph.words().iter().map(Word::as_str).collect();
        assert_eq!(
            words,
            vec!["introduction", "first", "sentence", "second", "sentence"]
        );
    }

    #[test]
    fn test_document_views_preserve_order() {
        let document = Document::new(vec![
            Paragraph::new(vec![sentence(&["one"]), sentence(&["two"])]),
            Paragraph::new(vec![sentence(&["three"])]),
        ]);

        let flattened: Vec<String> = document
            .sentences()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(flattened, vec!["one", "two", "three"]);
        assert_eq!(document.words().len(), 3);
        assert!(document.headings().is_empty());
    }

    #[test]
    fn test_empty_document() {
        let document = Document::new(Vec::new());
        assert!(document.sentences().is_empty());
        assert!(document.headings().is_empty());
        assert!(document.words().is_empty());
    }
}
