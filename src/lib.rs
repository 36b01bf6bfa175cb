//! Extractive sentence-ranking summarization.
//!
//! A family of interchangeable ranking algorithms (Luhn chunk scoring,
//! Edmundson's weighted heuristics, LSA, LexRank, TextRank, greedy KL
//! minimization, SumBasic, pairwise Reduction, and a random baseline), all
//! sharing one contract: consume a tokenized [`Document`] and a target
//! count, return a deterministic subset of its sentences in original
//! document order.
//!
//! The crate is a pure, synchronous, in-memory transform. Parsing text into
//! documents, stemming, and stop-word list management are collaborator
//! concerns, consumed through the interfaces in [`nlp`].
//!
//! ```
//! use sentrank::{Document, ItemsCount, Paragraph, Sentence, Summarizer};
//! use sentrank::summarizer::textrank::TextRankSummarizer;
//!
//! let document = Document::new(vec![Paragraph::new(vec![
//!     Sentence::new("the quick brown fox jumps".split_whitespace()),
//!     Sentence::new("the lazy dog sleeps all day".split_whitespace()),
//!     Sentence::new("the fox jumps over the dog".split_whitespace()),
//! ])]);
//!
//! let summarizer = TextRankSummarizer::new();
//! let summary = summarizer.summarize(&document, &ItemsCount::Count(1)).unwrap();
//! assert_eq!(summary.len(), 1);
//! ```

pub mod error;
pub mod linalg;
pub mod nlp;
pub mod summarizer;
pub mod types;

pub use error::{Result, SummarizeError};
pub use summarizer::selector::{select_best, ItemsCount};
pub use summarizer::{Method, Ratings, Summarizer};
pub use types::{Document, Paragraph, Sentence, Word};
