//! Natural language collaborator interfaces
//!
//! The summarization core does not tokenize, stem, or maintain stop-word
//! lists itself. This module holds the interfaces it consumes: a stop-word
//! filter, a pluggable stemmer contract, and the term-frequency model shared
//! by several rankers.

pub mod stemmer;
pub mod stopwords;
pub mod tf;
