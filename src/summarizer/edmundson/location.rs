//! Location signal
//!
//! Heading matches weighted by `w_h`, plus positional bonuses for sentences
//! opening or closing a paragraph and paragraphs opening or closing the
//! document. The first-position check takes precedence when a paragraph or
//! sentence is both first and last.

use rustc_hash::FxHashSet;

use crate::nlp::stemmer::StemmerRef;
use crate::summarizer::Ratings;
use crate::types::Document;

use super::title::TitleMethod;

/// The location sub-scorer.
#[derive(Debug, Clone)]
pub struct LocationMethod {
    title: TitleMethod,
    heading_weight: f64,
    first_paragraph_weight: f64,
    last_paragraph_weight: f64,
    first_sentence_weight: f64,
    last_sentence_weight: f64,
}

impl LocationMethod {
    pub fn new(stemmer: StemmerRef, null_words: FxHashSet<String>) -> Self {
        Self {
            title: TitleMethod::new(stemmer, null_words),
            heading_weight: 1.0,
            first_paragraph_weight: 1.0,
            last_paragraph_weight: 1.0,
            first_sentence_weight: 1.0,
            last_sentence_weight: 1.0,
        }
    }

    /// Override the heading and positional weights
    /// `(w_h, w_p1, w_p2, w_s1, w_s2)`.
    pub fn with_location_weights(
        mut self,
        heading: f64,
        first_paragraph: f64,
        last_paragraph: f64,
        first_sentence: f64,
        last_sentence: f64,
    ) -> Self {
        self.heading_weight = heading;
        self.first_paragraph_weight = first_paragraph;
        self.last_paragraph_weight = last_paragraph;
        self.first_sentence_weight = first_sentence;
        self.last_sentence_weight = last_sentence;
        self
    }

    pub fn rate_sentences(&self, document: &Document) -> Ratings {
        let significant = self.title.significant_words(document);
        let paragraphs = document.paragraphs();

        let mut ratings = Ratings::default();
        for (paragraph_order, paragraph) in paragraphs.iter().enumerate() {
            let sentences = paragraph.sentences();
            for (sentence_order, sentence) in sentences.iter().enumerate() {
                let mut rating =
                    self.title.title_matches(sentence, &significant) * self.heading_weight;

                if paragraph_order == 0 {
                    rating += self.first_paragraph_weight;
                } else if paragraph_order == paragraphs.len() - 1 {
                    rating += self.last_paragraph_weight;
                }

                if sentence_order == 0 {
                    rating += self.first_sentence_weight;
                } else if sentence_order == sentences.len() - 1 {
                    rating += self.last_sentence_weight;
                }

                ratings.insert(sentence.clone(), rating);
            }
        }

        ratings
    }
}
