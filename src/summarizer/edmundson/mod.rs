//! Weighted multi-signal scoring
//!
//! Combines four independent sub-scorers (cue, key, title, location) by a
//! weighted sum. A weight of zero skips computing that sub-scorer entirely;
//! each enabled sub-scorer requires its word set to be non-empty, checked
//! when the sub-scorer is built.

pub mod cue;
pub mod key;
pub mod location;
pub mod title;

use rustc_hash::FxHashSet;

use crate::error::{Result, SummarizeError};
use crate::nlp::stemmer::{Stemmer, StemmerRef};
use crate::types::{Document, Sentence};

use self::cue::CueMethod;
use self::key::KeyMethod;
use self::location::LocationMethod;
use self::title::TitleMethod;
use super::selector::{select_best, ItemsCount};
use super::{Ratings, Summarizer};

/// The combined cue/key/title/location summarizer.
#[derive(Debug, Clone)]
pub struct EdmundsonSummarizer {
    stemmer: StemmerRef,
    cue_weight: f64,
    key_weight: f64,
    title_weight: f64,
    location_weight: f64,
    bonus_words: FxHashSet<String>,
    stigma_words: FxHashSet<String>,
    null_words: FxHashSet<String>,
}

impl Default for EdmundsonSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EdmundsonSummarizer {
    /// Create a summarizer with default weights: cue 1.0, key 0.0,
    /// title 1.0, location 1.0.
    pub fn new() -> Self {
        Self {
            stemmer: StemmerRef::default(),
            cue_weight: 1.0,
            key_weight: 0.0,
            title_weight: 1.0,
            location_weight: 1.0,
            bonus_words: FxHashSet::default(),
            stigma_words: FxHashSet::default(),
            null_words: FxHashSet::default(),
        }
    }

    pub fn with_stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = StemmerRef::new(stemmer);
        self
    }

    /// Set the four signal weights. Negative weights are rejected.
    pub fn with_weights(mut self, cue: f64, key: f64, title: f64, location: f64) -> Result<Self> {
        for weight in [cue, key, title, location] {
            if weight < 0.0 {
                return Err(SummarizeError::NegativeWeight { value: weight });
            }
        }
        self.cue_weight = cue;
        self.key_weight = key;
        self.title_weight = title;
        self.location_weight = location;
        Ok(self)
    }

    /// Words signalling importance; stored stemmed.
    pub fn with_bonus_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.bonus_words = self.stem_set(words);
        self
    }

    /// Words signalling irrelevance; stored stemmed.
    pub fn with_stigma_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stigma_words = self.stem_set(words);
        self
    }

    /// Words ignored when matching against headings; stored stemmed.
    pub fn with_null_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.null_words = self.stem_set(words);
        self
    }

    fn stem_set<I, S>(&self, words: I) -> FxHashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| self.stemmer.stem(word.as_ref()))
            .collect()
    }

    fn build_cue(&self) -> Result<CueMethod> {
        self.check_words(&self.bonus_words, "bonus")?;
        self.check_words(&self.stigma_words, "stigma")?;
        Ok(CueMethod::new(
            self.stemmer.clone(),
            self.bonus_words.clone(),
            self.stigma_words.clone(),
        ))
    }

    fn build_key(&self) -> Result<KeyMethod> {
        self.check_words(&self.bonus_words, "bonus")?;
        Ok(KeyMethod::new(
            self.stemmer.clone(),
            self.bonus_words.clone(),
        ))
    }

    fn build_title(&self) -> Result<TitleMethod> {
        self.check_words(&self.null_words, "null")?;
        Ok(TitleMethod::new(
            self.stemmer.clone(),
            self.null_words.clone(),
        ))
    }

    fn build_location(&self) -> Result<LocationMethod> {
        self.check_words(&self.null_words, "null")?;
        Ok(LocationMethod::new(
            self.stemmer.clone(),
            self.null_words.clone(),
        ))
    }

    fn check_words(&self, words: &FxHashSet<String>, kind: &'static str) -> Result<()> {
        if words.is_empty() {
            Err(SummarizeError::EmptyWordSet { kind })
        } else {
            Ok(())
        }
    }

    /// Summarize using only the cue signal.
    pub fn cue_method(&self, document: &Document, count: &ItemsCount) -> Result<Vec<Sentence>> {
        let ratings = self.build_cue()?.rate_sentences(document);
        Ok(select_best(document.sentences(), count, &ratings))
    }

    /// Summarize using only the key signal.
    pub fn key_method(&self, document: &Document, count: &ItemsCount) -> Result<Vec<Sentence>> {
        let ratings = self.build_key()?.rate_sentences(document);
        Ok(select_best(document.sentences(), count, &ratings))
    }

    /// Summarize using only the title signal.
    pub fn title_method(&self, document: &Document, count: &ItemsCount) -> Result<Vec<Sentence>> {
        let ratings = self.build_title()?.rate_sentences(document);
        Ok(select_best(document.sentences(), count, &ratings))
    }

    /// Summarize using only the location signal.
    pub fn location_method(
        &self,
        document: &Document,
        count: &ItemsCount,
    ) -> Result<Vec<Sentence>> {
        let ratings = self.build_location()?.rate_sentences(document);
        Ok(select_best(document.sentences(), count, &ratings))
    }
}

fn accumulate(ratings: &mut Ratings, sub_ratings: Ratings, weight: f64) {
    for (sentence, rating) in sub_ratings {
        *ratings.entry(sentence).or_insert(0.0) += weight * rating;
    }
}

impl Summarizer for EdmundsonSummarizer {
    fn rate_sentences(&self, document: &Document) -> Result<Ratings> {
        let mut ratings: Ratings = document
            .sentences()
            .iter()
            .map(|sentence| (sentence.clone(), 0.0))
            .collect();

        if self.cue_weight > 0.0 {
            accumulate(
                &mut ratings,
                self.build_cue()?.rate_sentences(document),
                self.cue_weight,
            );
        }
        if self.key_weight > 0.0 {
            accumulate(
                &mut ratings,
                self.build_key()?.rate_sentences(document),
                self.key_weight,
            );
        }
        if self.title_weight > 0.0 {
            accumulate(
                &mut ratings,
                self.build_title()?.rate_sentences(document),
                self.title_weight,
            );
        }
        if self.location_weight > 0.0 {
            accumulate(
                &mut ratings,
                self.build_location()?.rate_sentences(document),
                self.location_weight,
            );
        }

        Ok(ratings)
    }
}
