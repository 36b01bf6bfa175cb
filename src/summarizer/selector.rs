//! Sentence selection
//!
//! The shared back half of every ranking algorithm: given per-sentence
//! ratings, pick the requested subset and hand it back in original document
//! order. The two-phase sort is the core invariant: a stable descending
//! sort by rating (ties keep document order), a cut, then a re-sort by
//! original index.

use std::str::FromStr;

use crate::error::SummarizeError;
use crate::types::Sentence;

use super::Ratings;

/// How many sentences a summary should contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsCount {
    /// Absolute number of sentences. `Count(0)` yields an empty summary.
    Count(usize),
    /// Percentage of the document's sentences; a non-empty document always
    /// yields at least one sentence.
    Percentage(u32),
    /// Keep top-ranked sentences while their cumulative word count fits the
    /// budget.
    WordBudget(usize),
}

impl ItemsCount {
    fn cutoff(&self, ranked: &[Ranked<'_>]) -> usize {
        match *self {
            ItemsCount::Count(count) => count.min(ranked.len()),
            ItemsCount::Percentage(percentage) => {
                if ranked.is_empty() {
                    0
                } else {
                    let count = ranked.len() * percentage as usize / 100;
                    count.max(1).min(ranked.len())
                }
            }
            ItemsCount::WordBudget(budget) => {
                let mut words = 0;
                let mut keep = 0;
                for entry in ranked {
                    words += entry.sentence.len();
                    if words > budget {
                        break;
                    }
                    keep += 1;
                }
                keep
            }
        }
    }
}

impl FromStr for ItemsCount {
    type Err = SummarizeError;

    /// Parse `"7"` as an absolute count or `"20%"` as a percentage.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || SummarizeError::InvalidItemsCount {
            input: value.to_string(),
        };
        let trimmed = value.trim();
        if let Some(percentage) = trimmed.strip_suffix('%') {
            percentage
                .trim()
                .parse()
                .map(ItemsCount::Percentage)
                .map_err(|_| invalid())
        } else {
            trimmed.parse().map(ItemsCount::Count).map_err(|_| invalid())
        }
    }
}

struct Ranked<'a> {
    sentence: &'a Sentence,
    order: usize,
    rating: f64,
}

/// Pick the best-rated sentences and return them in original document order.
///
/// Sentences missing from the rating map rate 0.0. Requesting more than the
/// document holds returns everything.
pub fn select_best(sentences: &[Sentence], count: &ItemsCount, ratings: &Ratings) -> Vec<Sentence> {
    let mut ranked: Vec<Ranked<'_>> = sentences
        .iter()
        .enumerate()
        .map(|(order, sentence)| Ranked {
            sentence,
            order,
            rating: ratings.get(sentence).copied().unwrap_or(0.0),
        })
        .collect();

    // stable sort: equally rated sentences keep their document order
    ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    ranked.truncate(count.cutoff(&ranked));
    ranked.sort_by_key(|entry| entry.order);

    ranked
        .into_iter()
        .map(|entry| entry.sentence.clone())
        .collect()
}
