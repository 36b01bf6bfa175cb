//! Extractive summarization strategies
//!
//! Every algorithm implements the [`Summarizer`] contract: consume a
//! tokenized [`Document`], produce a rating for every sentence, and let the
//! shared [`selector`] pick the requested subset back in original document
//! order. The strategies form a closed set, enumerated by [`Method`].

pub mod edmundson;
pub mod fast_kl;
pub mod kl;
pub mod lexrank;
pub mod lsa;
pub mod luhn;
pub mod random;
pub mod reduction;
pub mod selector;
pub mod sum_basic;
pub mod textrank;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SummarizeError};
use crate::types::{Document, Sentence};

use self::selector::{select_best, ItemsCount};

/// A fresh per-invocation mapping from sentence to score.
pub type Ratings = FxHashMap<Sentence, f64>;

/// The shared contract of every ranking algorithm.
pub trait Summarizer {
    /// Rate every non-heading sentence of the document.
    fn rate_sentences(&self, document: &Document) -> Result<Ratings>;

    /// Rate the document and return the requested sentence subset in
    /// original document order.
    fn summarize(&self, document: &Document, count: &ItemsCount) -> Result<Vec<Sentence>> {
        let ratings = self.rate_sentences(document)?;
        Ok(select_best(document.sentences(), count, &ratings))
    }
}

/// The closed set of ranking strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Frequency/significant-word chunk scoring.
    Luhn,
    /// Weighted cue/key/title/location heuristics.
    Edmundson,
    /// Latent-dimension scoring via singular value decomposition.
    Lsa,
    /// Similarity-graph eigenvector centrality.
    LexRank,
    /// Co-occurrence graph centrality with damping.
    TextRank,
    /// Greedy KL-divergence minimization.
    Kl,
    /// Vectorized variant of the KL scorer.
    FastKl,
    /// Greedy frequency-adjusting scoring.
    SumBasic,
    /// Uniform pairwise word-overlap scoring.
    Reduction,
    /// Random baseline for evaluation.
    Random,
}

impl Method {
    /// All methods, in a stable order.
    pub const ALL: [Method; 10] = [
        Method::Luhn,
        Method::Edmundson,
        Method::Lsa,
        Method::LexRank,
        Method::TextRank,
        Method::Kl,
        Method::FastKl,
        Method::SumBasic,
        Method::Reduction,
        Method::Random,
    ];

    /// The user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Luhn => "luhn",
            Method::Edmundson => "edmundson",
            Method::Lsa => "lsa",
            Method::LexRank => "lex_rank",
            Method::TextRank => "text_rank",
            Method::Kl => "kl",
            Method::FastKl => "fast_kl",
            Method::SumBasic => "sum_basic",
            Method::Reduction => "reduction",
            Method::Random => "random",
        }
    }

    /// Build a summarizer with default configuration.
    ///
    /// Methods requiring word sets (Edmundson) still need them before the
    /// first call; the precondition surfaces as an error at call time.
    pub fn build(&self) -> Box<dyn Summarizer> {
        match self {
            Method::Luhn => Box::new(luhn::LuhnSummarizer::new()),
            Method::Edmundson => Box::new(edmundson::EdmundsonSummarizer::new()),
            Method::Lsa => Box::new(lsa::LsaSummarizer::new()),
            Method::LexRank => Box::new(lexrank::LexRankSummarizer::new()),
            Method::TextRank => Box::new(textrank::TextRankSummarizer::new()),
            Method::Kl => Box::new(kl::KlSummarizer::new()),
            Method::FastKl => Box::new(fast_kl::FastKlSummarizer::new()),
            Method::SumBasic => Box::new(sum_basic::SumBasicSummarizer::new()),
            Method::Reduction => Box::new(reduction::ReductionSummarizer::new()),
            Method::Random => Box::new(random::RandomSummarizer::new()),
        }
    }
}

impl std::str::FromStr for Method {
    type Err = SummarizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "luhn" => Ok(Method::Luhn),
            "edmundson" => Ok(Method::Edmundson),
            "lsa" => Ok(Method::Lsa),
            "lex_rank" | "lexrank" => Ok(Method::LexRank),
            "text_rank" | "textrank" => Ok(Method::TextRank),
            "kl" => Ok(Method::Kl),
            "fast_kl" | "fastkl" => Ok(Method::FastKl),
            "sum_basic" | "sumbasic" => Ok(Method::SumBasic),
            "reduction" => Ok(Method::Reduction),
            "random" => Ok(Method::Random),
            _ => Err(SummarizeError::UnknownMethod {
                name: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Paragraph;

    #[test]
    fn test_parse_known_methods() {
        for method in Method::ALL {
            let parsed: Method = method.as_str().parse().unwrap();
            assert_eq!(parsed, method);
        }
        assert_eq!("TextRank".parse::<Method>().unwrap(), Method::TextRank);
        assert_eq!("lexrank".parse::<Method>().unwrap(), Method::LexRank);
    }

    #[test]
    fn test_parse_unknown_method() {
        let err = "bogus".parse::<Method>().unwrap_err();
        assert_eq!(
            err,
            SummarizeError::UnknownMethod {
                name: "bogus".to_string()
            }
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Method::FastKl).unwrap();
        assert_eq!(json, "\"fast_kl\"");
        let back: Method = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Method::FastKl);
    }

    #[test]
    fn test_built_summarizers_handle_empty_documents() {
        let document = Document::new(Vec::new());
        for method in Method::ALL {
            // Edmundson's default weights require word sets, which is a
            // legitimate configuration error rather than a degenerate input.
            if method == Method::Edmundson {
                continue;
            }
            let summary = method
                .build()
                .summarize(&document, &ItemsCount::Count(3))
                .unwrap();
            assert!(summary.is_empty(), "method {:?}", method);
        }
    }

    #[test]
    fn test_built_summarizer_returns_subset_in_order() {
        let sentences: Vec<Sentence> = (0..4)
            .map(|i| {
                Sentence::new([
                    format!("word{i}").as_str(),
                    "shared",
                    "tokens",
                    "everywhere",
                ])
            })
            .collect();
        let document = Document::new(vec![Paragraph::new(sentences.clone())]);

        let summary = Method::TextRank
            .build()
            .summarize(&document, &ItemsCount::Count(2))
            .unwrap();

        assert_eq!(summary.len(), 2);
        // output order follows document order
        let positions: Vec<usize> = summary
            .iter()
            .map(|s| sentences.iter().position(|o| o == s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
