//! Numeric primitives shared by the matrix-based rankers
//!
//! Power iteration finds the stationary distribution of the sentence
//! similarity matrices built by the graph-centrality rankers; the thin SVD
//! backs the latent-dimension ranker.

pub mod power;
pub mod svd;

pub use power::{PowerIteration, PowerIterationResult};
pub use svd::{thin_svd, ThinSvd};
