//! Recommendation pipeline
//!
//! Constraint parsing, candidate filtering, positional frequency scoring,
//! and best-candidate selection.

pub mod constraints;
mod engine;
pub mod filter;
pub mod scoring;
pub mod selector;

pub use constraints::{Constraints, HintConfig, InvalidLetters};
pub use engine::{Recommendation, Recommender};
pub use filter::filter_candidates;
pub use scoring::{FrequencyTable, ScoredCandidate, score_candidates, uniqueness_weight};
pub use selector::{BestCandidates, TieBreak, best_candidates, choose, select_best};
