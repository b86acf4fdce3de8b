//! Command implementations

pub mod recommend;

pub use recommend::{RecommendConfig, RecommendResult, run_recommend};
