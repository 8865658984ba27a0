//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ResearchParams`]: language, result limit and feature flags for research calls
//! - [`BatchParams`]: pacing of the sequential batch loop

pub mod batch_params;
pub mod research_params;

pub use batch_params::BatchParams;
pub use research_params::ResearchParams;
