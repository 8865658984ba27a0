//! Core domain concepts shared across all subdomains.
//!
//! - [`query::ResearchQuery`]: a validated free-text research topic
//! - [`error::DomainError`]: domain-level validation errors

pub mod error;
pub mod query;
