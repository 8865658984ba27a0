//! Progress reporting

pub mod artifacts;
pub mod reporter;
