//! Report persistence port.
//!
//! Defines the [`ReportStore`] trait the research use cases hand successful
//! results to. Storing is best-effort: a failed save is logged by the caller
//! and never changes the outcome of the research call itself.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting a research artifact
#[derive(Error, Debug)]
pub enum ReportStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Port for writing research artifacts.
///
/// `subject` and `context` identify the research target (gene symbol and
/// organism) and are used to derive the artifact's name.
pub trait ReportStore: Send + Sync {
    /// Persist report text (markdown) and return where it was written.
    fn save_report(
        &self,
        subject: &str,
        context: &str,
        content: &str,
    ) -> Result<PathBuf, ReportStoreError>;

    /// Persist the full structured result and return where it was written.
    fn save_data(
        &self,
        subject: &str,
        context: &str,
        data: &serde_json::Value,
    ) -> Result<PathBuf, ReportStoreError>;
}
