//! Research parameters: defaults applied to every research request.
//!
//! [`ResearchParams`] carries the report language, result limit and feature
//! flags that the CLI and config file set once and every composite or
//! workflow call then inherits.

use research_domain::research::{DEFAULT_LANGUAGE, DEFAULT_MAX_RESULT};
use research_domain::ResearchRequest;
use serde::{Deserialize, Serialize};

/// Shared research defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchParams {
    /// Report language tag (e.g. `en-US`).
    pub language: String,
    /// Maximum number of search results per task.
    pub max_result: u32,
    /// Include content-related images in the final report.
    pub enable_citation_image: bool,
    /// Include citation links in search results and reports.
    pub enable_references: bool,
}

impl Default for ResearchParams {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            max_result: DEFAULT_MAX_RESULT,
            enable_citation_image: true,
            enable_references: true,
        }
    }
}

impl ResearchParams {
    // ==================== Builder Methods ====================

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_max_result(mut self, max_result: u32) -> Self {
        self.max_result = max_result;
        self
    }

    /// Start a composite request for `gene_symbol` in `organism` with these defaults.
    pub fn request(
        &self,
        gene_symbol: impl Into<String>,
        organism: impl Into<String>,
    ) -> ResearchRequest {
        ResearchRequest::new(gene_symbol, organism)
            .with_language(self.language.clone())
            .with_max_result(self.max_result)
            .with_citation_image(self.enable_citation_image)
            .with_references(self.enable_references)
    }
}
