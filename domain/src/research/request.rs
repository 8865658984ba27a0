//! Composite research request

use crate::core::error::DomainError;
use crate::tool::ToolArguments;
use serde::{Deserialize, Serialize};

/// Default report language.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default number of search results per task.
pub const DEFAULT_MAX_RESULT: u32 = 10;

/// Arguments for the composite `gene-research` tool.
///
/// Serialises to the camelCase argument object the server expects.
/// Unset optional fields are sent as `null` and unset lists as `[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRequest {
    /// Subject identifier, e.g. a gene symbol such as `talB`.
    pub gene_symbol: String,
    /// Organism / context string, e.g. `Escherichia coli`.
    pub organism: String,
    #[serde(default)]
    pub research_focus: Vec<String>,
    #[serde(default)]
    pub specific_aspects: Vec<String>,
    #[serde(default)]
    pub disease_context: Option<String>,
    #[serde(default)]
    pub experimental_approach: Option<String>,
    #[serde(default)]
    pub user_prompt: Option<String>,
    pub language: String,
    pub max_result: u32,
    pub enable_citation_image: bool,
    pub enable_references: bool,
}

impl ResearchRequest {
    pub fn new(gene_symbol: impl Into<String>, organism: impl Into<String>) -> Self {
        Self {
            gene_symbol: gene_symbol.into(),
            organism: organism.into(),
            research_focus: Vec::new(),
            specific_aspects: Vec::new(),
            disease_context: None,
            experimental_approach: None,
            user_prompt: None,
            language: DEFAULT_LANGUAGE.to_string(),
            max_result: DEFAULT_MAX_RESULT,
            enable_citation_image: true,
            enable_references: true,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_focus<I, S>(mut self, focus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.research_focus = focus.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_aspects<I, S>(mut self, aspects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specific_aspects = aspects.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_disease_context(mut self, context: impl Into<String>) -> Self {
        self.disease_context = Some(context.into());
        self
    }

    pub fn with_experimental_approach(mut self, approach: impl Into<String>) -> Self {
        self.experimental_approach = Some(approach.into());
        self
    }

    pub fn with_user_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.user_prompt = Some(prompt.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_max_result(mut self, max_result: u32) -> Self {
        self.max_result = max_result;
        self
    }

    pub fn with_citation_image(mut self, enabled: bool) -> Self {
        self.enable_citation_image = enabled;
        self
    }

    pub fn with_references(mut self, enabled: bool) -> Self {
        self.enable_references = enabled;
        self
    }

    // ==================== Validation / Conversion ====================

    /// Reject requests the server would have to refuse anyway.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.gene_symbol.trim().is_empty() {
            return Err(DomainError::InvalidRequest(
                "geneSymbol cannot be empty".to_string(),
            ));
        }
        if self.organism.trim().is_empty() {
            return Err(DomainError::InvalidRequest(
                "organism cannot be empty".to_string(),
            ));
        }
        if self.max_result == 0 {
            return Err(DomainError::InvalidMaxResult);
        }
        Ok(())
    }

    /// Convert into the argument map sent with `tools/call`.
    pub fn to_arguments(&self) -> ToolArguments {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            // A struct of strings, lists and scalars always serialises to an object
            _ => ToolArguments::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let req = ResearchRequest::new("talB", "Escherichia coli");
        assert_eq!(req.language, "en-US");
        assert_eq!(req.max_result, 10);
        assert!(req.enable_citation_image);
        assert!(req.enable_references);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_to_arguments_uses_wire_names() {
        let args = ResearchRequest::new("lysC", "Escherichia coli")
            .with_focus(["enzyme_kinetics", "regulation"])
            .with_max_result(5)
            .to_arguments();

        assert_eq!(args["geneSymbol"], "lysC");
        assert_eq!(args["organism"], "Escherichia coli");
        assert_eq!(args["researchFocus"], json!(["enzyme_kinetics", "regulation"]));
        assert_eq!(args["specificAspects"], json!([]));
        assert_eq!(args["diseaseContext"], json!(null));
        assert_eq!(args["maxResult"], 5);
        assert_eq!(args["enableCitationImage"], true);
        assert_eq!(args["enableReferences"], true);
        assert_eq!(args.len(), 11);
    }

    #[test]
    fn test_validate_rejects_blank_subject() {
        let req = ResearchRequest::new("  ", "Escherichia coli");
        assert!(matches!(req.validate(), Err(DomainError::InvalidRequest(_))));
    }

    #[test]
    fn test_validate_rejects_blank_organism() {
        let req = ResearchRequest::new("thrB", "");
        assert!(matches!(req.validate(), Err(DomainError::InvalidRequest(_))));
    }

    #[test]
    fn test_validate_rejects_zero_max_result() {
        let req = ResearchRequest::new("thrB", "Escherichia coli").with_max_result(0);
        assert_eq!(req.validate(), Err(DomainError::InvalidMaxResult));
    }
}
