//! Research defaults from TOML (`[research]` section)

use research_application::ResearchParams;
use serde::{Deserialize, Serialize};

/// Raw research defaults from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResearchConfig {
    pub language: String,
    pub max_result: u32,
    pub enable_citation_image: bool,
    pub enable_references: bool,
}

impl Default for FileResearchConfig {
    fn default() -> Self {
        let params = ResearchParams::default();
        Self {
            language: params.language,
            max_result: params.max_result,
            enable_citation_image: params.enable_citation_image,
            enable_references: params.enable_references,
        }
    }
}

impl FileResearchConfig {
    pub fn to_research_params(&self) -> ResearchParams {
        ResearchParams {
            language: self.language.clone(),
            max_result: self.max_result,
            enable_citation_image: self.enable_citation_image,
            enable_references: self.enable_references,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_application() {
        assert_eq!(
            FileResearchConfig::default().to_research_params(),
            ResearchParams::default()
        );
    }
}
