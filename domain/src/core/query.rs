//! Research query value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A free-text research topic for the step-by-step workflow (Value Object)
///
/// Always non-blank; construction goes through [`ResearchQuery::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResearchQuery {
    content: String,
}

impl ResearchQuery {
    /// Create a query, rejecting empty or whitespace-only input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self { content })
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for ResearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for ResearchQuery {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl From<ResearchQuery> for String {
    fn from(q: ResearchQuery) -> Self {
        q.content
    }
}
