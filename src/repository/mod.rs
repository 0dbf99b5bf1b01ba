use async_trait::async_trait;

use crate::domain::types::TemplateSlug;
use crate::domain::wizard::{PromptTemplate, SortOrder};
use crate::repository::errors::RepositoryResult;

#[cfg(feature = "server")]
pub mod backend;
pub mod errors;
#[cfg(feature = "server")]
pub mod factory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Filters applied when listing prompt templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateListQuery {
    pub sort: Option<SortOrder>,
    pub search: Option<String>,
}

impl TemplateListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// Read access to the prompt templates stored on the data platform.
#[async_trait]
pub trait TemplateReader {
    async fn list_templates(&self, query: TemplateListQuery)
    -> RepositoryResult<Vec<PromptTemplate>>;
    async fn get_template(&self, slug: &TemplateSlug) -> RepositoryResult<Option<PromptTemplate>>;
}
