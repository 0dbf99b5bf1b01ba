//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::types::TemplateSlug;
use crate::domain::wizard::PromptTemplate;
use crate::repository::errors::RepositoryResult;
use crate::repository::{TemplateListQuery, TemplateReader};

mock! {
    pub Backend {}

    #[async_trait]
    impl TemplateReader for Backend {
        async fn list_templates(
            &self,
            query: TemplateListQuery,
        ) -> RepositoryResult<Vec<PromptTemplate>>;
        async fn get_template(
            &self,
            slug: &TemplateSlug,
        ) -> RepositoryResult<Option<PromptTemplate>>;
    }
}
