//! Services backing the JSON API endpoints.

use crate::dto::api::{TemplatesQuery, TemplatesResponse};
use crate::repository::{TemplateListQuery, TemplateReader};
use crate::services::ServiceResult;

/// Returns the prompt templates matching the query.
pub async fn list_templates<R>(repo: &R, params: TemplatesQuery) -> ServiceResult<TemplatesResponse>
where
    R: TemplateReader + ?Sized,
{
    let mut query = TemplateListQuery::new();
    if let Some(sort) = params.sort {
        query = query.sort(sort);
    }

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(term) = search {
        query = query.search(term);
    }

    let templates = repo.list_templates(query).await.map_err(|err| {
        log::error!("Failed to list templates: {err}");
        err
    })?;

    Ok(TemplatesResponse {
        total: templates.len(),
        templates,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::TemplateSlug;
    use crate::domain::wizard::{PromptTemplate, SortOrder};
    use crate::repository::mock::MockBackend;

    fn template(slug: &str) -> PromptTemplate {
        PromptTemplate {
            slug: TemplateSlug::new(slug).unwrap(),
            title: format!("Template {slug}"),
            summary: "A template".to_string(),
            body: "Write about {{topic}}.".to_string(),
            tone: None,
            updated_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn blank_search_is_dropped_from_the_query() {
        let mut repo = MockBackend::new();
        repo.expect_list_templates()
            .withf(|query| query.search.is_none() && query.sort == Some(SortOrder::Asc))
            .times(1)
            .returning(|_| Ok(vec![template("cold-email")]));

        let params = TemplatesQuery {
            search: Some("   ".to_string()),
            sort: Some(SortOrder::Asc),
        };
        let response = list_templates(&repo, params).await.unwrap();
        assert_eq!(response.total, 1);
    }

    #[actix_web::test]
    async fn search_term_is_trimmed_and_forwarded() {
        let mut repo = MockBackend::new();
        repo.expect_list_templates()
            .withf(|query| query.search.as_deref() == Some("email"))
            .times(1)
            .returning(|_| Ok(vec![template("cold-email"), template("warm-email")]));

        let params = TemplatesQuery {
            search: Some("  email ".to_string()),
            sort: None,
        };
        let response = list_templates(&repo, params).await.unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.templates.len(), 2);
    }
}
