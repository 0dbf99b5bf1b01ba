//! Services backing the wizard page.

use std::collections::HashMap;

use crate::domain::wizard::WizardStep;
use crate::dto::wizard::WizardPageData;
use crate::forms::wizard::WizardSearchParams;
use crate::repository::{TemplateListQuery, TemplateReader};
use crate::services::ServiceResult;

/// Validates the raw query and assembles the wizard page data.
///
/// The template gallery is fetched only on the start step; later steps load
/// the selected template when one is carried in the query. A selection that
/// no longer exists on the backend is rendered as absent, not as an error.
pub async fn load_wizard_page<R>(
    repo: &R,
    raw_query: &HashMap<String, String>,
) -> ServiceResult<WizardPageData>
where
    R: TemplateReader + ?Sized,
{
    let params = WizardSearchParams::from_query_map(raw_query)?;

    let templates = if params.step == WizardStep::Start {
        repo.list_templates(TemplateListQuery::new().sort(params.sort))
            .await
            .map_err(|err| {
                log::error!("Failed to list templates: {err}");
                err
            })?
    } else {
        Vec::new()
    };

    let selected = if params.step != WizardStep::Start {
        match &params.template {
            Some(slug) => repo.get_template(slug).await.map_err(|err| {
                log::error!("Failed to load template {slug}: {err}");
                err
            })?,
            None => None,
        }
    } else {
        None
    };

    Ok(WizardPageData {
        params,
        templates,
        selected,
    })
}
