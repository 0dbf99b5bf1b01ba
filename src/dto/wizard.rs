//! DTOs shaped for the wizard page template.

use serde::Serialize;

use crate::domain::wizard::PromptTemplate;
use crate::forms::wizard::WizardSearchParams;

/// Data required to render the wizard page.
#[derive(Debug, Serialize)]
pub struct WizardPageData {
    /// Validated query state driving the page.
    pub params: WizardSearchParams,
    /// Gallery shown on the start step; empty on later steps.
    pub templates: Vec<PromptTemplate>,
    /// Template selected in an earlier step, when it still exists.
    pub selected: Option<PromptTemplate>,
}
