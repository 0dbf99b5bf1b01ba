//! DTOs exposed by the JSON API and diagnostic endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::wizard::{PromptTemplate, SortOrder};

/// Query parameters accepted by the `/api/v1/templates` service.
#[derive(Debug, Default)]
pub struct TemplatesQuery {
    /// Optional free-form search string applied to the template list.
    pub search: Option<String>,
    /// Optional ordering of the result.
    pub sort: Option<SortOrder>,
}

/// Result payload returned by [`crate::services::api::list_templates`].
#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    /// Total number of templates matching the filter.
    pub total: usize,
    /// The templates themselves.
    pub templates: Vec<PromptTemplate>,
}

/// Acknowledgment body returned by the monitoring tunnel endpoint.
#[derive(Debug, Serialize)]
pub struct TunnelAck {
    pub ok: bool,
    pub received_at: DateTime<Utc>,
}
