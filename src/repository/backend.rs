//! HTTP client for the remote data platform.
//!
//! The platform exposes its stored functions over a JSON function-call
//! endpoint: `POST {base}/api/query` with a `{path, args, format}` body and a
//! tagged success/error response envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::domain::types::TemplateSlug;
use crate::domain::wizard::PromptTemplate;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::factory::ConfigurationError;
use crate::repository::{TemplateListQuery, TemplateReader};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("prompt-wizard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum CallResponse<T> {
    Success {
        value: T,
    },
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

/// Shared handle to the data platform. Cheap to share behind an `Arc`; all
/// methods take `&self`.
#[derive(Debug)]
pub struct BackendClient {
    http: Client,
    base: Url,
    deploy_key: Option<String>,
}

impl BackendClient {
    /// Built by [`crate::repository::factory::BackendFactory`] only.
    pub(crate) fn new(base: Url, deploy_key: Option<String>) -> Result<Self, ConfigurationError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ConfigurationError::HttpClient(err.to_string()))?;

        Ok(Self {
            http,
            base,
            deploy_key,
        })
    }

    /// Calls a read-only function on the data platform.
    pub async fn query<T: DeserializeOwned>(&self, path: &str, args: Value) -> RepositoryResult<T> {
        let url = self
            .base
            .join("api/query")
            .map_err(|err| RepositoryError::Unexpected(err.to_string()))?;

        let mut request = self.http.post(url).json(&json!({
            "path": path,
            "args": args,
            "format": "json",
        }));
        if let Some(key) = &self.deploy_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?.error_for_status()?;
        match response.json::<CallResponse<T>>().await? {
            CallResponse::Success { value } => Ok(value),
            CallResponse::Error { error_message } => Err(RepositoryError::Rejected(error_message)),
        }
    }
}

#[async_trait]
impl TemplateReader for BackendClient {
    async fn list_templates(
        &self,
        query: TemplateListQuery,
    ) -> RepositoryResult<Vec<PromptTemplate>> {
        let order = query.sort.map(|sort| sort.as_str());
        self.query(
            "templates:list",
            json!({ "order": order, "search": query.search }),
        )
        .await
    }

    async fn get_template(&self, slug: &TemplateSlug) -> RepositoryResult<Option<PromptTemplate>> {
        self.query("templates:get", json!({ "slug": slug.as_str() }))
            .await
    }
}
