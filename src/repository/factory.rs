//! Lazily constructed, process-wide handle to the backend client.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use reqwest::Url;
use thiserror::Error;

use crate::models::config::BackendConfig;
use crate::repository::backend::BackendClient;

/// Errors raised when the backend client cannot be constructed from the
/// available configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("backend url is not configured")]
    MissingBackendUrl,

    #[error("invalid backend url `{url}`: {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    #[error("failed to build the http client: {0}")]
    HttpClient(String),
}

/// Hands out the shared [`BackendClient`].
///
/// One factory lives in application state; the client it builds is the only
/// instance in the process. Construction is deferred to the first call and
/// guarded, so concurrent first callers observe exactly one construction.
/// Failures are recomputed on every call — the slot only ever stores a
/// successfully built client.
pub struct BackendFactory {
    config: BackendConfig,
    client: OnceCell<Arc<BackendClient>>,
}

impl BackendFactory {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Returns the shared client, constructing it on first use.
    pub fn client(&self) -> Result<Arc<BackendClient>, ConfigurationError> {
        self.client
            .get_or_try_init(|| {
                let url = self.parse_base_url()?;
                log::info!("Initializing backend client for {url}");
                let client = BackendClient::new(url, self.config.deploy_key.clone())?;
                Ok(Arc::new(client))
            })
            .cloned()
    }

    fn parse_base_url(&self) -> Result<Url, ConfigurationError> {
        let raw = self
            .config
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigurationError::MissingBackendUrl)?;

        let url = Url::parse(raw).map_err(|err| ConfigurationError::InvalidBackendUrl {
            url: raw.to_string(),
            reason: err.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigurationError::InvalidBackendUrl {
                url: raw.to_string(),
                reason: "not a base url".to_string(),
            });
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::thread;

    use super::*;

    fn configured() -> BackendFactory {
        BackendFactory::new(BackendConfig {
            url: Some("https://wizard.backend.example".to_string()),
            deploy_key: None,
        })
    }

    #[test]
    fn sequential_calls_return_the_same_handle() {
        let factory = configured();
        let first = factory.client().unwrap();
        let second = factory.client().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn missing_url_fails_on_every_call() {
        let factory = BackendFactory::new(BackendConfig::default());
        assert_eq!(
            factory.client().unwrap_err(),
            ConfigurationError::MissingBackendUrl
        );
        // Not cached as a permanent failure: the same error again.
        assert_eq!(
            factory.client().unwrap_err(),
            ConfigurationError::MissingBackendUrl
        );
    }

    #[test]
    fn blank_url_counts_as_missing() {
        let factory = BackendFactory::new(BackendConfig {
            url: Some("   ".to_string()),
            deploy_key: None,
        });
        assert_eq!(
            factory.client().unwrap_err(),
            ConfigurationError::MissingBackendUrl
        );
    }

    #[test]
    fn unparsable_url_is_reported() {
        let factory = BackendFactory::new(BackendConfig {
            url: Some("not a url".to_string()),
            deploy_key: None,
        });
        match factory.client().unwrap_err() {
            ConfigurationError::InvalidBackendUrl { url, .. } => assert_eq!(url, "not a url"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_base_url_is_rejected() {
        let factory = BackendFactory::new(BackendConfig {
            url: Some("mailto:ops@example.com".to_string()),
            deploy_key: None,
        });
        match factory.client().unwrap_err() {
            ConfigurationError::InvalidBackendUrl { reason, .. } => {
                assert_eq!(reason, "not a base url");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn concurrent_first_calls_observe_one_handle() {
        let factory = Arc::new(configured());
        let workers = 8;
        let barrier = Arc::new(Barrier::new(workers));

        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let factory = Arc::clone(&factory);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    factory.client().unwrap()
                })
            })
            .collect();

        let clients: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for client in &clients[1..] {
            assert!(Arc::ptr_eq(&clients[0], client));
        }
    }
}
