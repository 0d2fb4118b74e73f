use reqwest::Client;
use tracing::{info, warn};

use crate::api::{GloProvider, HttpProvider, ResultProvider};
use crate::config::Config;
use crate::error::SourceError;
use crate::types::{DateSelector, PrizeTierSet};

/// Walks an ordered chain of result sources; the first usable draw wins.
pub struct ResultsFetcher {
    providers: Vec<Box<dyn ResultProvider>>,
}

impl ResultsFetcher {
    pub fn new(providers: Vec<Box<dyn ResultProvider>>) -> Self {
        Self { providers }
    }

    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;

        let mut providers: Vec<Box<dyn ResultProvider>> = config
            .endpoints
            .iter()
            .map(|endpoint| {
                Box::new(HttpProvider::new(client.clone(), endpoint.clone()))
                    as Box<dyn ResultProvider>
            })
            .collect();
        if let Some(url) = &config.official_url {
            providers.push(Box::new(GloProvider::new(client, url.clone())));
        }

        Ok(Self::new(providers))
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Tries every source once, in order, and returns the first normalized
    /// draw. Failures never escape: each one becomes a status line passed to
    /// `on_status` before the next source is tried.
    pub async fn fetch_results(
        &self,
        selector: &DateSelector,
        on_status: &mut (dyn FnMut(String) + Send),
    ) -> Option<PrizeTierSet> {
        for provider in &self.providers {
            match provider.fetch(selector).await {
                Ok(tiers) => {
                    info!(provider = provider.name(), %selector, date = %tiers.date, "draw results fetched");
                    return Some(tiers);
                }
                Err(err) => {
                    warn!(provider = provider.name(), %selector, error = %err, "result source failed");
                    on_status(describe_failure(provider.name(), &err));
                }
            }
        }

        warn!(%selector, "all result sources exhausted");
        None
    }
}

pub fn describe_failure(provider: &str, err: &SourceError) -> String {
    match err {
        SourceError::Status { status, .. } => format!("API {provider} responded {status}"),
        SourceError::Shape => format!("API {provider} returned data in an unexpected shape"),
        other => format!("API {provider} failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_full_chain() {
        let fetcher = ResultsFetcher::from_config(&Config::default()).unwrap();
        assert_eq!(fetcher.provider_names(), ["rayriffy", "gh-raw", "fallback"]);

        let config = Config {
            official_url: Some(crate::config::GLO_RESULT_URL.to_string()),
            ..Config::default()
        };
        let fetcher = ResultsFetcher::from_config(&config).unwrap();
        assert_eq!(fetcher.provider_names().last(), Some(&"glo"));
    }

    #[test]
    fn failure_messages_name_the_source() {
        let status = SourceError::Status {
            status: 500,
            url: "https://example.com".into(),
        };
        assert_eq!(describe_failure("rayriffy", &status), "API rayriffy responded 500");
        assert_eq!(
            describe_failure("gh-raw", &SourceError::Shape),
            "API gh-raw returned data in an unexpected shape"
        );
        let unsupported = SourceError::Unsupported {
            selector: "latest".into(),
        };
        assert!(describe_failure("gh-raw", &unsupported).starts_with("API gh-raw failed:"));
    }

    #[tokio::test]
    async fn empty_chain_yields_nothing() {
        let fetcher = ResultsFetcher::new(Vec::new());
        let mut statuses = Vec::new();
        let result = fetcher
            .fetch_results(&DateSelector::Latest, &mut |m: String| statuses.push(m))
            .await;
        assert!(result.is_none());
        assert!(statuses.is_empty());
    }
}
