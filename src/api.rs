//! Result sources. Each one knows how to reach a single upstream and hands
//! back a normalized [`PrizeTierSet`], or says why it could not.

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Response, Url};
use serde_json::Value;
use tracing::debug;

use crate::config::{EndpointConfig, Via};
use crate::error::SourceError;
use crate::normalize::normalize;
use crate::types::{DateSelector, PrizeTierSet};
use crate::utils::glo_request_for;

#[async_trait]
pub trait ResultProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self, selector: &DateSelector) -> Result<PrizeTierSet, SourceError>;
}

/// GET source described by an [`EndpointConfig`].
pub struct HttpProvider {
    client: Client,
    endpoint: EndpointConfig,
}

impl HttpProvider {
    pub fn new(client: Client, endpoint: EndpointConfig) -> Self {
        Self { client, endpoint }
    }

    pub fn request_url(&self, selector: &DateSelector) -> Result<String, SourceError> {
        let target = match selector {
            DateSelector::Draw(date) => self.endpoint.url.replace("{date}", &date.to_string()),
            DateSelector::Latest => {
                self.endpoint
                    .latest_url
                    .clone()
                    .ok_or_else(|| SourceError::Unsupported {
                        selector: selector.to_string(),
                    })?
            }
        };

        match &self.endpoint.via {
            Via::Direct => Ok(target),
            Via::TextProxy { prefix } => Ok(format!("{prefix}{}", strip_scheme(&target))),
            Via::CorsProxy { base } => Url::parse_with_params(base, &[("url", target.as_str())])
                .map(String::from)
                .map_err(|e| SourceError::InvalidUrl {
                    url: base.clone(),
                    reason: e.to_string(),
                }),
        }
    }
}

#[async_trait]
impl ResultProvider for HttpProvider {
    fn name(&self) -> &str {
        &self.endpoint.name
    }

    async fn fetch(&self, selector: &DateSelector) -> Result<PrizeTierSet, SourceError> {
        let url = self.request_url(selector)?;
        debug!(provider = %self.endpoint.name, %url, "requesting draw results");

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let body = read_json(response, &url).await?;
        normalize(&body).ok_or(SourceError::Shape)
    }
}

/// The GLO checking endpoint, queried by day, month and year.
pub struct GloProvider {
    client: Client,
    url: String,
}

impl GloProvider {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ResultProvider for GloProvider {
    fn name(&self) -> &str {
        "glo"
    }

    async fn fetch(&self, selector: &DateSelector) -> Result<PrizeTierSet, SourceError> {
        let DateSelector::Draw(date) = selector else {
            return Err(SourceError::Unsupported {
                selector: selector.to_string(),
            });
        };
        debug!(url = %self.url, %date, "requesting official draw results");

        let response = self
            .client
            .post(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .json(&glo_request_for(date))
            .send()
            .await?;

        let body = read_json(response, &self.url).await?;
        if body.get("status").and_then(Value::as_bool) == Some(false) {
            return Err(SourceError::Shape);
        }
        normalize(&body).ok_or(SourceError::Shape)
    }
}

async fn read_json(response: Response, url: &str) -> Result<Value, SourceError> {
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let text = response.text().await?;
    parse_body(&text)
}

/// Parses a response body, retrying once without a leading byte-order mark.
pub fn parse_body(text: &str) -> Result<Value, SourceError> {
    serde_json::from_str(text).or_else(|_| {
        let stripped = text.strip_prefix('\u{feff}').unwrap_or(text);
        serde_json::from_str(stripped).map_err(|source| SourceError::Body { source })
    })
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
