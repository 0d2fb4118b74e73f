use anyhow::Result;
use serde::Deserialize;
use std::env;

pub const GLO_RESULT_URL: &str = "https://www.glo.or.th/api/checking/getLotteryResult";

const DEFAULT_USER_AGENT: &str = concat!("lotto-check/", env!("CARGO_PKG_VERSION"));
const RAYRIFFY_DRAW_URL: &str = "https://lotto.api.rayriffy.com/draw/{date}";
const RAYRIFFY_LATEST_URL: &str = "https://lotto.api.rayriffy.com/latest";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub user_agent: String,
    /// Result sources in priority order.
    pub endpoints: Vec<EndpointConfig>,
    /// Official GLO checking endpoint, tried after `endpoints` when set.
    #[serde(default)]
    pub official_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EndpointConfig {
    pub name: String,
    /// Draw URL template; `{date}` is replaced with `YYYY-MM-DD`.
    pub url: String,
    #[serde(default)]
    pub latest_url: Option<String>,
    #[serde(default)]
    pub via: Via,
}

/// How a source URL is reached.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Via {
    #[default]
    Direct,
    /// Text proxy taking the scheme-less target appended to `prefix`.
    TextProxy { prefix: String },
    /// CORS proxy taking the target as its `url` query parameter.
    CorsProxy { base: String },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            endpoints: vec![
                EndpointConfig {
                    name: "rayriffy".to_string(),
                    url: RAYRIFFY_DRAW_URL.to_string(),
                    latest_url: Some(RAYRIFFY_LATEST_URL.to_string()),
                    via: Via::Direct,
                },
                EndpointConfig {
                    name: "gh-raw".to_string(),
                    url: "https://raw.githubusercontent.com/rayriffy/thai-lotto-results/master/{date}.json"
                        .to_string(),
                    latest_url: None,
                    via: Via::TextProxy {
                        prefix: "https://r.jina.ai/http/".to_string(),
                    },
                },
                EndpointConfig {
                    name: "fallback".to_string(),
                    url: RAYRIFFY_DRAW_URL.to_string(),
                    latest_url: Some(RAYRIFFY_LATEST_URL.to_string()),
                    via: Via::CorsProxy {
                        base: "https://api.allorigins.win/raw".to_string(),
                    },
                },
            ],
            official_url: None,
        }
    }
}

pub fn load() -> Result<Config> {
    let mut config = Config::default();

    if let Ok(user_agent) = env::var("LOTTO_CHECK_USER_AGENT") {
        config.user_agent = user_agent;
    }

    let official = env::var("LOTTO_CHECK_OFFICIAL").unwrap_or_default();
    if matches!(official.trim(), "1" | "true" | "yes") {
        config.official_url = Some(GLO_RESULT_URL.to_string());
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chain_order() {
        let config = Config::default();
        let names: Vec<&str> = config.endpoints.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["rayriffy", "gh-raw", "fallback"]);
        assert!(config.official_url.is_none());
        assert!(matches!(config.endpoints[1].via, Via::TextProxy { .. }));
        assert!(config.endpoints[1].latest_url.is_none());
    }

    #[test]
    fn endpoint_deserializes_with_tagged_transport() {
        let endpoint: EndpointConfig = serde_json::from_value(serde_json::json!({
            "name": "mirror",
            "url": "https://mirror.example/{date}",
            "via": {"kind": "cors_proxy", "base": "https://proxy.example/raw"}
        }))
        .unwrap();
        assert_eq!(endpoint.latest_url, None);
        assert_eq!(
            endpoint.via,
            Via::CorsProxy {
                base: "https://proxy.example/raw".to_string()
            }
        );

        let direct: EndpointConfig = serde_json::from_value(serde_json::json!({
            "name": "direct",
            "url": "https://direct.example/{date}"
        }))
        .unwrap();
        assert_eq!(direct.via, Via::Direct);
    }
}
