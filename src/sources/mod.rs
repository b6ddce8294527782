pub mod github;
pub mod huggingface;
pub mod proxy;
pub mod types;

use crate::config::{Config, DataSourceMode};
use crate::error::{PortfolioError, Result};
use async_trait::async_trait;
use github::GitHubClient;
use huggingface::HuggingFaceClient;
use proxy::ProxyClient;
use std::sync::Arc;
use std::time::Duration;
use types::{Bundle, ModelSummary, RepoSummary};

const USER_AGENT: &str = concat!("termfolio/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn fetch_repos(&self) -> Result<Vec<RepoSummary>>;
}

#[async_trait]
pub trait ModelSource: Send + Sync {
    async fn fetch_models(&self) -> Result<Vec<ModelSummary>>;
}

#[async_trait]
pub trait BundleSource: Send + Sync {
    async fn fetch_bundle(&self) -> Result<Bundle>;
}

/// Where portfolio data comes from: two public APIs, or one aggregating endpoint.
#[derive(Clone)]
pub enum Sources {
    Direct {
        repos: Arc<dyn RepoSource>,
        models: Arc<dyn ModelSource>,
    },
    Proxy(Arc<dyn BundleSource>),
}

impl Sources {
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs.max(1));
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        match config.data_source {
            DataSourceMode::Direct => {
                let github = GitHubClient::new(
                    &config.github_api_url,
                    config.github_token.as_deref(),
                    &config.github_user,
                    timeout,
                )?;
                let hf = HuggingFaceClient::new(
                    http,
                    &config.huggingface_url,
                    &config.huggingface_author,
                );
                Ok(Sources::Direct {
                    repos: Arc::new(github),
                    models: Arc::new(hf),
                })
            }
            DataSourceMode::Proxy => {
                let url = config
                    .proxy_url
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .ok_or_else(|| {
                        PortfolioError::Config("data_source = \"proxy\" requires proxy_url".into())
                    })?;
                Ok(Sources::Proxy(Arc::new(ProxyClient::new(http, url))))
            }
        }
    }

    pub fn mode(&self) -> DataSourceMode {
        match self {
            Sources::Direct { .. } => DataSourceMode::Direct,
            Sources::Proxy(_) => DataSourceMode::Proxy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_mode_without_url_is_rejected() {
        let config = Config {
            data_source: DataSourceMode::Proxy,
            proxy_url: None,
            ..Config::default()
        };
        let err = Sources::from_config(&config).err().unwrap();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn proxy_mode_with_url_builds_proxy_source() {
        let config = Config {
            data_source: DataSourceMode::Proxy,
            proxy_url: Some("http://localhost:8787/api/portfolio".to_string()),
            ..Config::default()
        };
        let sources = Sources::from_config(&config).unwrap();
        assert_eq!(sources.mode(), DataSourceMode::Proxy);
    }

    #[tokio::test]
    async fn direct_mode_builds_both_clients() {
        let sources = Sources::from_config(&Config::default()).unwrap();
        assert_eq!(sources.mode(), DataSourceMode::Direct);
    }
}
