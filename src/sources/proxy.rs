use crate::error::{PortfolioError, Result};
use crate::sources::github::RepoRecord;
use crate::sources::huggingface::ModelRecord;
use crate::sources::types::{Bundle, ModelSummary, RepoSummary};
use crate::sources::BundleSource;
use async_trait::async_trait;
use serde::Deserialize;

/// Body served by the aggregating endpoint. Records keep the upstream shapes.
#[derive(Debug, Deserialize)]
pub struct BundleRecord {
    #[serde(default)]
    pub github_repos: Vec<RepoRecord>,
    #[serde(default)]
    pub huggingface_models: Vec<ModelRecord>,
}

impl From<BundleRecord> for Bundle {
    fn from(b: BundleRecord) -> Self {
        Self {
            repos: b.github_repos.into_iter().map(RepoSummary::from).collect(),
            models: b
                .huggingface_models
                .into_iter()
                .map(ModelSummary::from)
                .collect(),
        }
    }
}

#[derive(Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    url: String,
}

impl ProxyClient {
    pub fn new(http: reqwest::Client, url: &str) -> Self {
        Self {
            http,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl BundleSource for ProxyClient {
    async fn fetch_bundle(&self) -> Result<Bundle> {
        tracing::debug!(url = %self.url, "fetching portfolio bundle");

        let response = self.http.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(PortfolioError::Status {
                source_name: "proxy",
                status: response.status().as_u16(),
            });
        }

        let record: BundleRecord = response.json().await?;
        Ok(record.into())
    }
}
