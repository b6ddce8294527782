use crate::error::{PortfolioError, Result};
use crate::sources::types::ModelSummary;
use crate::sources::ModelSource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Model record as returned by `GET /api/models?author={author}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelRecord {
    pub id: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pipeline_tag: Option<String>,
    #[serde(default)]
    pub library_name: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ModelRecord> for ModelSummary {
    fn from(m: ModelRecord) -> Self {
        Self {
            id: m.id,
            likes: m.likes,
            downloads: m.downloads,
            tags: m.tags,
            pipeline: m.pipeline_tag,
            library: m.library_name,
            created_at: m.created_at,
        }
    }
}

#[derive(Clone)]
pub struct HuggingFaceClient {
    http: reqwest::Client,
    hub_url: String,
    author: String,
}

impl HuggingFaceClient {
    pub fn new(http: reqwest::Client, hub_url: &str, author: &str) -> Self {
        Self {
            http,
            hub_url: hub_url.trim_end_matches('/').to_string(),
            author: author.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/models", self.hub_url)
    }
}

#[async_trait]
impl ModelSource for HuggingFaceClient {
    async fn fetch_models(&self) -> Result<Vec<ModelSummary>> {
        let url = self.endpoint();
        tracing::debug!(%url, author = %self.author, "fetching models");

        let response = self
            .http
            .get(&url)
            .query(&[("author", self.author.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PortfolioError::Status {
                source_name: "huggingface",
                status: response.status().as_u16(),
            });
        }

        let records: Vec<ModelRecord> = response.json().await?;
        Ok(records.into_iter().map(ModelSummary::from).collect())
    }
}
