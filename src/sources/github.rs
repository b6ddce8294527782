use crate::error::{PortfolioError, Result};
use crate::sources::types::RepoSummary;
use crate::sources::RepoSource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::Deserialize;
use std::time::Duration;

/// Repository record as returned by `GET /users/{user}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RepoRecord> for RepoSummary {
    fn from(r: RepoRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            stars: r.stargazers_count,
            forks: r.forks_count,
            language: r.language,
            url: r.html_url,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
    user: String,
    timeout: Duration,
}

impl GitHubClient {
    pub fn new(api_url: &str, token: Option<&str>, user: &str, timeout: Duration) -> Result<Self> {
        let mut builder = Octocrab::builder()
            .base_uri(api_url)
            .map_err(|e| PortfolioError::GitHub(e.to_string()))?;
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.personal_token(token.to_string());
        }
        let octo = builder
            .build()
            .map_err(|e| PortfolioError::GitHub(e.to_string()))?;

        Ok(Self {
            octo,
            user: user.to_string(),
            timeout,
        })
    }

    fn route(&self) -> String {
        format!("/users/{}/repos", self.user)
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn fetch_repos(&self) -> Result<Vec<RepoSummary>> {
        let route = self.route();
        tracing::debug!(%route, "fetching repositories");

        let request = self.octo.get::<Vec<RepoRecord>, _, ()>(&route, None);
        let records = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| PortfolioError::GitHub(format!("{route} timed out")))?
            .map_err(|e| PortfolioError::GitHub(e.to_string()))?;

        Ok(records.into_iter().map(RepoSummary::from).collect())
    }
}
