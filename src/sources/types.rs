use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NO_DESCRIPTION: &str = "No description provided";
pub const UNKNOWN: &str = "Unknown";

/// A public repository as shown in the projects grid and the activity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub forks: u32,
    #[serde(default)]
    pub language: Option<String>,
    pub url: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RepoSummary {
    pub fn description_or_placeholder(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
    }

    pub fn language_or_placeholder(&self) -> &str {
        non_empty(self.language.as_deref()).unwrap_or(UNKNOWN)
    }
}

/// A model published on the hub. `id` is `namespace/name`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelSummary {
    pub id: String,
    pub likes: u64,
    pub downloads: u64,
    pub tags: Vec<String>,
    pub pipeline: Option<String>,
    pub library: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ModelSummary {
    pub fn display_name(&self) -> &str {
        match self.id.split_once('/') {
            Some((_, name)) => name,
            None => &self.id,
        }
    }

    /// Tags worth showing next to the pipeline and library, skipping
    /// bookkeeping entries such as `license:mit` or `region:us`.
    pub fn topic_tags(&self, n: usize) -> Vec<&str> {
        let library = self.library.as_deref().unwrap_or_default();
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|t| !t.contains(':') && *t != library)
            .take(n)
            .collect()
    }

    pub fn pipeline_label(&self) -> &str {
        match self.pipeline.as_deref() {
            Some("text-generation") | Some("text2text-generation") => "LLM",
            Some("feature-extraction") | Some("sentence-similarity") => "Embedding",
            Some("text-to-image") | Some("image-to-image") => "Image Gen",
            Some("image-classification") | Some("object-detection") => "Image Class",
            Some("automatic-speech-recognition") => "Audio STT",
            Some("text-to-audio") | Some("text-to-speech") => "Audio Gen",
            Some("text-classification") => "Classifier",
            other => non_empty(other).unwrap_or(UNKNOWN),
        }
    }

    pub fn library_or_placeholder(&self) -> &str {
        non_empty(self.library.as_deref()).unwrap_or(UNKNOWN)
    }

    pub fn page_url(&self, hub_url: &str) -> String {
        format!("{}/{}", hub_url.trim_end_matches('/'), self.id)
    }
}

/// Both collections as served by an aggregating endpoint.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    pub repos: Vec<RepoSummary>,
    pub models: Vec<ModelSummary>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}
