use crate::content::{self, Assistant, ContactLink, Profile, StaticProject};
use crate::sources::types::RepoSummary;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceMode {
    /// Public GitHub and Hugging Face APIs, fetched independently.
    Direct,
    /// One aggregating endpoint serving both collections.
    Proxy,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_source: DataSourceMode,
    pub proxy_url: Option<String>,
    pub github_user: String,
    pub huggingface_author: String,
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub huggingface_url: String,
    pub top_repos: usize,
    pub top_models: usize,
    pub request_timeout_secs: u64,
    pub notify_errors: bool,
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub fallback_repo: Option<RepoSummary>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default = "content::default_projects")]
    pub projects: Vec<StaticProject>,
    #[serde(default = "default_contact_blurb")]
    pub contact_blurb: String,
    #[serde(default)]
    pub contact: Vec<ContactLink>,
    #[serde(default)]
    pub assistant: Assistant,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_source", &self.data_source)
            .field("proxy_url", &self.proxy_url)
            .field("github_user", &self.github_user)
            .field("huggingface_author", &self.huggingface_author)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("github_api_url", &self.github_api_url)
            .field("huggingface_url", &self.huggingface_url)
            .field("top_repos", &self.top_repos)
            .field("top_models", &self.top_models)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("notify_errors", &self.notify_errors)
            .field("log_file", &self.log_file)
            .field("projects", &self.projects.len())
            .field("assistant", &self.assistant.enabled)
            .finish()
    }
}

const DEFAULT_USER: &str = "achariton";

fn default_contact_blurb() -> String {
    "Let's build something amazing together!".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: DataSourceMode::Direct,
            proxy_url: None,
            github_user: DEFAULT_USER.to_string(),
            huggingface_author: DEFAULT_USER.to_string(),
            github_token: None,
            github_api_url: "https://api.github.com".to_string(),
            huggingface_url: "https://huggingface.co".to_string(),
            top_repos: 3,
            top_models: 2,
            request_timeout_secs: 10,
            notify_errors: true,
            log_file: None,
            fallback_repo: None,
            profile: Profile::default(),
            projects: content::default_projects(),
            contact_blurb: default_contact_blurb(),
            contact: Vec::new(),
            assistant: Assistant::default(),
        }
    }
}

/// Command-line values that win over every other layer.
#[derive(Debug, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub data_source: Option<DataSourceMode>,
    pub github_user: Option<String>,
    pub huggingface_author: Option<String>,
    pub proxy_url: Option<String>,
}

impl Config {
    pub fn load(overrides: &Overrides) -> Self {
        match Self::figment(overrides).extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }

    pub fn figment(overrides: &Overrides) -> Figment {
        let config_file = overrides
            .config_file
            .clone()
            .unwrap_or_else(|| config_dir().join("termfolio").join("config.toml"));

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment
            .merge(Env::prefixed("TERMFOLIO_").split("__"))
            .merge(
                Env::raw()
                    .only(&["GITHUB_TOKEN"])
                    .map(|_| "github_token".into()),
            );

        if let Some(mode) = overrides.data_source {
            figment = figment.merge(Serialized::default("data_source", mode));
        }
        if let Some(ref user) = overrides.github_user {
            figment = figment.merge(Serialized::default("github_user", user));
        }
        if let Some(ref author) = overrides.huggingface_author {
            figment = figment.merge(Serialized::default("huggingface_author", author));
        }
        if let Some(ref url) = overrides.proxy_url {
            figment = figment.merge(Serialized::default("proxy_url", url));
        }

        figment
    }

    pub fn resolved_contact(&self) -> Vec<ContactLink> {
        if self.contact.is_empty() {
            content::default_contact(&self.github_user)
        } else {
            self.contact.clone()
        }
    }

    /// The single entry shown when the repository fetch fails.
    pub fn resolved_fallback_repo(&self) -> RepoSummary {
        self.fallback_repo.clone().unwrap_or_else(|| RepoSummary {
            id: 0,
            name: format!("{}'s repositories", self.github_user),
            description: Some("Browse all public projects on GitHub".to_string()),
            stars: 0,
            forks: 0,
            language: None,
            url: format!("https://github.com/{}", self.github_user),
            updated_at: None,
        })
    }

    pub fn resolved_log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| config_dir().join("termfolio").join("termfolio.log"))
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
