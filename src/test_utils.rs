#![cfg(test)]

use crate::error::{PortfolioError, Result};
use crate::sources::types::*;
use crate::sources::{BundleSource, ModelSource, RepoSource, Sources};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub fn make_repo(name: &str, stars: u32) -> RepoSummary {
    RepoSummary {
        id: u64::from(stars) + 1,
        name: name.to_string(),
        description: Some(format!("{name} description")),
        stars,
        forks: stars / 2,
        language: Some("Rust".to_string()),
        url: format!("https://github.com/test/{name}"),
        updated_at: Some(chrono::Utc::now() - chrono::Duration::days(3)),
    }
}

pub fn make_model(id: &str, downloads: u64) -> ModelSummary {
    ModelSummary {
        id: id.to_string(),
        likes: downloads / 100,
        downloads,
        tags: vec!["transformers".to_string()],
        pipeline: Some("text-generation".to_string()),
        library: Some("transformers".to_string()),
        created_at: None,
    }
}

/// Canned outcome for a fake source.
#[derive(Clone)]
pub enum Canned<T> {
    Ok(T),
    Status(u16),
    Pending,
}

impl<T: Clone> Canned<T> {
    async fn resolve(&self, source_name: &'static str) -> Result<T> {
        match self {
            Canned::Ok(v) => Ok(v.clone()),
            Canned::Status(status) => Err(PortfolioError::Status {
                source_name,
                status: *status,
            }),
            Canned::Pending => std::future::pending().await,
        }
    }
}

pub struct FakeRepos(pub Canned<Vec<RepoSummary>>);

impl FakeRepos {
    pub fn ok(repos: Vec<RepoSummary>) -> Self {
        Self(Canned::Ok(repos))
    }
    pub fn failing(status: u16) -> Self {
        Self(Canned::Status(status))
    }
    pub fn pending() -> Self {
        Self(Canned::Pending)
    }
}

#[async_trait]
impl RepoSource for FakeRepos {
    async fn fetch_repos(&self) -> Result<Vec<RepoSummary>> {
        self.0.resolve("github").await
    }
}

pub struct FakeModels(pub Canned<Vec<ModelSummary>>);

impl FakeModels {
    pub fn ok(models: Vec<ModelSummary>) -> Self {
        Self(Canned::Ok(models))
    }
    pub fn pending() -> Self {
        Self(Canned::Pending)
    }
}

#[async_trait]
impl ModelSource for FakeModels {
    async fn fetch_models(&self) -> Result<Vec<ModelSummary>> {
        self.0.resolve("huggingface").await
    }
}

pub struct FakeBundle(pub Canned<Bundle>);

impl FakeBundle {
    pub fn ok(repos: Vec<RepoSummary>, models: Vec<ModelSummary>) -> Self {
        Self(Canned::Ok(Bundle { repos, models }))
    }
    pub fn failing(status: u16) -> Self {
        Self(Canned::Status(status))
    }
}

#[async_trait]
impl BundleSource for FakeBundle {
    async fn fetch_bundle(&self) -> Result<Bundle> {
        self.0.resolve("proxy").await
    }
}

pub fn direct_sources(repos: FakeRepos, models: FakeModels) -> Sources {
    Sources::Direct {
        repos: Arc::new(repos),
        models: Arc::new(models),
    }
}

pub fn proxy_sources(bundle: FakeBundle) -> Sources {
    Sources::Proxy(Arc::new(bundle))
}

/// Minimal HTTP/1.1 server on a random local port answering every request
/// with one canned response. Request lines are recorded for assertions.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let handle = tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut raw = Vec::new();
                let mut chunk = [0u8; 1024];
                while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => raw.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&raw);
                if let Some(line) = head.lines().next() {
                    seen.lock().unwrap().push(line.to_string());
                }

                let reason = if status < 400 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\n\
                     content-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
