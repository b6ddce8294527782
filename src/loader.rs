use crate::event::AppEvent;
use crate::sources::Sources;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs the portfolio fetches and reports back over the event channel.
///
/// In-flight tasks are aborted when a new load starts, on `cancel`, and
/// when the loader is dropped, so nothing reaches a torn-down view.
pub struct Loader {
    sources: Sources,
    handles: Vec<JoinHandle<()>>,
}

impl Loader {
    pub fn new(sources: Sources) -> Self {
        Self {
            sources,
            handles: Vec::new(),
        }
    }

    pub fn spawn(&mut self, generation: u64, tx: mpsc::UnboundedSender<AppEvent>) {
        self.cancel();

        match &self.sources {
            Sources::Direct { repos, models } => {
                let repos = Arc::clone(repos);
                let repo_tx = tx.clone();
                self.handles.push(tokio::spawn(async move {
                    let result = repos.fetch_repos().await.map_err(|e| e.to_string());
                    let _ = repo_tx.send(AppEvent::ReposLoaded { generation, result });
                }));

                let models = Arc::clone(models);
                self.handles.push(tokio::spawn(async move {
                    let result = models.fetch_models().await.map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::ModelsLoaded { generation, result });
                }));
            }
            Sources::Proxy(bundle) => {
                let bundle = Arc::clone(bundle);
                self.handles.push(tokio::spawn(async move {
                    let (repos, models) = match bundle.fetch_bundle().await {
                        Ok(b) => (Ok(b.repos), Ok(b.models)),
                        Err(e) => {
                            let msg = e.to_string();
                            (Err(msg.clone()), Err(msg))
                        }
                    };
                    let _ = tx.send(AppEvent::ReposLoaded {
                        generation,
                        result: repos,
                    });
                    let _ = tx.send(AppEvent::ModelsLoaded {
                        generation,
                        result: models,
                    });
                }));
            }
        }
    }

    pub fn cancel(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn in_flight(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.cancel();
    }
}
