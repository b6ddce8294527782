use crate::sources::types::{ModelSummary, RepoSummary};
use crossterm::event::KeyEvent;

/// Everything the main loop reacts to. Fetch results carry the load
/// generation they were started under so late arrivals can be dropped.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    ReposLoaded {
        generation: u64,
        result: Result<Vec<RepoSummary>, String>,
    },
    ModelsLoaded {
        generation: u64,
        result: Result<Vec<ModelSummary>, String>,
    },
}
