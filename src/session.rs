use crate::app::{App, Section};
use crate::config::config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the reader left off, restored on next launch.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionState {
    pub section: String,
    pub selected: usize,
}

pub fn session_path() -> PathBuf {
    config_dir().join("termfolio").join("session.toml")
}

pub fn save(app: &App, path: &Path) {
    let state = SessionState {
        section: app.section.label().to_string(),
        selected: app.selected,
    };

    match toml::to_string_pretty(&state) {
        Ok(content) => {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(e) = std::fs::write(path, content) {
                tracing::warn!(path = %path.display(), error = %e, "could not save session");
            }
        }
        Err(e) => tracing::warn!(error = %e, "could not encode session"),
    }
}

pub fn restore(app: &mut App, path: &Path) {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };
    let state: SessionState = match toml::from_str(&content) {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unreadable session");
            return;
        }
    };

    let Some(section) = Section::ALL
        .iter()
        .copied()
        .find(|s| s.label() == state.section)
    else {
        return;
    };
    app.go_to(section);
    // Feeds are still loading, so only static sections can honor the saved row.
    if state.selected < app.item_count() {
        app.selected = state.selected;
    }
}
