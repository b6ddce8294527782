use crate::content::StaticProject;
use crate::sources::types::{ModelSummary, RepoSummary};
use crate::ui::{format_count, format_time_ago};

/// One selectable row or card, already reduced to display text.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub title: String,
    pub body: String,
    pub language: Option<String>,
    pub stats: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupState {
    /// Fetch in flight; render this many placeholders.
    Loading(usize),
    Ready(Vec<Entry>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub heading: String,
    pub state: GroupState,
    pub empty_note: &'static str,
}

impl Group {
    pub fn entries(&self) -> &[Entry] {
        match &self.state {
            GroupState::Ready(entries) => entries,
            GroupState::Loading(_) => &[],
        }
    }
}

/// Entries across groups in selection order.
pub fn flatten(groups: &[Group]) -> Vec<&Entry> {
    groups.iter().flat_map(|g| g.entries()).collect()
}

fn non_empty_url(url: &str) -> Option<String> {
    let url = url.trim();
    (!url.is_empty() && url != "#").then(|| url.to_string())
}

fn repo_stats(stars: u32, forks: u32) -> String {
    format!("\u{2605} {stars}  \u{2442} {forks}")
}

pub fn from_static(p: &StaticProject) -> Entry {
    let stats = match (p.stars, p.forks) {
        (None, None) => String::new(),
        (stars, forks) => repo_stats(stars.unwrap_or(0), forks.unwrap_or(0)),
    };
    Entry {
        title: p.name.clone(),
        body: p.description.clone(),
        language: p.language.clone(),
        stats,
        url: p.url.as_deref().and_then(non_empty_url),
    }
}

pub fn from_repo_card(r: &RepoSummary) -> Entry {
    Entry {
        title: r.name.clone(),
        body: r.description_or_placeholder().to_string(),
        language: Some(r.language_or_placeholder().to_string()),
        stats: repo_stats(r.stars, r.forks),
        url: non_empty_url(&r.url),
    }
}

pub fn from_repo_activity(r: &RepoSummary) -> Entry {
    let mut stats = format!("\u{2605} {}", r.stars);
    if let Some(ref t) = r.updated_at {
        stats.push_str(&format!(" \u{b7} updated {}", format_time_ago(t)));
    }
    Entry {
        title: r.name.clone(),
        body: r.description_or_placeholder().to_string(),
        language: Some(r.language_or_placeholder().to_string()),
        stats,
        url: non_empty_url(&r.url),
    }
}

pub fn from_model(m: &ModelSummary, hub_url: &str) -> Entry {
    let mut body = format!("{} \u{b7} {}", m.pipeline_label(), m.library_or_placeholder());
    for tag in m.topic_tags(2) {
        body.push_str(&format!(" \u{b7} #{tag}"));
    }
    let mut stats = format!(
        "\u{2193} {} downloads  \u{2665} {}",
        format_count(m.downloads),
        format_count(m.likes)
    );
    if let Some(ref t) = m.created_at {
        stats.push_str(&format!(" \u{b7} added {}", format_time_ago(t)));
    }
    Entry {
        title: m.display_name().to_string(),
        body,
        language: None,
        stats,
        url: Some(m.page_url(hub_url)),
    }
}
