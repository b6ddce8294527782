use crate::config::{Config, DataSourceMode};
use crate::event::AppEvent;
use crate::feed::Feed;
use crate::sources::types::{ModelSummary, RepoSummary};
use crate::ui::{
    about::About,
    assistant_dialog::{AssistantDialog, DialogButton},
    contact::Contact,
    entry::{self, Entry, Group, GroupState},
    header_bar::HeaderBar,
    hero::Hero,
    input::{self, Action, InputMode},
    integrations::Integrations,
    nav_menu::NavMenu,
    projects::Projects,
    status_bar::{FeedStatus, StatusBar},
    toast::{Notification, NotifyLevel, Toast},
};
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Integrations,
    Contact,
}

impl Section {
    pub const ALL: &[Section] = &[
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Integrations,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Integrations => "integrations",
            Section::Contact => "contact",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Projects => 2,
            Section::Integrations => 3,
            Section::Contact => 4,
        }
    }

    pub fn from_index(i: usize) -> Self {
        Section::ALL[i % Section::ALL.len()]
    }
}

/// Work the shell has to do on the app's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenUrl(String),
    Reload,
}

const INTEGRATION_CAPTIONS: &[&str] = &[
    "\u{21bb} Latest public repositories, auto-synced with the GitHub API",
    "Published ML models and datasets",
];

pub struct App {
    pub config: Config,

    pub section: Section,
    pub selected: usize,
    pub show_menu: bool,
    pub menu_selected: usize,
    pub show_assistant: bool,
    pub dialog_focus: DialogButton,

    pub repos: Feed<RepoSummary>,
    pub models: Feed<ModelSummary>,
    pub generation: u64,
    pub last_sync: String,

    pub notification: Option<Notification>,
    failure_reported: Option<u64>,
    pub tick: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            section: Section::Home,
            selected: 0,
            show_menu: false,
            menu_selected: 0,
            show_assistant: false,
            dialog_focus: DialogButton::Open,
            repos: Feed::default(),
            models: Feed::default(),
            generation: 0,
            last_sync: "never".to_string(),
            notification: None,
            failure_reported: None,
            tick: 0,
            should_quit: false,
        }
    }

    /// Marks both feeds loading and returns the generation new fetches must carry.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.repos.begin();
        self.models.begin();
        self.clamp_selection();
        self.generation
    }

    pub fn notify(&mut self, level: NotifyLevel, message: impl Into<String>) {
        self.notification = Some(Notification::new(level, message));
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Option<Effect> {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.input_mode());
                self.handle_action(action)
            }
            AppEvent::Resize => None,
            AppEvent::Tick => {
                self.tick = self.tick.wrapping_add(1);
                if self
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.expired(Instant::now()))
                {
                    self.notification = None;
                }
                None
            }
            AppEvent::ReposLoaded { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "dropping stale repository result");
                    return None;
                }
                self.settle_repos(result);
                None
            }
            AppEvent::ModelsLoaded { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "dropping stale model result");
                    return None;
                }
                self.settle_models(result);
                None
            }
        }
    }

    fn settle_repos(&mut self, result: Result<Vec<RepoSummary>, String>) {
        match &result {
            Ok(repos) => tracing::info!(count = repos.len(), "repositories loaded"),
            Err(e) => {
                tracing::warn!(error = %e, "repository fetch failed, showing fallback");
                self.report_failure("GitHub");
            }
        }
        let fallback = vec![self.config.resolved_fallback_repo()];
        self.repos
            .settle(result, self.config.top_repos, |r| r.stars, fallback);
        self.mark_synced();
    }

    fn settle_models(&mut self, result: Result<Vec<ModelSummary>, String>) {
        match &result {
            Ok(models) => tracing::info!(count = models.len(), "models loaded"),
            Err(e) => {
                tracing::warn!(error = %e, "model fetch failed, showing nothing");
                self.report_failure("Hugging Face");
            }
        }
        self.models
            .settle(result, self.config.top_models, |m| m.downloads, Vec::new());
        self.mark_synced();
    }

    fn report_failure(&mut self, upstream: &str) {
        if !self.config.notify_errors {
            return;
        }
        let source = match self.config.data_source {
            DataSourceMode::Direct => upstream,
            DataSourceMode::Proxy => {
                // one request feeds both collections, so one toast per load
                if self.failure_reported == Some(self.generation) {
                    return;
                }
                "Portfolio proxy"
            }
        };
        self.failure_reported = Some(self.generation);
        self.notify(
            NotifyLevel::Warn,
            format!("{source} is unreachable, showing fallback"),
        );
    }

    fn mark_synced(&mut self) {
        self.last_sync = chrono::Local::now().format("%H:%M").to_string();
        self.clamp_selection();
    }

    pub fn input_mode(&self) -> InputMode {
        if self.show_assistant {
            InputMode::Dialog
        } else if self.show_menu {
            InputMode::Menu
        } else {
            InputMode::Page
        }
    }

    fn handle_action(&mut self, action: Action) -> Option<Effect> {
        match self.input_mode() {
            InputMode::Dialog => self.handle_dialog_action(action),
            InputMode::Menu => self.handle_menu_action(action),
            InputMode::Page => self.handle_page_action(action),
        }
    }

    fn handle_dialog_action(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClosePopup => self.close_assistant(),
            Action::FocusLeft => self.dialog_focus = DialogButton::Open,
            Action::FocusRight => self.dialog_focus = DialogButton::Close,
            Action::Activate => {
                let effect = match self.dialog_focus {
                    DialogButton::Open => Some(Effect::OpenUrl(self.config.assistant.url.clone())),
                    DialogButton::Close => None,
                };
                self.close_assistant();
                return effect;
            }
            _ => {}
        }
        None
    }

    fn handle_menu_action(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClosePopup => self.show_menu = false,
            Action::ItemDown => {
                self.menu_selected = (self.menu_selected + 1).min(Section::ALL.len() - 1);
            }
            Action::ItemUp => self.menu_selected = self.menu_selected.saturating_sub(1),
            Action::Activate => {
                self.show_menu = false;
                self.go_to(Section::from_index(self.menu_selected));
            }
            Action::JumpSection(i) if i < Section::ALL.len() => {
                self.show_menu = false;
                self.go_to(Section::from_index(i));
            }
            _ => {}
        }
        None
    }

    fn handle_page_action(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextSection => self.go_to(Section::from_index(self.section.index() + 1)),
            Action::PrevSection => {
                let n = Section::ALL.len();
                self.go_to(Section::from_index(self.section.index() + n - 1));
            }
            Action::JumpSection(i) if i < Section::ALL.len() => self.go_to(Section::from_index(i)),
            Action::ItemDown => {
                let count = self.item_count();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            Action::ItemUp => self.selected = self.selected.saturating_sub(1),
            Action::Activate => return self.activate(),
            Action::ToggleMenu => {
                self.show_menu = true;
                self.menu_selected = self.section.index();
            }
            Action::OpenAssistant => self.open_assistant(),
            Action::Reload => return Some(Effect::Reload),
            _ => {}
        }
        None
    }

    pub fn go_to(&mut self, section: Section) {
        self.section = section;
        self.selected = 0;
    }

    pub fn open_assistant(&mut self) {
        if self.config.assistant.enabled {
            self.show_assistant = true;
            self.dialog_focus = DialogButton::Open;
        }
    }

    pub fn close_assistant(&mut self) {
        self.show_assistant = false;
    }

    fn activate(&mut self) -> Option<Effect> {
        match self.section {
            Section::Home => {
                match self.selected {
                    0 => self.go_to(Section::Projects),
                    _ => self.open_assistant(),
                }
                None
            }
            Section::About => None,
            Section::Projects | Section::Integrations => {
                let groups = self.groups();
                let url = entry::flatten(&groups)
                    .get(self.selected)
                    .and_then(|e| e.url.clone());
                url.map(Effect::OpenUrl)
            }
            Section::Contact => self
                .config
                .resolved_contact()
                .get(self.selected)
                .map(|l| Effect::OpenUrl(l.url.clone())),
        }
    }

    /// Number of selectable items in the current section.
    pub fn item_count(&self) -> usize {
        match self.section {
            Section::Home => 1 + usize::from(self.config.assistant.enabled),
            Section::About => 0,
            Section::Projects | Section::Integrations => entry::flatten(&self.groups()).len(),
            Section::Contact => self.config.resolved_contact().len(),
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.item_count();
        self.selected = if count == 0 {
            0
        } else {
            self.selected.min(count - 1)
        };
    }

    /// Display groups for the card and list sections.
    pub fn groups(&self) -> Vec<Group> {
        match self.section {
            Section::Projects => self.project_groups(),
            Section::Integrations => self.integration_groups(),
            _ => Vec::new(),
        }
    }

    fn feed_group<T>(
        heading: &str,
        feed: &Feed<T>,
        items: &[T],
        placeholders: usize,
        to_entry: impl Fn(&T) -> Entry,
        empty_note: &'static str,
    ) -> Group {
        let state = if feed.loading {
            GroupState::Loading(placeholders.max(1))
        } else {
            GroupState::Ready(items.iter().map(to_entry).collect())
        };
        Group {
            heading: heading.to_string(),
            state,
            empty_note,
        }
    }

    fn project_groups(&self) -> Vec<Group> {
        let mut groups = Vec::new();
        if !self.config.projects.is_empty() {
            groups.push(Group {
                heading: "Featured".to_string(),
                state: GroupState::Ready(self.config.projects.iter().map(entry::from_static).collect()),
                empty_note: "",
            });
        }
        groups.push(Self::feed_group(
            "Top repositories",
            &self.repos,
            &self.repos.top,
            self.config.top_repos,
            entry::from_repo_card,
            "No public repositories yet",
        ));
        let hub = self.config.huggingface_url.as_str();
        groups.push(Self::feed_group(
            "Top models",
            &self.models,
            &self.models.top,
            self.config.top_models,
            |m| entry::from_model(m, hub),
            "No published models yet",
        ));
        groups
    }

    fn integration_groups(&self) -> Vec<Group> {
        let hub = self.config.huggingface_url.as_str();
        vec![
            Self::feed_group(
                "GitHub Activity",
                &self.repos,
                &self.repos.all,
                self.config.top_repos,
                entry::from_repo_activity,
                "No public repositories yet",
            ),
            Self::feed_group(
                "Hugging Face Models",
                &self.models,
                &self.models.all,
                self.config.top_models,
                |m| entry::from_model(m, hub),
                "No published models yet",
            ),
        ]
    }

    fn feed_status<T>(feed: &Feed<T>) -> FeedStatus {
        if feed.loading {
            FeedStatus::Loading
        } else if feed.failed {
            FeedStatus::Failed
        } else if feed.all.is_empty() && feed.top.is_empty() {
            FeedStatus::Idle
        } else {
            FeedStatus::Loaded(feed.all.len())
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

        frame.render_widget(
            HeaderBar {
                name: &self.config.profile.name,
                active: self.section,
                assistant: self.config.assistant.enabled,
            },
            chunks[0],
        );

        let body = chunks[1];
        match self.section {
            Section::Home => frame.render_widget(
                Hero {
                    profile: &self.config.profile,
                    show_assistant_button: self.config.assistant.enabled,
                    selected: self.selected,
                },
                body,
            ),
            Section::About => frame.render_widget(
                About {
                    profile: &self.config.profile,
                },
                body,
            ),
            Section::Projects => {
                let groups = self.groups();
                frame.render_widget(
                    Projects {
                        groups: &groups,
                        selected: self.selected,
                        tick: self.tick,
                    },
                    body,
                );
            }
            Section::Integrations => {
                let groups = self.groups();
                frame.render_widget(
                    Integrations {
                        groups: &groups,
                        captions: INTEGRATION_CAPTIONS,
                        selected: self.selected,
                        tick: self.tick,
                    },
                    body,
                );
            }
            Section::Contact => {
                let links = self.config.resolved_contact();
                frame.render_widget(
                    Contact {
                        blurb: &self.config.contact_blurb,
                        links: &links,
                        footer: &self.config.profile.footer,
                        selected: self.selected,
                    },
                    body,
                );
            }
        }

        let source_label = match self.config.data_source {
            DataSourceMode::Direct => "direct",
            DataSourceMode::Proxy => "proxy",
        };
        frame.render_widget(
            StatusBar {
                source_label,
                repos: Self::feed_status(&self.repos),
                models: Self::feed_status(&self.models),
                last_sync: &self.last_sync,
                tick: self.tick,
            },
            chunks[2],
        );

        if self.show_menu {
            frame.render_widget(
                NavMenu {
                    selected: self.menu_selected,
                    active: self.section,
                },
                body,
            );
        }

        if self.show_assistant {
            frame.render_widget(
                AssistantDialog {
                    assistant: &self.config.assistant,
                    focus: self.dialog_focus,
                },
                size,
            );
        }

        if let Some(ref notification) = self.notification {
            frame.render_widget(Toast { notification }, body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use crate::ui::buffer_text;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn press(app: &mut App, code: KeyCode) -> Option<Effect> {
        app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn repos_loaded(app: &mut App, generation: u64, result: Result<Vec<RepoSummary>, String>) {
        app.handle_event(AppEvent::ReposLoaded { generation, result });
    }

    fn models_loaded(app: &mut App, generation: u64, result: Result<Vec<ModelSummary>, String>) {
        app.handle_event(AppEvent::ModelsLoaded { generation, result });
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn loading_flag_set_on_mount_and_cleared_on_success() {
        let mut app = App::new(Config::default());
        let generation = app.begin_load();
        assert!(app.repos.loading);
        assert!(app.models.loading);

        repos_loaded(
            &mut app,
            generation,
            Ok(vec![make_repo("a", 5), make_repo("b", 50), make_repo("c", 1)]),
        );
        assert!(!app.repos.loading);
        assert!(app.models.loading);

        let stars: Vec<u32> = app.repos.top.iter().map(|r| r.stars).collect();
        assert_eq!(stars, vec![50, 5, 1]);
    }

    #[test]
    fn failed_fetch_shows_configured_fallback() {
        let fallback = make_repo("pinned-fallback", 0);
        let config = Config {
            fallback_repo: Some(fallback.clone()),
            ..Config::default()
        };
        let mut app = App::new(config);
        let generation = app.begin_load();

        repos_loaded(
            &mut app,
            generation,
            Err("github responded with status 500".to_string()),
        );
        models_loaded(&mut app, generation, Err("timeout".to_string()));

        assert!(!app.repos.loading);
        assert!(!app.models.loading);
        assert_eq!(app.repos.top, vec![fallback.clone()]);
        assert_eq!(app.repos.all, vec![fallback]);
        assert!(app.models.top.is_empty());
        assert!(app.models.all.is_empty());
        assert!(matches!(
            app.notification.as_ref().map(|n| n.level),
            Some(NotifyLevel::Warn)
        ));
    }

    #[test]
    fn proxy_failure_names_proxy_once() {
        let config = Config {
            data_source: DataSourceMode::Proxy,
            proxy_url: Some("http://localhost:8787/api/portfolio".to_string()),
            ..Config::default()
        };
        let mut app = App::new(config);
        let generation = app.begin_load();
        let err = "proxy responded with status 502".to_string();

        repos_loaded(&mut app, generation, Err(err.clone()));
        let first = app.notification.as_ref().map(|n| n.created);
        models_loaded(&mut app, generation, Err(err));

        let toast = app.notification.as_ref().unwrap();
        assert_eq!(toast.message, "Portfolio proxy is unreachable, showing fallback");
        assert_eq!(Some(toast.created), first);
        assert_eq!(app.repos.top, vec![app.config.resolved_fallback_repo()]);
        assert!(app.models.all.is_empty());

        // a later failed reload reports again
        app.notification = None;
        let generation = app.begin_load();
        repos_loaded(&mut app, generation, Err("timeout".to_string()));
        assert!(app.notification.is_some());
    }

    #[test]
    fn direct_failure_names_the_upstream() {
        let mut app = App::new(Config::default());
        let generation = app.begin_load();
        repos_loaded(&mut app, generation, Ok(vec![make_repo("a", 1)]));
        models_loaded(&mut app, generation, Err("huggingface responded with status 500".to_string()));
        assert_eq!(
            app.notification.as_ref().map(|n| n.message.as_str()),
            Some("Hugging Face is unreachable, showing fallback")
        );
    }

    #[test]
    fn silent_failures_when_notifications_disabled() {
        let config = Config {
            notify_errors: false,
            ..Config::default()
        };
        let mut app = App::new(config);
        let generation = app.begin_load();
        repos_loaded(&mut app, generation, Err("boom".to_string()));
        assert!(app.notification.is_none());
        assert_eq!(app.repos.top.len(), 1);
    }

    #[test]
    fn top_lists_respect_caps() {
        let mut app = App::new(Config::default());
        let generation = app.begin_load();
        let repos: Vec<_> = (0..8).map(|i| make_repo(&format!("r{i}"), i * 3)).collect();
        let models: Vec<_> = (0..5)
            .map(|i| make_model(&format!("alice/m{i}"), i * 100))
            .collect();
        repos_loaded(&mut app, generation, Ok(repos));
        models_loaded(&mut app, generation, Ok(models));

        assert_eq!(app.repos.top.len(), 3);
        assert_eq!(app.repos.all.len(), 8);
        assert_eq!(app.models.top.len(), 2);
        let downloads: Vec<u64> = app.models.top.iter().map(|m| m.downloads).collect();
        assert_eq!(downloads, vec![400, 300]);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut app = App::new(Config::default());
        let first = app.begin_load();
        let second = app.begin_load();
        assert_ne!(first, second);

        repos_loaded(&mut app, first, Ok(vec![make_repo("old", 1)]));
        assert!(app.repos.loading);
        assert!(app.repos.all.is_empty());

        repos_loaded(&mut app, second, Ok(vec![make_repo("new", 1)]));
        assert!(!app.repos.loading);
        assert_eq!(app.repos.all[0].name, "new");
    }

    #[test]
    fn dialog_open_then_close_touches_nothing_else() {
        let mut app = App::new(Config::default());
        let generation = app.begin_load();
        repos_loaded(&mut app, generation, Ok(vec![make_repo("a", 1)]));
        app.go_to(Section::Integrations);
        let before = (app.section, app.selected, app.show_menu, app.repos.all.clone());

        assert_eq!(press(&mut app, KeyCode::Char('a')), None);
        assert!(app.show_assistant);
        assert_eq!(press(&mut app, KeyCode::Esc), None);
        assert!(!app.show_assistant);

        let after = (app.section, app.selected, app.show_menu, app.repos.all.clone());
        assert_eq!(before, after);
        assert!(app.models.loading);
    }

    #[test]
    fn dialog_open_button_emits_url_and_closes() {
        let mut app = App::new(Config::default());
        app.open_assistant();
        let effect = press(&mut app, KeyCode::Enter);
        assert_eq!(effect, Some(Effect::OpenUrl(app.config.assistant.url.clone())));
        assert!(!app.show_assistant);
    }

    #[test]
    fn dialog_close_button_emits_nothing() {
        let mut app = App::new(Config::default());
        app.open_assistant();
        press(&mut app, KeyCode::Right);
        assert_eq!(press(&mut app, KeyCode::Enter), None);
        assert!(!app.show_assistant);
    }

    #[test]
    fn disabled_assistant_never_opens() {
        let mut config = Config::default();
        config.assistant.enabled = false;
        let mut app = App::new(config);
        press(&mut app, KeyCode::Char('a'));
        assert!(!app.show_assistant);
        assert_eq!(app.item_count(), 1);
    }

    #[test]
    fn hero_buttons_navigate() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.section, Section::Projects);

        app.go_to(Section::Home);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.show_assistant);
    }

    #[test]
    fn menu_jumps_to_section() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('m'));
        assert!(app.show_menu);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(!app.show_menu);
        assert_eq!(app.section, Section::Projects);
    }

    #[test]
    fn sections_wrap_around() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.section, Section::Contact);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.section, Section::Home);
    }

    #[test]
    fn projects_list_featured_then_top_repos_then_top_models() {
        let mut app = App::new(Config::default());
        let generation = app.begin_load();
        repos_loaded(&mut app, generation, Ok(vec![make_repo("r", 1)]));
        models_loaded(&mut app, generation, Ok(vec![make_model("alice/m", 1)]));
        app.go_to(Section::Projects);

        let headings: Vec<String> = app.groups().into_iter().map(|g| g.heading).collect();
        assert_eq!(headings, vec!["Featured", "Top repositories", "Top models"]);
        assert_eq!(app.item_count(), app.config.projects.len() + 2);
    }

    #[test]
    fn activating_fetched_repo_opens_its_url() {
        let mut app = App::new(Config::default());
        let generation = app.begin_load();
        repos_loaded(&mut app, generation, Ok(vec![make_repo("low", 1), make_repo("high", 9)]));
        models_loaded(&mut app, generation, Ok(vec![]));
        app.go_to(Section::Projects);

        // Featured projects have no links, so move past them.
        for _ in 0..app.config.projects.len() {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(
            press(&mut app, KeyCode::Enter),
            Some(Effect::OpenUrl("https://github.com/test/high".to_string()))
        );
    }

    #[test]
    fn integrations_link_models_to_hub() {
        let mut app = App::new(Config::default());
        let generation = app.begin_load();
        repos_loaded(&mut app, generation, Ok(vec![make_repo("only", 1)]));
        models_loaded(&mut app, generation, Ok(vec![make_model("alice/my-model", 3)]));
        app.go_to(Section::Integrations);
        press(&mut app, KeyCode::Down);
        assert_eq!(
            press(&mut app, KeyCode::Enter),
            Some(Effect::OpenUrl("https://huggingface.co/alice/my-model".to_string()))
        );
    }

    #[test]
    fn contact_links_open() {
        let mut app = App::new(Config::default());
        app.go_to(Section::Contact);
        let expected = app.config.resolved_contact()[0].url.clone();
        assert_eq!(press(&mut app, KeyCode::Enter), Some(Effect::OpenUrl(expected)));
    }

    #[test]
    fn reload_key_requests_refetch() {
        let mut app = App::new(Config::default());
        assert_eq!(press(&mut app, KeyCode::Char('r')), Some(Effect::Reload));
    }

    #[test]
    fn selection_clamped_when_feed_shrinks() {
        let mut app = App::new(Config::default());
        let generation = app.begin_load();
        let repos: Vec<_> = (0..5).map(|i| make_repo(&format!("r{i}"), i)).collect();
        repos_loaded(&mut app, generation, Ok(repos));
        models_loaded(&mut app, generation, Ok(vec![]));
        app.go_to(Section::Integrations);
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected, 4);

        let generation = app.begin_load();
        assert_eq!(app.selected, 0);
        repos_loaded(&mut app, generation, Ok(vec![make_repo("solo", 1)]));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn tick_expires_notification() {
        let mut app = App::new(Config::default());
        app.notification = Some(Notification {
            message: "old".to_string(),
            level: NotifyLevel::Info,
            created: Instant::now() - std::time::Duration::from_secs(60),
        });
        app.handle_event(AppEvent::Tick);
        assert!(app.notification.is_none());
        assert_eq!(app.tick, 1);
    }

    #[test]
    fn renders_skeleton_then_ranked_repos() {
        let mut app = App::new(Config::default());
        let generation = app.begin_load();
        app.go_to(Section::Projects);

        let loading = draw(&mut app);
        assert!(loading.contains('\u{2591}'));
        assert!(loading.contains("loading"));

        repos_loaded(
            &mut app,
            generation,
            Ok(vec![
                make_repo("bravo-5", 5),
                make_repo("alpha-50", 50),
                make_repo("charlie-1", 1),
            ]),
        );
        models_loaded(&mut app, generation, Ok(vec![make_model("alice/my-model", 10)]));
        let loaded = draw(&mut app);
        let alpha = loaded.find("alpha-50").unwrap();
        let bravo = loaded.find("bravo-5").unwrap();
        let charlie = loaded.find("charlie-1").unwrap();
        assert!(alpha < bravo && bravo < charlie);
        assert!(loaded.contains("my-model"));
        assert!(!loaded.contains("alice/my-model"));
    }

    #[test]
    fn renders_dialog_over_page() {
        let mut app = App::new(Config::default());
        app.open_assistant();
        let text = draw(&mut app);
        assert!(text.contains("Talk to My AI Assistant"));
        assert!(text.contains("Open Assistant"));
    }
}
