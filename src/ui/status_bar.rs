use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Per-feed indicator shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Idle,
    Loading,
    Loaded(usize),
    Failed,
}

pub struct StatusBar<'a> {
    pub source_label: &'a str,
    pub repos: FeedStatus,
    pub models: FeedStatus,
    pub last_sync: &'a str,
    pub tick: usize,
}

fn separator() -> Span<'static> {
    Span::styled(
        "\u{2502}",
        Style::default().fg(theme::SEPARATOR).bg(theme::STATUS_BG),
    )
}

fn feed_span(label: &str, noun: &str, status: FeedStatus, tick: usize) -> Span<'static> {
    let base = Style::default().bg(theme::STATUS_BG);
    match status {
        FeedStatus::Idle => Span::styled(format!(" {label}: \u{2013} "), base.fg(theme::DIM_TEXT)),
        FeedStatus::Loading => Span::styled(
            format!(" {label}: {} loading ", theme::spinner_frame(tick)),
            base.fg(theme::ACCENT),
        ),
        FeedStatus::Loaded(n) => Span::styled(format!(" {label}: {n} {noun} "), base.fg(theme::TEXT)),
        FeedStatus::Failed => Span::styled(
            format!(" {label}: offline "),
            base.fg(theme::WARN_FG).add_modifier(Modifier::BOLD),
        ),
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let spans = vec![
            Span::styled(format!(" {} ", self.source_label), bg.fg(theme::DIM_TEXT)),
            separator(),
            feed_span("github", "repos", self.repos, self.tick),
            separator(),
            feed_span("hf", "models", self.models, self.tick),
            separator(),
            Span::styled(format!(" synced: {} ", self.last_sync), bg),
            separator(),
            Span::styled(
                " j/k select \u{b7} enter open \u{b7} r reload \u{b7} q quit",
                bg.fg(theme::DIM_TEXT),
            ),
        ];
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
