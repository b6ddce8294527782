use crate::content::Profile;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub const VIEW_PROJECTS: &str = "View Projects";
pub const TALK_TO_ASSISTANT: &str = "Talk to My Assistant";

pub struct Hero<'a> {
    pub profile: &'a Profile,
    pub show_assistant_button: bool,
    pub selected: usize,
}

fn button<'a>(label: &'a str, selected: bool, primary: bool) -> Span<'a> {
    let style = match (selected, primary) {
        (true, _) => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(theme::ACCENT_SOFT),
    };
    Span::styled(format!("[ {label} ]"), style)
}

impl<'a> Widget for Hero<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            self.profile.greeting.as_str(),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        for t in &self.profile.tagline {
            lines.push(Line::from(Span::styled(
                t.as_str(),
                Style::default().fg(theme::MUTED_TEXT),
            )));
        }
        lines.push(Line::default());

        let mut buttons = vec![button(VIEW_PROJECTS, self.selected == 0, false)];
        if self.show_assistant_button {
            buttons.push(Span::raw("   "));
            buttons.push(button(TALK_TO_ASSISTANT, self.selected == 1, true));
        }
        lines.push(Line::from(buttons));

        let content_h = lines.len() as u16 + 2;
        let top = area.height.saturating_sub(content_h) / 2;
        let inner = Rect::new(
            area.x,
            area.y + top,
            area.width,
            area.height.saturating_sub(top),
        );

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
