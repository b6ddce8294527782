use crate::content::Profile;
use crate::ui::{theme, wrap_badges};
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct About<'a> {
    pub profile: &'a Profile,
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::CARD_BORDER))
}

impl<'a> Widget for About<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let halves = if area.width >= 80 {
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area)
        } else {
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area)
        };

        let mut paragraphs: Vec<Line> = Vec::new();
        for (i, p) in self.profile.background.iter().enumerate() {
            if i > 0 {
                paragraphs.push(Line::default());
            }
            paragraphs.push(Line::from(Span::styled(
                p.as_str(),
                Style::default().fg(theme::TEXT),
            )));
        }
        Paragraph::new(paragraphs)
            .wrap(Wrap { trim: true })
            .block(card_block("Background"))
            .render(halves[0], buf);

        let skills_block = card_block("Skills & Technologies");
        let inner = skills_block.inner(halves[1]);
        skills_block.render(halves[1], buf);

        let badge_style = Style::default().fg(theme::ACCENT_SOFT);
        let lines = wrap_badges(&self.profile.skills, inner.width as usize, badge_style);
        for (i, line) in lines.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            buf.set_line(inner.x, inner.y + i as u16, line, inner.width);
        }
    }
}
