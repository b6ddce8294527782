use crate::content::ContactLink;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Contact<'a> {
    pub blurb: &'a str,
    pub links: &'a [ContactLink],
    pub footer: &'a str,
    pub selected: usize,
}

impl<'a> Widget for Contact<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let mut lines = vec![
            Line::from(Span::styled(self.blurb, Style::default().fg(theme::TEXT))),
            Line::default(),
        ];
        for (i, link) in self.links.iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(theme::HEADER_BG)
                    .bg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::ACCENT)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("[ {} ]", link.label), style),
                Span::styled(format!("  {}", link.url), Style::default().fg(theme::DIM_TEXT)),
            ]));
        }

        let top = area.height.saturating_sub(lines.len() as u16 + 3) / 2;
        let body = Rect::new(area.x, area.y + top, area.width, area.height.saturating_sub(top));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(body, buf);

        if area.height > 1 {
            let footer = Line::from(vec![
                Span::styled(self.footer, Style::default().fg(theme::MUTED_TEXT)),
                Span::styled("  \u{b7}  Thanks for visiting!", Style::default().fg(theme::DIM_TEXT)),
            ]);
            Paragraph::new(footer)
                .alignment(Alignment::Center)
                .render(Rect::new(area.x, area.bottom() - 1, area.width, 1), buf);
        }
    }
}
