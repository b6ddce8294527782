use crate::app::Section;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Site name on the left, section tabs after it, key hints on the right.
pub struct HeaderBar<'a> {
    pub name: &'a str,
    pub active: Section,
    pub assistant: bool,
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let mut spans: Vec<Span> = vec![
            Span::styled(
                format!(" {}", self.name),
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::HEADER_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " \u{2503} ",
                Style::default().fg(theme::SEPARATOR).bg(theme::HEADER_BG),
            ),
        ];

        for (i, section) in Section::ALL.iter().enumerate() {
            let style = if *section == self.active {
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::HEADER_BG)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme::MUTED_TEXT).bg(theme::HEADER_BG)
            };
            spans.push(Span::styled(
                format!("{}", i + 1),
                Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
            ));
            spans.push(Span::styled(section.label(), style));
            spans.push(Span::styled("  ", bg));
        }

        let left_line = Line::from(spans);
        let left_w = left_line.width();
        buf.set_line(area.x, area.y, &left_line, area.width);

        let right = if self.assistant {
            "m menu  a assistant "
        } else {
            "m menu "
        };
        let right_w = UnicodeWidthStr::width(right);
        let area_w = area.width as usize;
        if area_w > left_w + right_w {
            let right_x = area.x + (area_w - right_w) as u16;
            buf.set_line(
                right_x,
                area.y,
                &Line::from(Span::styled(
                    right,
                    Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
                )),
                right_w as u16,
            );
        }
    }
}
