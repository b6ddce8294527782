use crate::content::Assistant;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub const OPEN_LABEL: &str = "Open Assistant";
pub const CLOSE_LABEL: &str = "Close";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Open,
    Close,
}

pub struct AssistantDialog<'a> {
    pub assistant: &'a Assistant,
    pub focus: DialogButton,
}

impl<'a> Widget for AssistantDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(60, 60, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.assistant.title),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                self.assistant.description.as_str(),
                Style::default().fg(theme::TEXT),
            )),
            Line::default(),
            Line::from(Span::styled(
                "My custom GPT assistant can help you with:",
                Style::default().fg(theme::MUTED_TEXT),
            )),
        ];
        for cap in &self.assistant.capabilities {
            lines.push(Line::from(vec![
                Span::styled("  \u{2022} ", Style::default().fg(theme::ACCENT)),
                Span::styled(cap.as_str(), Style::default().fg(theme::MUTED_TEXT)),
            ]));
        }

        let text_area = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(2),
        );
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        if inner.height < 2 {
            return;
        }
        let focused = Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD);
        let idle = Style::default().fg(theme::ACCENT_SOFT);
        let (open_style, close_style) = match self.focus {
            DialogButton::Open => (focused, idle),
            DialogButton::Close => (idle, focused),
        };
        let buttons = Line::from(vec![
            Span::styled(format!("[ {OPEN_LABEL} ]"), open_style),
            Span::raw("  "),
            Span::styled(format!("[ {CLOSE_LABEL} ]"), close_style),
        ]);
        buf.set_line(inner.x + 1, inner.bottom() - 1, &buttons, inner.width.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;

    #[test]
    fn shows_capabilities_and_buttons() {
        let assistant = Assistant::default();
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buf::empty(area);
        AssistantDialog {
            assistant: &assistant,
            focus: DialogButton::Open,
        }
        .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains(&assistant.title));
        assert!(text.contains("Collaboration opportunities"));
        assert!(text.contains(OPEN_LABEL));
        assert!(text.contains(CLOSE_LABEL));
    }
}
