use crate::app::Section;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

/// Popup navigation, the terminal stand-in for a collapsed menu.
pub struct NavMenu {
    pub selected: usize,
    pub active: Section,
}

impl Widget for NavMenu {
    fn render(self, area: Rect, buf: &mut Buf) {
        let height = Section::ALL.len() as u16 + 2;
        let width = 28.min(area.width);
        let popup = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height.min(area.height),
        );
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));
        let inner = block.inner(popup);
        block.render(popup, buf);

        for (i, section) in Section::ALL.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            let y = inner.y + i as u16;
            let mut style = Style::default().fg(theme::TEXT);
            if *section == self.active {
                style = style.fg(theme::ACCENT).add_modifier(Modifier::BOLD);
            }
            let line = Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(theme::ACCENT_DIM)),
                Span::styled(section.label(), style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);

            if i == self.selected {
                for x in inner.x..inner.right() {
                    buf[(x, y)].set_bg(theme::SELECTED_BG);
                }
            }
        }
    }
}
