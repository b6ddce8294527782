use crate::ui::entry::Entry;
use crate::ui::{theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub const CARD_HEIGHT: u16 = 5;
const MIN_CARD_WIDTH: u16 = 34;
const MAX_COLUMNS: usize = 3;

pub fn columns_for(width: u16) -> usize {
    ((width / MIN_CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

pub fn grid_rows(count: usize, width: u16) -> usize {
    count.div_ceil(columns_for(width))
}

/// Rect of the `index`-th cell of a grid anchored at `origin`.
pub fn grid_cell(origin: Rect, index: usize) -> Rect {
    let cols = columns_for(origin.width);
    let col_w = origin.width / cols as u16;
    let row = (index / cols) as u16;
    let col = (index % cols) as u16;
    Rect::new(
        origin.x + col * col_w,
        origin.y + row * CARD_HEIGHT,
        col_w.saturating_sub(1),
        CARD_HEIGHT,
    )
}

pub struct Card<'a> {
    pub entry: &'a Entry,
    pub selected: bool,
}

impl<'a> Widget for Card<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let border = if self.selected {
            theme::ACCENT
        } else {
            theme::CARD_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let w = inner.width as usize;

        let title_style = Style::default()
            .fg(if self.selected {
                theme::ACCENT
            } else {
                theme::ACCENT_SOFT
            })
            .add_modifier(Modifier::BOLD);
        buf.set_line(
            inner.x,
            inner.y,
            &Line::from(Span::styled(truncate_with_ellipsis(&self.entry.title, w), title_style)),
            inner.width,
        );

        if inner.height > 1 {
            buf.set_line(
                inner.x,
                inner.y + 1,
                &Line::from(Span::styled(
                    truncate_with_ellipsis(&self.entry.body, w),
                    Style::default().fg(theme::MUTED_TEXT),
                )),
                inner.width,
            );
        }

        if inner.height > 2 {
            buf.set_line(inner.x, inner.y + 2, &meta_line(self.entry), inner.width);
        }

        if self.selected {
            for y in inner.y..inner.bottom() {
                for x in inner.x..inner.right() {
                    buf[(x, y)].set_bg(theme::SELECTED_BG);
                }
            }
        }
    }
}

pub fn meta_line(entry: &Entry) -> Line<'_> {
    let mut spans = Vec::new();
    if let Some(ref lang) = entry.language {
        spans.push(Span::styled(
            "\u{25cf} ",
            Style::default().fg(theme::language_color(lang)),
        ));
        spans.push(Span::styled(
            lang.as_str(),
            Style::default().fg(theme::MUTED_TEXT),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        entry.stats.as_str(),
        Style::default().fg(theme::DIM_TEXT),
    ));
    Line::from(spans)
}

/// Placeholder card drawn while a fetch is in flight.
pub struct SkeletonCard {
    pub tick: usize,
}

impl Widget for SkeletonCard {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::CARD_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 {
            return;
        }

        let bar = Style::default().fg(theme::SKELETON);
        let widths = [inner.width / 2, inner.width.saturating_sub(2), inner.width / 3];
        for (i, w) in widths.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let text = if i == 0 {
                let fill = "\u{2591}".repeat((*w as usize).saturating_sub(2));
                format!("{} {fill}", theme::spinner_frame(self.tick))
            } else {
                "\u{2591}".repeat(*w as usize)
            };
            buf.set_line(inner.x, y, &Line::from(Span::styled(text, bar)), inner.width);
        }
    }
}
