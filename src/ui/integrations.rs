use crate::ui::card::meta_line;
use crate::ui::entry::{Group, GroupState};
use crate::ui::{scroll_offset, theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

const ROW_HEIGHT: u16 = 3;
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 80;

/// Activity panels: every fetched repository and every published model.
pub struct Integrations<'a> {
    pub groups: &'a [Group],
    pub captions: &'a [&'a str],
    pub selected: usize,
    pub tick: usize,
}

impl<'a> Widget for Integrations<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if self.groups.is_empty() || area.height == 0 {
            return;
        }
        let n = self.groups.len() as u32;
        let constraints = vec![Constraint::Ratio(1, n); self.groups.len()];
        let columns = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Layout::horizontal(constraints).split(area)
        } else {
            Layout::vertical(constraints).split(area)
        };

        let mut base = 0usize;
        for (i, group) in self.groups.iter().enumerate() {
            let caption = self.captions.get(i).copied().unwrap_or("");
            let local = self
                .selected
                .checked_sub(base)
                .filter(|s| *s < group.entries().len());
            GroupPanel {
                group,
                caption,
                selected: local,
                tick: self.tick,
            }
            .render(columns[i], buf);
            base += group.entries().len();
        }
    }
}

struct GroupPanel<'a> {
    group: &'a Group,
    caption: &'a str,
    selected: Option<usize>,
    tick: usize,
}

impl<'a> Widget for GroupPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let border = if self.selected.is_some() {
            theme::ACCENT
        } else {
            theme::CARD_BORDER
        };
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.group.heading),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width < 2 {
            return;
        }
        let w = inner.width as usize;

        buf.set_line(
            inner.x,
            inner.y,
            &Line::from(Span::styled(
                truncate_with_ellipsis(self.caption, w),
                Style::default().fg(theme::DIM_TEXT),
            )),
            inner.width,
        );
        let list = Rect::new(
            inner.x,
            inner.y + 1,
            inner.width,
            inner.height.saturating_sub(1),
        );
        let visible = (list.height / ROW_HEIGHT) as usize;

        match &self.group.state {
            GroupState::Loading(n) => {
                let bar = Style::default().fg(theme::SKELETON);
                for i in 0..(*n).min(visible) {
                    let y = list.y + i as u16 * ROW_HEIGHT;
                    let text = format!(
                        "{} {}",
                        theme::spinner_frame(self.tick + i),
                        "\u{2591}".repeat(w.saturating_sub(4) / 2)
                    );
                    buf.set_line(list.x, y, &Line::from(Span::styled(text, bar)), list.width);
                    buf.set_line(
                        list.x,
                        y + 1,
                        &Line::from(Span::styled("\u{2591}".repeat(w.saturating_sub(2)), bar)),
                        list.width,
                    );
                }
            }
            GroupState::Ready(entries) if entries.is_empty() => {
                buf.set_line(
                    list.x,
                    list.y,
                    &Line::from(Span::styled(
                        self.group.empty_note,
                        Style::default().fg(theme::DIM_TEXT),
                    )),
                    list.width,
                );
            }
            GroupState::Ready(entries) => {
                let offset = scroll_offset(self.selected.unwrap_or(0), visible);
                for (row, (i, entry)) in entries
                    .iter()
                    .enumerate()
                    .skip(offset)
                    .take(visible)
                    .enumerate()
                {
                    let y = list.y + row as u16 * ROW_HEIGHT;
                    let is_selected = self.selected == Some(i);
                    let marker = if is_selected { "\u{25b8} " } else { "  " };
                    let title_style = Style::default()
                        .fg(theme::ACCENT_SOFT)
                        .add_modifier(Modifier::BOLD);
                    buf.set_line(
                        list.x,
                        y,
                        &Line::from(vec![
                            Span::styled(marker, Style::default().fg(theme::ACCENT)),
                            Span::styled(
                                truncate_with_ellipsis(&entry.title, w.saturating_sub(2)),
                                title_style,
                            ),
                        ]),
                        list.width,
                    );
                    let mut meta = meta_line(entry);
                    meta.spans.insert(0, Span::raw("  "));
                    buf.set_line(list.x, y + 1, &meta, list.width);

                    if is_selected {
                        for yy in y..(y + 2).min(list.bottom()) {
                            for x in list.x..list.right() {
                                buf[(x, yy)].set_bg(theme::SELECTED_BG);
                            }
                        }
                    }
                }
            }
        }
    }
}
