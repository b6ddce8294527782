use crate::ui::card::{grid_cell, grid_rows, Card, SkeletonCard, CARD_HEIGHT};
use crate::ui::entry::{Group, GroupState};
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Card grids for the featured projects and the top fetched collections.
pub struct Projects<'a> {
    pub groups: &'a [Group],
    pub selected: usize,
    pub tick: usize,
}

fn group_height(group: &Group, width: u16) -> u16 {
    let body = match &group.state {
        GroupState::Loading(n) => grid_rows(*n, width) as u16 * CARD_HEIGHT,
        GroupState::Ready(entries) if entries.is_empty() => 1,
        GroupState::Ready(entries) => grid_rows(entries.len(), width) as u16 * CARD_HEIGHT,
    };
    // heading + body + gap
    1 + body + 1
}

impl<'a> Widget for Projects<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if area.width < 4 || area.height == 0 {
            return;
        }
        let width = area.width.saturating_sub(2);
        let total: u16 = self.groups.iter().map(|g| group_height(g, width)).sum();
        let mut canvas = Buf::empty(Rect::new(0, 0, width, total.max(1)));

        let heading_style = Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD);
        let mut y = 0u16;
        let mut base = 0usize;
        let mut selected_bottom = 0u16;

        for group in self.groups {
            canvas.set_line(
                0,
                y,
                &Line::from(Span::styled(group.heading.as_str(), heading_style)),
                width,
            );
            let origin = Rect::new(0, y + 1, width, 0);

            match &group.state {
                GroupState::Loading(n) => {
                    for i in 0..*n {
                        SkeletonCard { tick: self.tick }.render(grid_cell(origin, i), &mut canvas);
                    }
                }
                GroupState::Ready(entries) if entries.is_empty() => {
                    canvas.set_line(
                        0,
                        y + 1,
                        &Line::from(Span::styled(
                            group.empty_note,
                            Style::default().fg(theme::DIM_TEXT),
                        )),
                        width,
                    );
                }
                GroupState::Ready(entries) => {
                    for (i, entry) in entries.iter().enumerate() {
                        let cell = grid_cell(origin, i);
                        let selected = base + i == self.selected;
                        if selected {
                            selected_bottom = cell.bottom();
                        }
                        Card { entry, selected }.render(cell, &mut canvas);
                    }
                    base += entries.len();
                }
            }
            y += group_height(group, width);
        }

        let scroll = selected_bottom.saturating_sub(area.height);
        let target = Rect::new(area.x + 1, area.y, width, area.height);
        super::blit(&canvas, scroll, target, buf);
    }
}
