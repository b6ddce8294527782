pub mod about;
pub mod assistant_dialog;
pub mod card;
pub mod contact;
pub mod entry;
pub mod header_bar;
pub mod hero;
pub mod input;
pub mod integrations;
pub mod nav_menu;
pub mod projects;
pub mod status_bar;
pub mod theme;
pub mod toast;

use chrono::{DateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max <= 1 {
        return "\u{2026}".to_string();
    }
    let mut result = String::new();
    let mut w = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if w + cw > max - 1 {
            break;
        }
        result.push(ch);
        w += cw;
    }
    result.push('\u{2026}');
    result
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Min(0),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Min(0),
    ])
    .split(vert[1])[1]
}

fn duration_bucket(time: &DateTime<Utc>) -> (i64, &'static str) {
    let dur = Utc::now().signed_duration_since(*time);
    if dur.num_seconds() < 60 {
        (dur.num_seconds().max(0), "s")
    } else if dur.num_minutes() < 60 {
        (dur.num_minutes(), "m")
    } else if dur.num_hours() < 24 {
        (dur.num_hours(), "h")
    } else if dur.num_days() < 30 {
        (dur.num_days(), "d")
    } else if dur.num_days() < 365 {
        (dur.num_days() / 30, "mo")
    } else {
        (dur.num_days() / 365, "y")
    }
}

pub fn format_time_ago(time: &DateTime<Utc>) -> String {
    let (val, unit) = duration_bucket(time);
    format!("{val}{unit} ago")
}

/// Compact counter: 950, 2.1k, 5.7M.
pub fn format_count(n: u64) -> String {
    match n {
        0..=999 => n.to_string(),
        // anything that would round to 1000.0k belongs to the next unit
        1_000..=999_949 => compact(n as f64 / 1_000.0, "k"),
        _ => compact(n as f64 / 1_000_000.0, "M"),
    }
}

fn compact(value: f64, unit: &str) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}{unit}")
    } else {
        format!("{rounded:.1}{unit}")
    }
}

/// Lays out `[badge]` spans left to right, wrapping at `width`.
pub fn wrap_badges<'a>(labels: &'a [String], width: usize, style: Style) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'a>> = Vec::new();
    let mut used = 0;

    for label in labels {
        let w = UnicodeWidthStr::width(label.as_str()) + 2;
        if used > 0 && used + 1 + w > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if used > 0 {
            current.push(Span::raw(" "));
            used += 1;
        }
        current.push(Span::styled("[", style));
        current.push(Span::styled(label.as_str(), style));
        current.push(Span::styled("]", style));
        used += w;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Keeps `selected` within a window of `visible` rows.
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        selected.saturating_sub(visible - 1)
    }
}

/// Copies rows of an off-screen canvas, starting at `src_y`, into `area`.
pub fn blit(src: &Buffer, src_y: u16, area: Rect, dst: &mut Buffer) {
    let width = area.width.min(src.area.width);
    for dy in 0..area.height {
        let sy = src_y.saturating_add(dy);
        if sy >= src.area.bottom() {
            break;
        }
        for dx in 0..width {
            dst[(area.x + dx, area.y + dy)] = src[(src.area.x + dx, sy)].clone();
        }
    }
}

#[cfg(test)]
pub fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
