use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(251, 146, 60);
pub const ACCENT_SOFT: Color = Color::Rgb(253, 186, 116);
pub const ACCENT_DIM: Color = Color::Rgb(154, 88, 38);
pub const HEADER_BG: Color = Color::Rgb(12, 14, 20);
pub const STATUS_BG: Color = Color::Rgb(17, 24, 39);
pub const CARD_BORDER: Color = Color::Rgb(55, 65, 81);
pub const SELECTED_BG: Color = Color::Rgb(48, 38, 30);
pub const TEXT: Color = Color::Rgb(229, 231, 235);
pub const MUTED_TEXT: Color = Color::Rgb(156, 163, 175);
pub const DIM_TEXT: Color = Color::Rgb(107, 114, 128);
pub const SKELETON: Color = Color::Rgb(55, 65, 81);
pub const SEPARATOR: Color = Color::Rgb(75, 85, 99);
pub const ERROR_FG: Color = Color::LightRed;
pub const WARN_FG: Color = Color::Yellow;

const LANGUAGE_COLORS: &[(&str, Color)] = &[
    ("Rust", Color::Rgb(222, 165, 132)),
    ("Python", Color::Rgb(53, 114, 165)),
    ("TypeScript", Color::Rgb(49, 120, 198)),
    ("JavaScript", Color::Rgb(241, 224, 90)),
    ("Go", Color::Rgb(0, 173, 216)),
    ("Jupyter Notebook", Color::Rgb(218, 91, 11)),
    ("Shell", Color::Rgb(137, 224, 81)),
];

pub fn language_color(language: &str) -> Color {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, c)| *c)
        .unwrap_or(ACCENT)
}

/// Spinner frames for loading placeholders.
pub const SPINNER: &[&str] = &[
    "\u{280b}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283c}", "\u{2834}", "\u{2826}",
    "\u{2827}", "\u{2807}", "\u{280f}",
];

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}
