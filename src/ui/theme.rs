use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(0x4f, 0xd1, 0xc5);
    pub const ACCENT_AMBER: Color = Color::Rgb(0xf6, 0xc1, 0x77);
    pub const ACCENT_GREEN: Color = Color::Rgb(0x8b, 0xd4, 0x7e);
    pub const ACCENT_RED: Color = Color::Rgb(0xf2, 0x77, 0x7a);
    pub const TEXT_PRIMARY: Color = Color::Rgb(0xe6, 0xe6, 0xe6);
    pub const TEXT_SECONDARY: Color = Color::Rgb(0x9a, 0x9a, 0xa5);
    pub const BG_DARK: Color = Color::Rgb(0x16, 0x18, 0x1d);
    pub const BG_SURFACE: Color = Color::Rgb(0x22, 0x25, 0x2c);
    pub const BORDER_DIM: Color = Color::Rgb(0x3a, 0x3e, 0x47);

    pub fn border() -> Style {
        Style::default().fg(Theme::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn popup() -> Style {
        Style::default().bg(Theme::BG_SURFACE)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Theme::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row() -> Style {
        Style::default().fg(Theme::TEXT_PRIMARY)
    }

    pub fn row_selected() -> Style {
        Style::default()
            .fg(Theme::BG_DARK)
            .bg(Theme::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab() -> Style {
        Style::default().fg(Theme::TEXT_SECONDARY)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn label() -> Style {
        Style::default().fg(Theme::TEXT_SECONDARY)
    }

    pub fn label_focused() -> Style {
        Style::default()
            .fg(Theme::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Theme::TEXT_PRIMARY)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Theme::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Theme::TEXT_SECONDARY)
    }

    pub fn success() -> Style {
        Style::default().fg(Theme::ACCENT_GREEN)
    }

    pub fn error() -> Style {
        Style::default().fg(Theme::ACCENT_RED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Theme::TEXT_PRIMARY).bg(Theme::BORDER_DIM)
    }
}
