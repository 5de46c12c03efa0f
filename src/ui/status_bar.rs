use crate::app::state::AppState;
use crate::screen::Mode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn key_hints(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Table => &[
            ("a", "add"),
            ("e", "edit"),
            ("v", "view"),
            ("d", "delete"),
            ("r", "reload"),
            ("q", "quit"),
        ],
        Mode::Form => &[("Tab", "next"), ("←→", "choose"), ("Enter", "save"), ("Esc", "close")],
        Mode::Details => &[("Esc", "close")],
        Mode::Confirm => &[("y", "delete"), ("n", "cancel")],
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if state.active_screen().state().is_loading() {
        let frame_idx = (state.tick_count as usize) % SPINNER.len();
        parts.push(Span::styled(
            format!(" {} ", SPINNER[frame_idx]),
            Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BG_SURFACE),
        ));
    }

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let mut hints: Vec<Span> = Vec::new();
    for (key, what) in key_hints(state.active_screen().state().mode()) {
        hints.push(Span::styled(format!(" {key}"), Theme::key_hint()));
        hints.push(Span::styled(format!(" {what}"), Theme::status_bar()));
    }
    hints.push(Span::styled(" ", Theme::status_bar()));

    // Pad so the hints sit flush right
    let used: usize = parts
        .iter()
        .chain(hints.iter())
        .map(|s| s.content.width())
        .sum();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.extend(hints);

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
