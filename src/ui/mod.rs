mod confirm;
mod details;
mod form_modal;
pub mod layout;
mod status_bar;
mod table;
mod tabs;
mod theme;

use crate::app::state::AppState;
use crate::screen::NoticeKind;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);
    let screen = state.active_screen();

    tabs::render(frame, app_layout.tabs, state);
    table::render(frame, app_layout.table, screen);
    render_notice(frame, app_layout.notice, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // At most one overlay, same precedence as key handling
    let screen_state = screen.state();
    if let Some(pending) = &screen_state.confirm {
        confirm::render(frame, pending);
    } else if let Some(form) = &screen_state.form {
        form_modal::render(frame, form);
    } else if let Some(view) = &screen_state.details {
        details::render(frame, view);
    }
}

fn render_notice(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(notice) = &state.active_screen().state().notice else {
        return;
    };
    let (icon, style) = match notice.kind {
        NoticeKind::Success => ("✔", Theme::success()),
        NoticeKind::Error => ("✖", Theme::error()),
    };
    let line = Line::from(vec![
        Span::styled(format!(" {icon} {}", notice.text), style),
        Span::styled("  (Esc to dismiss)", Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResourceKind;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use serde_json::json;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        let screen = state.screen_mut(ResourceKind::Anime).unwrap();
        let call = screen.list();
        let _ = screen.handle_response(
            call.intent,
            Ok(json!([{
                "_id": "a1",
                "titulo": "Cowboy Bebop",
                "genero": "Sci-Fi",
                "episodios": 26,
                "ano": 1998,
                "estudio": {"_id": "s1", "nome": "Sunrise"}
            }])),
        );
        state
    }

    #[test]
    fn test_table_shows_rows() {
        let screen = draw(&loaded_state());
        assert!(screen.contains("Cowboy Bebop"));
        assert!(screen.contains("Sunrise"));
        assert!(screen.contains("1 Anime"));
    }

    #[test]
    fn test_empty_table_placeholder() {
        let state = AppState::new(AppConfig::default());
        assert!(draw(&state).contains("No anime yet"));
    }

    #[test]
    fn test_error_notice_is_drawn() {
        let mut state = AppState::new(AppConfig::default());
        let screen = state.screen_mut(ResourceKind::Anime).unwrap();
        let call = screen.list();
        let _ = screen.handle_response(
            call.intent,
            Err(crate::api::ApiError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: None,
            }),
        );
        assert!(draw(&state).contains("Failed to load anime"));
    }

    #[test]
    fn test_create_form_overlay() {
        let mut state = AppState::new(AppConfig::default());
        let screen = state.screen_mut(ResourceKind::Studio).unwrap();
        let _ = screen.open_create();
        state.select_screen(1);
        let screen = draw(&state);
        assert!(screen.contains("Add studio"));
        assert!(screen.contains("Country"));
    }

    #[test]
    fn test_confirm_overlay() {
        let mut state = loaded_state();
        let screen = state.screen_mut(ResourceKind::Anime).unwrap();
        screen.request_delete("a1");
        assert!(draw(&state).contains("Delete anime \"Cowboy Bebop\"?"));
    }
}
