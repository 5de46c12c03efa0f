use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Tabs;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = state
        .screens
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            let marker = if screen.state().notice.is_some() && i != state.active {
                "•"
            } else {
                ""
            };
            Line::from(format!("{} {}{}", i + 1, screen.kind().title(), marker))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active)
        .style(Theme::tab())
        .highlight_style(Theme::tab_active())
        .divider(Span::styled("│", Theme::border()));
    frame.render_widget(tabs, area);
}
