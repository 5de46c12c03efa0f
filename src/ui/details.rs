use crate::screen::DetailsView;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, details: &DetailsView) {
    let area = layout::modal_area(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", details.title))
        .title_style(Theme::title())
        .title_bottom(Line::from(Span::styled(" Esc close ", Theme::hint_text())).right_aligned())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Theme::popup());

    let mut lines: Vec<Line> = Vec::new();
    for (label, value) in &details.entries {
        lines.push(Line::from(Span::styled(*label, Theme::label_focused())));
        lines.push(Line::from(Span::styled(value.as_str(), Theme::input_text())));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
