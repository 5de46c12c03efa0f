use crate::screen::PendingDelete;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, pending: &PendingDelete) {
    let area = layout::confirm_area(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(Style::default().fg(Theme::ACCENT_RED).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_RED))
        .style(Theme::popup());

    let lines = vec![
        Line::from(Span::styled(pending.prompt.as_str(), Theme::input_text())),
        Line::default(),
        Line::from(vec![
            Span::styled("y", Theme::key_hint()),
            Span::styled(" delete  ", Theme::hint_text()),
            Span::styled("n", Theme::key_hint()),
            Span::styled(" cancel", Theme::hint_text()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
