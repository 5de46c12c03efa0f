use crate::screen::FormState;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Each field takes a label line and a value line.
const FIELD_HEIGHT: u16 = 2;
const VALUE_PREFIX: &str = "› ";

/// First field to draw so the focused one stays in view.
fn first_visible(focused: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return focused;
    }
    focused.saturating_sub(capacity - 1)
}

/// Terminal column of the input cursor, kept inside `area` however long the text is.
fn cursor_x(area: Rect, column: usize) -> u16 {
    let column = u16::try_from(column).unwrap_or(u16::MAX);
    area.x
        .saturating_add(VALUE_PREFIX.chars().count() as u16)
        .saturating_add(column)
        .min(area.right().saturating_sub(1))
}

pub fn render(frame: &mut Frame, form: &FormState) {
    let area = layout::modal_area(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", form.title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Theme::popup());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(FIELD_HEIGHT),
            Constraint::Length(1), // validation error
            Constraint::Length(1), // help
        ])
        .split(inner);
    let fields_area = chunks[0];

    let capacity = (fields_area.height / FIELD_HEIGHT) as usize;
    let start = first_visible(form.focused, capacity);
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor: Option<Position> = None;

    for (i, field) in form.fields.iter().enumerate().skip(start).take(capacity) {
        let focused = i == form.focused;
        let marker = if field.spec.required { " *" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                field.spec.label,
                if focused {
                    Theme::label_focused()
                } else {
                    Theme::label()
                },
            ),
            Span::styled(marker, Style::default().fg(Theme::ACCENT_RED)),
        ]));

        let value = if field.is_choice() {
            let name = field.display_value();
            if focused {
                format!("◀ {name} ▶")
            } else {
                name
            }
        } else {
            field.input.text.clone()
        };
        lines.push(Line::from(vec![
            Span::styled(VALUE_PREFIX, Theme::hint_text()),
            Span::styled(value, Theme::input_text()),
        ]));

        if focused && !field.is_choice() {
            let row = fields_area.y + ((i - start) as u16) * FIELD_HEIGHT + 1;
            cursor = Some(Position::new(
                cursor_x(fields_area, field.input.cursor_column()),
                row,
            ));
        }
    }
    frame.render_widget(Paragraph::new(lines), fields_area);

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("✖ {error}"), Theme::error())),
            chunks[1],
        );
    }

    let help = Line::from(vec![
        Span::styled("Tab", Theme::key_hint()),
        Span::styled(" next field  ", Theme::hint_text()),
        Span::styled("←→", Theme::key_hint()),
        Span::styled(" choose  ", Theme::hint_text()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" save  ", Theme::hint_text()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" close", Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(help), chunks[2]);

    if let Some(pos) = cursor {
        frame.set_cursor_position(pos);
    }
}
