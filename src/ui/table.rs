use crate::screen::Screen;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row as TableRow, Scrollbar, ScrollbarOrientation,
    ScrollbarState, Table, TableState,
};

/// First column (the record's name) gets twice the room of the others.
fn column_widths(count: usize) -> Vec<Constraint> {
    (0..count)
        .map(|i| Constraint::Fill(if i == 0 { 2 } else { 1 }))
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, screen: &dyn Screen) {
    let state = screen.state();
    let block = Block::default()
        .title(format!(" {} ", screen.kind().title()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    if state.rows.is_empty() {
        let text = if state.is_loading() {
            format!("Loading {}…", screen.kind().plural())
        } else {
            format!("No {} yet. Press a to add one.", screen.kind().plural())
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(text, Theme::hint_text())))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = TableRow::new(screen.columns().iter().map(|c| Cell::from(*c)))
        .style(Theme::header())
        .bottom_margin(1);

    let rows = state.rows.iter().map(|row| {
        TableRow::new(row.cells.iter().map(|c| Cell::from(c.as_str()))).style(Theme::row())
    });

    let table = Table::new(rows, column_widths(screen.columns().len()))
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(Theme::row_selected())
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);

    // Border + header + header margin
    let visible = area.height.saturating_sub(4) as usize;
    if state.rows.len() > visible {
        let mut scrollbar_state = ScrollbarState::new(state.rows.len()).position(state.selected);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Style::default().fg(Theme::ACCENT_TEAL))
                .track_style(Theme::border()),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_column_is_wider() {
        assert_eq!(
            column_widths(3),
            vec![Constraint::Fill(2), Constraint::Fill(1), Constraint::Fill(1)]
        );
    }
}
