use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tabs: Rect,
    pub table: Rect,
    pub notice: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Screen tabs
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Notice line
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        tabs: chunks[0],
        table: chunks[1],
        notice: chunks[2],
        status_bar: chunks[3],
    }
}

/// Centered popup for the form and details views: 70% width, 80% height,
/// at least 50x14 when the terminal allows it.
pub fn modal_area(area: Rect) -> Rect {
    centered(area, 70, 80, 50, 14)
}

/// Small centered popup for the delete confirmation.
pub fn confirm_area(area: Rect) -> Rect {
    let w = (area.width * 50 / 100).max(40).min(area.width.saturating_sub(4));
    let h = 7.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(w) / 2,
        area.y + area.height.saturating_sub(h) / 2,
        w,
        h,
    )
}

fn centered(area: Rect, pct_w: u16, pct_h: u16, min_w: u16, min_h: u16) -> Rect {
    let w = (area.width * pct_w / 100)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let h = (area.height * pct_h / 100)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    Rect::new(
        area.x + area.width.saturating_sub(w) / 2,
        area.y + area.height.saturating_sub(h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let l = compute_layout(area);
        assert_eq!(l.tabs.height, 1);
        assert_eq!(l.notice.height, 1);
        assert_eq!(l.status_bar.y, 23);
        assert_eq!(l.table.height, 21);
    }

    #[test]
    fn test_modal_is_centered_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let m = modal_area(area);
        assert_eq!(m, Rect::new(15, 4, 70, 32));
        assert!(area.contains(m.as_position()));
    }

    #[test]
    fn test_modal_on_tiny_terminal_stays_inside() {
        let area = Rect::new(0, 0, 30, 10);
        let m = modal_area(area);
        assert!(m.right() <= area.right());
        assert!(m.bottom() <= area.bottom());
        let c = confirm_area(area);
        assert!(c.right() <= area.right());
    }
}
