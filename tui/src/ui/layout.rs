use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computes the main layout regions.
///
/// # Returns
/// (header, body, logs_opt)
pub fn vertical(area: Rect, show_logs: bool) -> (Rect, Rect, Option<Rect>) {
    let constraints = if show_logs {
        vec![
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(10),
        ]
    } else {
        vec![Constraint::Length(4), Constraint::Min(10)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header = chunks[0];
    let body = chunks[1];
    let logs = if show_logs { Some(chunks[2]) } else { None };

    (header, body, logs)
}

/// Splits the body into the two side-by-side chart panes:
/// (regression line, cost curve).
pub fn body(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    (cols[0], cols[1])
}
