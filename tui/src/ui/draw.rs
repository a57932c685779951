use ratatui::{widgets::Block, Frame};

use crate::state::model::SessionView;

use super::{layout, theme::Theme, widgets};

/// Draws the entire UI.
pub fn draw(f: &mut Frame, view: &SessionView, show_logs: bool) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, body_area, logs_area) = layout::vertical(area, show_logs);
    let (line_area, cost_area) = layout::body(body_area);

    f.render_widget(widgets::header(view), header_area);

    let line = widgets::fitted_line_points(view);
    f.render_widget(widgets::regression_chart(view, &line), line_area);

    let costs = widgets::cost_points(view);
    f.render_widget(widgets::cost_chart(view, &costs), cost_area);

    if let Some(logs) = logs_area {
        f.render_widget(widgets::logs(view), logs);
    }
}
