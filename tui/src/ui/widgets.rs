use ratatui::{
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
};

use crate::state::model::{SessionPhase, SessionView};

use super::theme::Theme;

const LINE_RESOLUTION: usize = 100;

pub fn header<'a>(view: &'a SessionView) -> Paragraph<'a> {
    let (phase, phase_style) = match view.phase {
        SessionPhase::Training => ("TRAINING", Theme::text()),
        SessionPhase::Finished => ("FINISHED", Theme::ok()),
        SessionPhase::Error => ("ERROR", Theme::error()),
    };

    let line1 = Line::from(vec![
        Span::styled("Linear Regression by Gradient Descent", Theme::title()),
        Span::raw("  |  "),
        Span::raw("Session: "),
        Span::styled(phase, phase_style),
    ]);

    let cost = view
        .costs
        .last()
        .map(|c| format!("{c:.4}"))
        .unwrap_or_else(|| "-".into());

    let line2 = Line::from(vec![Span::styled(
        format!(
            "Elapsed: {:02}:{:02}  |  Epoch: {} / {}  |  lr: {}  |  Cost: {}",
            view.elapsed.as_secs() / 60,
            view.elapsed.as_secs() % 60,
            view.costs.len(),
            view.epochs_total,
            view.learning_rate,
            cost
        ),
        Theme::dim(),
    )]);

    Paragraph::new(vec![line1, line2])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Overview")
                .border_style(Theme::border()),
        )
        .wrap(Wrap { trim: true })
}

/// Samples the current fitted line across the visible x-range.
pub fn fitted_line_points(view: &SessionView) -> Vec<(f64, f64)> {
    let [lo, hi] = view.x_bounds;
    let step = (hi - lo) / (LINE_RESOLUTION - 1) as f64;

    (0..LINE_RESOLUTION)
        .map(|i| {
            let x = lo + step * i as f64;
            (x, view.theta.predict(x as f32) as f64)
        })
        .collect()
}

/// Cost curve points against 1-based epoch numbers.
pub fn cost_points(view: &SessionView) -> Vec<(f64, f64)> {
    view.costs
        .iter()
        .enumerate()
        .map(|(i, c)| ((i + 1) as f64, *c as f64))
        .collect()
}

/// Scatter of the samples plus the fitted line, legend carrying the live
/// line equation.
pub fn regression_chart<'a>(view: &'a SessionView, line: &'a [(f64, f64)]) -> Chart<'a> {
    let equation = format!("y = {:.2} + {:.2}x", view.theta.intercept, view.theta.slope);

    let datasets = vec![
        Dataset::default()
            .name("Data")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Theme::dim())
            .data(&view.samples),
        Dataset::default()
            .name(equation)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::line())
            .data(line),
    ];

    let title = format!("Regression Line - Epoch {}", view.costs.len());

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Theme::border()),
        )
        .x_axis(axis("Normalized Median Income", view.x_bounds, 1))
        .y_axis(axis("Normalized House Value", view.y_bounds, 1))
}

/// Cost against epoch, growing as snapshots arrive.
pub fn cost_chart<'a>(view: &'a SessionView, points: &'a [(f64, f64)]) -> Chart<'a> {
    let datasets = vec![Dataset::default()
        .name("Cost (MSE)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Theme::cost())
        .data(points)];

    let x_hi = view.epochs_total.max(1) as f64;
    let y_hi = view.costs.iter().fold(1.0_f32, |acc, c| acc.max(*c)) as f64 * 1.05;

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Cost Function Convergence")
                .border_style(Theme::border()),
        )
        .x_axis(axis("Epoch", [1.0, x_hi], 0))
        .y_axis(axis("Cost (MSE)", [0.0, y_hi], 2))
}

pub fn logs<'a>(view: &'a SessionView) -> Paragraph<'a> {
    let tail = view.logs.iter().rev().take(8).rev();

    let lines = tail
        .map(|l| {
            let style = match l.level {
                "ERROR" => Theme::error(),
                _ => Theme::dim(),
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), style),
                Span::raw(l.message.as_str()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Events")
                .border_style(Theme::border()),
        )
        .wrap(Wrap { trim: true })
}

fn axis(title: &str, bounds: [f64; 2], precision: usize) -> Axis<'_> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    let labels = vec![
        Span::styled(format!("{:.prec$}", bounds[0], prec = precision), Theme::muted()),
        Span::styled(format!("{mid:.prec$}", prec = precision), Theme::muted()),
        Span::styled(format!("{:.prec$}", bounds[1], prec = precision), Theme::muted()),
    ];

    Axis::default()
        .title(Span::styled(title, Theme::muted()))
        .style(Theme::muted())
        .bounds(bounds)
        .labels(labels)
}
