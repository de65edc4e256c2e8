//! Line charts built on the ratatui `Chart` widget: the log-scale BER
//! reference curve and the two-panel live monitor view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use wimaxlab_core::link;
use wimaxlab_core::monitor::{MONITOR_STEPS, MonitorSample};

use super::value_bounds;

/// Floor for the log-scale plot; BER underflows to exactly zero at high SNR.
const LOG_BER_FLOOR: f64 = -12.0;

/// Render the BER-vs-SNR reference curve on a log10 y-axis.
pub fn render_ber_curve(frame: &mut Frame, area: Rect) {
    let data: Vec<(f64, f64)> = link::ber_curve(link::BER_CURVE_POINTS)
        .into_iter()
        .map(|(snr, ber)| (snr, ber.max(10f64.powf(LOG_BER_FLOOR)).log10()))
        .collect();

    let dataset = Dataset::default()
        .name("QPSK approx.")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Red))
        .data(&data);

    let (lo, hi) = link::BER_CURVE_SNR_DB;
    let x_axis = Axis::default()
        .title("SNR (dB)".dark_gray())
        .bounds([lo, hi])
        .labels(vec![
            Span::raw(format!("{lo:.0}")),
            Span::raw(format!("{:.0}", (lo + hi) / 2.0)),
            Span::raw(format!("{hi:.0}")),
        ]);

    let y_axis = Axis::default()
        .title("BER (log scale)".dark_gray())
        .bounds([LOG_BER_FLOOR, 0.0])
        .labels(vec![
            Span::raw("1e-12"),
            Span::raw("1e-6"),
            Span::raw("1e0"),
        ]);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("BER vs SNR (QPSK Approximation)"),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Render the live monitor's two stacked panels: BER over time and throughput
/// over time, growing left to right as the run progresses.
pub fn render_monitor_panels(frame: &mut Frame, area: Rect, samples: &[MonitorSample]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let ber_data: Vec<(f64, f64)> = samples.iter().map(|s| (s.t as f64, s.ber)).collect();
    let thr_data: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| (s.t as f64, s.throughput_bps / 1e6))
        .collect();

    render_time_panel(
        frame,
        chunks[0],
        "BER over Time",
        "BER",
        &ber_data,
        Color::Red,
        false,
    );
    render_time_panel(
        frame,
        chunks[1],
        "Throughput over Time",
        "Mbps",
        &thr_data,
        Color::Green,
        true,
    );
}

fn render_time_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    y_title: &str,
    data: &[(f64, f64)],
    color: Color,
    label_time_axis: bool,
) {
    let (y_min, y_max) = value_bounds(data.iter().map(|(_, y)| *y));
    let padding = ((y_max - y_min).abs()).max(y_max.abs() * 0.05).max(1e-9) * 0.1;
    let bounds = [(y_min - padding).max(0.0), y_max + padding];

    let dataset = Dataset::default()
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data);

    let max_t = (MONITOR_STEPS - 1) as f64;
    let mut x_axis = Axis::default().bounds([0.0, max_t]);
    if label_time_axis {
        x_axis = x_axis.title("Time (s)".dark_gray()).labels(vec![
            Span::raw("0"),
            Span::raw(format!("{:.0}", max_t / 2.0)),
            Span::raw(format!("{max_t:.0}")),
        ]);
    }

    let y_axis = Axis::default()
        .title(y_title.dark_gray())
        .bounds(bounds)
        .labels(vec![
            Span::raw(format!("{:.4}", bounds[0])),
            Span::raw(format!("{:.4}", bounds[1])),
        ]);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}
