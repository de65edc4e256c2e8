//! Static spectrum plots: the OFDMA subcarrier stem plot and the slot
//! scheduling strip.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use wimaxlab_core::ofdm::Subcarrier;
use wimaxlab_core::qos::QosClass;

/// Render the subcarrier allocation as a stem plot: one column per carrier,
/// full-height stems for allocated carriers, a dot on the baseline otherwise.
pub fn render_subcarriers(frame: &mut Frame, area: Rect, map: &[Subcarrier]) {
    let width = area.width as usize;
    let height = area.height.saturating_sub(2) as usize;

    if height < 3 || width < map.len() {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, area);
        return;
    }

    let x_offset = (width - map.len()) / 2;

    for row in 0..height {
        let mut spans = Vec::new();
        if x_offset > 0 {
            spans.push(Span::raw(" ".repeat(x_offset)));
        }

        for sub in map {
            let (ch, style) = if sub.is_active() {
                if row == 0 {
                    ("●", Style::default().fg(Color::Yellow))
                } else {
                    ("│", Style::default().fg(Color::Cyan))
                }
            } else if row == height - 1 {
                ("·", Style::default().fg(Color::DarkGray))
            } else {
                (" ", Style::default())
            };
            spans.push(Span::styled(ch, style));
        }

        let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }

    // Baseline with index labels at both edges and the carrier center
    let label_y = area.y + height as u16;
    let first = map.first().map(|s| s.index).unwrap_or(0);
    let last = map.last().map(|s| s.index).unwrap_or(0);
    let mid_gap = map.len().saturating_sub(8) / 2;
    let label_line = Line::from(vec![
        Span::raw(" ".repeat(x_offset)),
        Span::styled(format!("{:<4}", first), Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(mid_gap)),
        Span::styled("0", Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(mid_gap.saturating_sub(1))),
        Span::styled(format!("{:>3}", last), Style::default().fg(Color::DarkGray)),
    ]);
    let label_area = Rect::new(area.x, label_y, area.width, 1);
    frame.render_widget(Paragraph::new(label_line), label_area);

    let caption = Line::from(Span::styled(
        "Subcarrier Index",
        Style::default().fg(Color::DarkGray),
    ));
    let caption_area = Rect::new(area.x, label_y + 1, area.width, 1);
    frame.render_widget(Paragraph::new(caption).centered(), caption_area);
}

/// Render the slot schedule as a bar strip: one light blue bar per slot with
/// its class label underneath.
pub fn render_schedule_strip(frame: &mut Frame, area: Rect, schedule: &[QosClass]) {
    if schedule.is_empty() || area.height < 2 {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, area);
        return;
    }

    let cell = ((area.width as usize) / schedule.len()).clamp(3, 6);

    let mut bar_spans = Vec::new();
    let mut label_spans = Vec::new();
    for slot in schedule {
        bar_spans.push(Span::styled(
            format!("{} ", "█".repeat(cell - 1)),
            Style::default().fg(Color::LightBlue),
        ));
        let mut label = slot.name().to_string();
        label.truncate(cell - 1);
        label_spans.push(Span::styled(
            format!("{:<width$}", label, width = cell),
            Style::default().fg(Color::DarkGray),
        ));
    }

    // Bars fill all rows above the label row
    let bar_rows = area.height - 1;
    for row in 0..bar_rows {
        let row_area = Rect::new(area.x, area.y + row, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(bar_spans.clone())), row_area);
    }

    let label_area = Rect::new(area.x, area.y + bar_rows, area.width, 1);
    frame.render_widget(Paragraph::new(Line::from(label_spans)), label_area);
}
