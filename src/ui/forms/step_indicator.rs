//! Breadcrumb row showing wizard progress

use crate::state::StepStatus;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn marker(status: &StepStatus) -> &'static str {
    if status.completed {
        "✓"
    } else if status.active {
        "●"
    } else {
        "○"
    }
}

/// One span group per step: marker, F-key number and label
fn step_line(statuses: &[StepStatus], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, status) in statuses.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(palette.muted)));
        }
        let style = if status.active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else if status.completed {
            Style::default().fg(palette.success)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(
            format!("{} {} {}", marker(status), status.index + 1, status.label),
            style,
        ));
    }
    Line::from(spans)
}

pub fn draw_step_indicator(
    frame: &mut Frame,
    area: Rect,
    statuses: &[StepStatus],
    palette: &Palette,
) {
    frame.render_widget(Paragraph::new(step_line(statuses, palette)), area);
}
