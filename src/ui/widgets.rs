//! Small rendering helpers shared by the listing, detail and wizard pages

use super::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListState},
    Frame,
};

/// Render a listing with the selected row kept on screen
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Tab bar with the active tab highlighted
pub fn tab_line(labels: &[&'static str], active: usize, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(palette.muted)));
        }
        let style = if i == active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(*label, style));
    }
    Line::from(spans)
}

/// `label: value` lines. Multi-line values start below their label.
pub fn label_value_lines(
    label: &'static str,
    value: String,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(palette.muted);
    let value_style = Style::default().fg(palette.text);
    if !value.contains('\n') {
        return vec![Line::from(vec![
            Span::styled(format!("{label}: "), label_style),
            Span::styled(value, value_style),
        ])];
    }
    let mut lines = vec![Line::from(Span::styled(format!("{label}:"), label_style))];
    lines.extend(
        value
            .lines()
            .map(|line| Line::from(Span::styled(format!("  {line}"), value_style))),
    );
    lines
}
