//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldSpec, FieldValue};
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies, borders included
pub fn field_height(spec: &FieldSpec) -> u16 {
    if spec.kind.is_multiline() {
        6
    } else {
        3
    }
}

/// Key hint appended to the label of the focused field
fn kind_hint(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Text { multiline: true } => " Enter:newline",
        FieldKind::Text { multiline: false } => "",
        FieldKind::Choice(_) => " ←/→:choose",
        FieldKind::Flag => " Space:toggle",
        FieldKind::Date => " ←/→:day t:today",
    }
}

/// Draw one wizard field with its inline error, if any
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    value: &FieldValue,
    error: Option<&str>,
    is_active: bool,
    palette: &Palette,
) {
    let color = match (error, is_active) {
        (Some(_), _) => palette.error,
        (None, true) => palette.accent,
        (None, false) => palette.muted,
    };
    let style = Style::default().fg(if is_active { palette.accent } else { palette.text });

    let display_value = value.display_value(&spec.kind);
    let cursor = if is_active && matches!(spec.kind, FieldKind::Text { .. }) {
        "▌"
    } else {
        ""
    };

    let content = if display_value.is_empty() {
        let placeholder = if is_active { spec.placeholder } else { "(empty)" };
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, Style::default().fg(palette.accent)),
            Span::styled(placeholder, Style::default().fg(palette.muted)),
        ]))
    } else if spec.kind.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(palette.accent)));
        }
        Paragraph::new(lines)
    } else if is_active && matches!(spec.kind, FieldKind::Choice(_)) {
        Paragraph::new(Line::from(vec![
            Span::styled("◂ ", Style::default().fg(palette.muted)),
            Span::styled(display_value, style.add_modifier(Modifier::BOLD)),
            Span::styled(" ▸", Style::default().fg(palette.muted)),
        ]))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(palette.accent)),
        ]))
    };

    let hint = if is_active { kind_hint(&spec.kind) } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{} ", spec.label, hint))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(palette.error),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
