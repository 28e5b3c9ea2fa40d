//! Wizard page rendering, shared by every multi-step form

use super::field_renderer::{draw_field, field_height};
use super::step_indicator::draw_step_indicator;
use crate::state::{FieldFocus, WizardController, WizardForm};
use crate::ui::theme::Palette;
use crate::ui::widgets::label_value_lines;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Index of the first field to draw so the focused one fits in `available` rows
fn first_visible_field(heights: &[u16], focused: usize, available: u16) -> usize {
    let focused = focused.min(heights.len().saturating_sub(1));
    let mut start = 0;
    while start < focused && heights[start..=focused].iter().sum::<u16>() > available {
        start += 1;
    }
    start
}

/// Draw the active step of a wizard.
///
/// `summary` is rendered below the fields as a review block.
pub fn draw_wizard<F: WizardForm>(
    frame: &mut Frame,
    area: Rect,
    wizard: &WizardController<F>,
    focus: &FieldFocus,
    title: &str,
    summary: Option<Vec<(&'static str, String)>>,
    palette: &Palette,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary_height = summary
        .as_ref()
        .map(|lines| lines.len() as u16 + 2)
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Step indicator
            Constraint::Length(2),              // Step heading
            Constraint::Min(0),                 // Fields
            Constraint::Length(summary_height), // Review
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_step_indicator(frame, chunks[0], &wizard.step_statuses(), palette);

    let step = wizard.current_step();
    let mut heading = vec![
        Span::styled(
            format!("Step {} of {}: ", wizard.active_step() + 1, wizard.steps().len()),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            step.label,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let flagged = wizard.errors().len();
    if flagged > 0 {
        heading.push(Span::styled(
            format!("  {flagged} field(s) need attention"),
            Style::default().fg(palette.error),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(heading)), chunks[1]);

    let fields = wizard.visible_fields();
    let specs: Vec<_> = fields.iter().map(|f| F::field_spec(*f)).collect();
    let heights: Vec<u16> = specs.iter().map(field_height).collect();
    let start = first_visible_field(&heights, focus.index(), chunks[2].height);

    let mut y = chunks[2].y;
    let bottom = chunks[2].y + chunks[2].height;
    for (index, field) in fields.iter().enumerate().skip(start) {
        let height = heights[index];
        if y + height > bottom {
            break;
        }
        let area = Rect {
            x: chunks[2].x,
            y,
            width: chunks[2].width,
            height,
        };
        draw_field(
            frame,
            area,
            &specs[index],
            &wizard.value(*field),
            wizard.error(*field),
            index == focus.index(),
            palette,
        );
        y += height;
    }

    if let Some(lines) = summary {
        let content: Vec<Line> = lines
            .into_iter()
            .flat_map(|(label, value)| label_value_lines(label, value, palette))
            .collect();
        let review = Paragraph::new(content).block(
            Block::default()
                .title(" Review ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        );
        frame.render_widget(review, chunks[3]);
    }
}
