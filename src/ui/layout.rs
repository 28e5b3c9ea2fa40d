//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use super::theme::Palette;
use crate::app::App;
use crate::platform::{BACK_SHORTCUT, NEXT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{UiContext, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar items: key, label and the listing they open
const SIDEBAR_ITEMS: &[(&str, &str, View)] = &[
    ("1", "Jobs", View::Jobs),
    ("2", "Partners", View::Partners),
];

const SIDEBAR_WIDTH: u16 = 20;
const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;

/// Create the main layout with sidebar, reserving the bottom line for the status bar
pub fn create_layout(area: Rect, ui: &UiContext) -> (Rect, Rect) {
    let sidebar_width = if ui.sidebar_collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(SIDEBAR_ITEMS.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, (key, label, view)) in SIDEBAR_ITEMS.iter().enumerate() {
        let is_selected = match app.state.current_view {
            View::PostJob | View::JobDetail => *view == View::Jobs,
            View::PostPartner | View::PartnerDetail => *view == View::Partners,
            current => current == *view,
        };
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            key,
            label,
            is_selected,
            app.state.ui.sidebar_collapsed,
            palette,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.label()),
        Style::default().fg(palette.accent),
    )];

    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(palette.bar_fg)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.success)));
    }

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bar_bg));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(palette.bar_bg).fg(palette.bar_fg));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Jobs => "j/k:nav  Enter:open  n:post job  1/2:view  q:quit".to_string(),
        View::Partners => "j/k:nav  Enter:open  n:new partner  1/2:view  q:quit".to_string(),
        View::JobDetail | View::PartnerDetail => "Tab/←→:tab  j/k:scroll  Esc:back".to_string(),
        View::PostJob | View::PostPartner => format!(
            "Tab:field  PgDn/{NEXT_SHORTCUT}:next  PgUp/{BACK_SHORTCUT}:back  F1-F9:step  {SUBMIT_SHORTCUT}:submit  Esc:discard"
        ),
    }
}
