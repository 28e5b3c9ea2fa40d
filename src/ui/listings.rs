//! Listing views for posted jobs and partner profiles

use super::theme::Palette;
use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::{Membership, Priority};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn listing_block<'a>(title: String, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
}

fn draw_empty(frame: &mut Frame, area: Rect, title: String, message: &str, palette: &Palette) {
    let content = Paragraph::new(message)
        .style(Style::default().fg(palette.muted))
        .block(listing_block(title, palette));
    frame.render_widget(content, area);
}

fn row_prefix(is_selected: bool) -> &'static str {
    if is_selected {
        "▸ "
    } else {
        "  "
    }
}

/// Draw the posted jobs list
pub fn draw_jobs(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = format!(" Jobs ({}) ", app.board.job_count());
    if app.board.job_count() == 0 {
        draw_empty(
            frame,
            area,
            title,
            "No jobs posted yet.\nPress 'n' to post a job.",
            palette,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .board
        .jobs()
        .enumerate()
        .map(|(idx, posted)| {
            let job = &posted.listing;
            let is_selected = idx == app.state.selected_index;
            let style = if is_selected {
                Style::default().bg(palette.muted)
            } else {
                Style::default()
            };

            let (priority_label, priority_color) = match job.basic_info.priority {
                Some(Priority::High) => ("[high]", palette.error),
                Some(Priority::Medium) => ("[medium]", palette.warning),
                Some(Priority::Low) => ("[low]", palette.success),
                None => ("[-]", palette.muted),
            };
            let route = format!(
                "{} → {}",
                job.route_details.pickup_location, job.route_details.delivery_location
            );

            ListItem::new(Line::from(vec![
                Span::styled(row_prefix(is_selected), style),
                Span::styled(priority_label, Style::default().fg(priority_color)),
                Span::raw(" "),
                Span::styled(
                    job.basic_info.title.as_str(),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(route, Style::default().fg(palette.muted)),
                Span::raw("  "),
                Span::styled(
                    job.budget_info.budget.as_str(),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(
                    format!("  #{}", posted.receipt.short_reference()),
                    Style::default().fg(palette.muted),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(listing_block(title, palette));
    render_scrollable_list(frame, area, list, app.state.selected_index);
}

/// Draw the partner profiles list
pub fn draw_partners(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = format!(" Partners ({}) ", app.board.partner_count());
    if app.board.partner_count() == 0 {
        draw_empty(
            frame,
            area,
            title,
            "No partner profiles yet.\nPress 'n' to become a partner.",
            palette,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .board
        .partners()
        .enumerate()
        .map(|(idx, posted)| {
            let profile = &posted.listing;
            let is_selected = idx == app.state.selected_index;
            let style = if is_selected {
                Style::default().bg(palette.muted)
            } else {
                Style::default()
            };
            let company_type = profile
                .basic
                .company_type
                .map(|t| t.label())
                .unwrap_or("-");
            let premium = profile.contact.membership == Some(Membership::Premium);

            let mut spans = vec![
                Span::styled(row_prefix(is_selected), style),
                Span::styled(
                    profile.basic.company_name.as_str(),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(company_type, Style::default().fg(palette.accent)),
                Span::raw("  "),
                Span::styled(
                    profile.locations.headquarters.as_str(),
                    Style::default().fg(palette.muted),
                ),
            ];
            if premium {
                spans.push(Span::styled("  ★ premium", Style::default().fg(palette.warning)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(listing_block(title, palette));
    render_scrollable_list(frame, area, list, app.state.selected_index);
}
