//! Detail pages for a single posted job or partner profile

use super::theme::Palette;
use super::widgets::{label_value_lines, tab_line};
use crate::app::App;
use crate::marketplace::Posted;
use crate::state::ListingDetail;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_job_detail(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let posted = app.state.selected_listing.and_then(|r| app.board.job(r));
    draw_detail(frame, area, posted, app, palette);
}

pub fn draw_partner_detail(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let posted = app.state.selected_listing.and_then(|r| app.board.partner(r));
    draw_detail(frame, area, posted, app, palette);
}

fn draw_detail<T: ListingDetail>(
    frame: &mut Frame,
    area: Rect,
    posted: Option<&Posted<T>>,
    app: &App,
    palette: &Palette,
) {
    let Some(posted) = posted else {
        let message = Paragraph::new("Listing not found")
            .style(Style::default().fg(palette.error))
            .block(
                Block::default()
                    .title(" Listing ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            );
        frame.render_widget(message, area);
        return;
    };
    let listing = &posted.listing;

    let block = Block::default()
        .title(format!(" {} ", listing.heading()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Byline and reference
            Constraint::Length(2), // Tabs
            Constraint::Min(0),    // Tab content
        ])
        .horizontal_margin(1)
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            listing.byline(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "#{}  posted {}",
                posted.receipt.short_reference(),
                posted.receipt.submitted_at.format("%Y-%m-%d %H:%M UTC")
            ),
            Style::default().fg(palette.muted),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    let tab = app.state.detail_tab.min(T::TABS.len().saturating_sub(1));
    frame.render_widget(Paragraph::new(tab_line(T::TABS, tab, palette)), chunks[1]);

    let content: Vec<Line> = listing
        .tab_rows(tab)
        .into_iter()
        .flat_map(|(label, value)| label_value_lines(label, value, palette))
        .collect();
    let body = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));
    frame.render_widget(body, chunks[2]);
}
