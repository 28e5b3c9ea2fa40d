//! UI module for rendering the TUI

mod components;
mod detail;
mod forms;
mod layout;
mod listings;
mod theme;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.state.ui.theme);
    let (sidebar_area, main_area) = layout::create_layout(frame.area(), &app.state.ui);

    layout::draw_sidebar(frame, sidebar_area, app, &palette);

    match app.state.current_view {
        View::Jobs => listings::draw_jobs(frame, main_area, app, &palette),
        View::Partners => listings::draw_partners(frame, main_area, app, &palette),
        View::JobDetail => detail::draw_job_detail(frame, main_area, app, &palette),
        View::PartnerDetail => detail::draw_partner_detail(frame, main_area, app, &palette),
        View::PostJob => {
            if let Some(wizard) = &app.state.job_wizard {
                let summary = wizard
                    .is_terminal_step()
                    .then(|| wizard.form().summary());
                forms::draw_wizard(
                    frame,
                    main_area,
                    wizard,
                    &app.state.field_focus,
                    View::PostJob.label(),
                    summary,
                    &palette,
                );
            }
        }
        View::PostPartner => {
            if let Some(wizard) = &app.state.partner_wizard {
                forms::draw_wizard(
                    frame,
                    main_area,
                    wizard,
                    &app.state.field_focus,
                    View::PostPartner.label(),
                    None,
                    &palette,
                );
            }
        }
    }

    layout::draw_status_bar(frame, app, &palette);

    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, &palette);
    }
}
