//! Application state definitions

use super::focus::FieldFocus;
use super::forms::{JobForm, PartnerProfile};
use super::wizard::WizardController;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Jobs,
    Partners,
    JobDetail,
    PartnerDetail,
    PostJob,
    PostPartner,
}

impl View {
    /// Views that host a wizard and own its in-progress form
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::PostJob | View::PostPartner)
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Jobs => "Jobs",
            View::Partners => "Partners",
            View::JobDetail => "Job Details",
            View::PartnerDetail => "Partner Profile",
            View::PostJob => "Post a Job",
            View::PostPartner => "Become a Partner",
        }
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Ambient UI settings handed to every draw function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiContext {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    pub ui: UiContext,

    // Wizard sessions, alive only while their view is open
    pub job_wizard: Option<WizardController<JobForm>>,
    pub partner_wizard: Option<WizardController<PartnerProfile>>,
    pub field_focus: FieldFocus,

    // Listing selection
    pub selected_index: usize,

    // Detail page of one posted listing
    pub selected_listing: Option<Uuid>,
    pub detail_tab: usize,
    pub scroll_offset: usize,

    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            ..Self::default()
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Point the detail page at a listing, starting on its first tab
    pub fn open_detail(&mut self, reference: Uuid) {
        self.selected_listing = Some(reference);
        self.detail_tab = 0;
        self.scroll_offset = 0;
    }

    /// Cycle detail tabs, wrapping at both ends
    pub fn cycle_detail_tab(&mut self, tab_count: usize, forward: bool) {
        if tab_count == 0 {
            return;
        }
        self.detail_tab = if forward {
            (self.detail_tab + 1) % tab_count
        } else {
            (self.detail_tab + tab_count - 1) % tab_count
        };
        self.scroll_offset = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Drop any wizard in progress along with its focus
    pub fn discard_wizards(&mut self) {
        self.job_wizard = None;
        self.partner_wizard = None;
        self.field_focus.reset();
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Oldest undismissed error
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::date;
    use crate::state::JobRules;

    #[test]
    fn test_default_view_is_jobs() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Jobs);
        assert!(!state.current_view.is_form_view());
        assert!(View::PostPartner.is_form_view());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
        state.dismiss_error();
        assert_eq!(state.current_error(), None);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = AppState::default();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down(2);
        state.move_selection_down(2);
        assert_eq!(state.selected_index, 1);
        state.move_selection_down(0);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_open_detail_starts_on_first_tab() {
        let mut state = AppState::default();
        state.detail_tab = 3;
        state.scroll_offset = 7;
        let reference = Uuid::new_v4();
        state.open_detail(reference);
        assert_eq!(state.selected_listing, Some(reference));
        assert_eq!(state.detail_tab, 0);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_detail_tabs_wrap() {
        let mut state = AppState::default();
        state.cycle_detail_tab(5, false);
        assert_eq!(state.detail_tab, 4);
        state.cycle_detail_tab(5, true);
        assert_eq!(state.detail_tab, 0);
        state.cycle_detail_tab(0, true);
        assert_eq!(state.detail_tab, 0);
    }

    #[test]
    fn test_switching_tab_resets_scroll() {
        let mut state = AppState::default();
        state.scroll_down();
        state.scroll_down();
        assert_eq!(state.scroll_offset, 2);
        state.cycle_detail_tab(4, true);
        assert_eq!(state.scroll_offset, 0);
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_discard_wizards() {
        let mut state = AppState::default();
        state.job_wizard = Some(WizardController::new(
            JobForm::new(date(2025, 5, 1)),
            JobRules::default(),
        ));
        state.field_focus.next(4);
        state.discard_wizards();
        assert!(state.job_wizard.is_none());
        assert_eq!(state.field_focus.index(), 0);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, Theme::Dark);
    }
}
