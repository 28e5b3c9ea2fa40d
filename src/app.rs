//! Application state and core logic

use crate::config::DeskConfig;
use crate::marketplace::{ListingBoard, SubmissionReceipt, Submitter};
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{
    AppState, FieldFocus, FieldKind, JobForm, ListingDetail, PartnerProfile, Transition, View,
    WizardController, WizardError, WizardForm,
};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Window for the second Ctrl+C of a double-tap quit
const CTRL_C_WINDOW: Duration = Duration::from_millis(1000);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Everything posted during this session
    pub board: ListingBoard,
    config: DeskConfig,
    /// Date used for form defaults and the past-date floor
    today: NaiveDate,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

/// What a key press did to a wizard
#[derive(Debug, Clone, PartialEq, Eq)]
enum WizardOutcome {
    Continue,
    Cancelled,
    Submitted(SubmissionReceipt),
}

impl App {
    pub fn new(config: DeskConfig, today: NaiveDate) -> Self {
        let state = AppState::new(config.ui_context());
        Self {
            state,
            board: ListingBoard::new(),
            config,
            today,
            quit: false,
            status_message: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return;
        }
        self.last_ctrl_c = None;

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Jobs | View::Partners => self.handle_listing_key(key),
            View::JobDetail => self.handle_detail_key(key, JobForm::TABS.len()),
            View::PartnerDetail => self.handle_detail_key(key, PartnerProfile::TABS.len()),
            View::PostJob => self.handle_post_job_key(key),
            View::PostPartner => self.handle_post_partner_key(key),
        }
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(previous) if now.duration_since(previous) <= CTRL_C_WINDOW => {
                tracing::info!("quit requested");
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        self.state.reset_selection();
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            self.state.reset_selection();
            return;
        }
        self.state.current_view = View::default();
    }

    /// Switch between top-level listing views
    fn switch_listing(&mut self, view: View) {
        if self.state.current_view != view {
            self.state.view_history.clear();
            self.state.current_view = view;
            self.state.reset_selection();
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) {
        let count = match self.state.current_view {
            View::Partners => self.board.partner_count(),
            _ => self.board.job_count(),
        };

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('1') => self.switch_listing(View::Jobs),
            KeyCode::Char('2') => self.switch_listing(View::Partners),
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(count),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => self.open_selected_detail(),
            KeyCode::Char('n') => match self.state.current_view {
                View::Partners => self.open_partner_wizard(),
                _ => self.open_job_wizard(),
            },
            _ => {}
        }
    }

    /// Open the detail page of the selected listing, if there is one
    fn open_selected_detail(&mut self) {
        let index = self.state.selected_index;
        let (reference, view) = match self.state.current_view {
            View::Partners => (
                self.board.partners().nth(index).map(|p| p.receipt.reference),
                View::PartnerDetail,
            ),
            _ => (
                self.board.jobs().nth(index).map(|p| p.receipt.reference),
                View::JobDetail,
            ),
        };
        if let Some(reference) = reference {
            tracing::debug!(%reference, "opening listing detail");
            self.navigate(view);
            self.state.open_detail(reference);
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent, tab_count: usize) {
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.state.cycle_detail_tab(tab_count, true)
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.state.cycle_detail_tab(tab_count, false)
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Esc | KeyCode::Backspace => {
                self.state.selected_listing = None;
                self.go_back();
            }
            _ => {}
        }
    }

    pub fn open_job_wizard(&mut self) {
        let rules = self.config.job_rules(self.today);
        tracing::debug!(?rules, "opening job wizard");
        self.state.discard_wizards();
        self.state.job_wizard = Some(WizardController::new(JobForm::new(self.today), rules));
        self.navigate(View::PostJob);
    }

    pub fn open_partner_wizard(&mut self) {
        tracing::debug!("opening partner wizard");
        self.state.discard_wizards();
        self.state.partner_wizard = Some(WizardController::new(PartnerProfile::default(), ()));
        self.navigate(View::PostPartner);
    }

    fn handle_post_job_key(&mut self, key: KeyEvent) {
        let Some(wizard) = self.state.job_wizard.as_mut() else {
            self.go_back();
            return;
        };
        let outcome = drive_wizard(
            wizard,
            &mut self.state.field_focus,
            &mut self.board,
            key,
            self.today,
        );
        self.finish_key(outcome, View::Jobs, "Job posted successfully");
    }

    fn handle_post_partner_key(&mut self, key: KeyEvent) {
        let Some(wizard) = self.state.partner_wizard.as_mut() else {
            self.go_back();
            return;
        };
        let outcome = drive_wizard(
            wizard,
            &mut self.state.field_focus,
            &mut self.board,
            key,
            self.today,
        );
        self.finish_key(outcome, View::Partners, "Partner profile created");
    }

    /// Apply the result of a wizard key press to the shell
    fn finish_key(
        &mut self,
        outcome: Result<WizardOutcome, WizardError>,
        listing: View,
        success: &str,
    ) {
        match outcome {
            Ok(WizardOutcome::Continue) => {}
            Ok(WizardOutcome::Cancelled) => {
                self.state.discard_wizards();
                self.go_back();
            }
            Ok(WizardOutcome::Submitted(receipt)) => {
                self.state.discard_wizards();
                self.switch_listing(listing);
                self.status_message = Some(format!(
                    "{success} (ref {})",
                    receipt.short_reference()
                ));
            }
            Err(err @ WizardError::StepIncomplete { .. }) => {
                self.status_message = Some(err.to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "wizard action failed");
                self.push_error(err.to_string());
            }
        }
    }
}

/// Map one key press onto a wizard operation.
///
/// Navigation keys work from any field; editing keys apply to the focused
/// field according to its kind.
fn drive_wizard<F, S>(
    wizard: &mut WizardController<F>,
    focus: &mut FieldFocus,
    submitter: &mut S,
    key: KeyEvent,
    today: NaiveDate,
) -> Result<WizardOutcome, WizardError>
where
    F: WizardForm,
    S: Submitter<F> + ?Sized,
{
    let visible = wizard.visible_fields();
    focus.clamp(visible.len());
    let shortcut = key.modifiers.contains(SHORTCUT_MODIFIER);

    match key.code {
        KeyCode::Esc => return Ok(WizardOutcome::Cancelled),
        KeyCode::Tab => focus.next(visible.len()),
        KeyCode::BackTab => focus.prev(visible.len()),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let step = wizard.active_step();
            let result = wizard.submit(submitter);
            if wizard.active_step() != step {
                focus.reset();
            }
            return result.map(WizardOutcome::Submitted);
        }
        KeyCode::PageDown => return advance(wizard, focus, submitter),
        KeyCode::Char('n') if shortcut => return advance(wizard, focus, submitter),
        KeyCode::PageUp => {
            if wizard.back() {
                focus.reset();
            }
        }
        KeyCode::Char('b') if shortcut => {
            if wizard.back() {
                focus.reset();
            }
        }
        KeyCode::F(n @ 1..=9) => {
            let target = usize::from(n - 1);
            if target != wizard.active_step() && wizard.go_to(target) {
                focus.reset();
            }
        }
        _ => {
            if let Some(field) = focus.focused(&visible) {
                edit_field(wizard, field, key, today)?;
            }
        }
    }
    Ok(WizardOutcome::Continue)
}

fn advance<F, S>(
    wizard: &mut WizardController<F>,
    focus: &mut FieldFocus,
    submitter: &mut S,
) -> Result<WizardOutcome, WizardError>
where
    F: WizardForm,
    S: Submitter<F> + ?Sized,
{
    match wizard.next(submitter)? {
        Transition::Advanced { .. } => {
            focus.reset();
            Ok(WizardOutcome::Continue)
        }
        Transition::Submitted(receipt) => Ok(WizardOutcome::Submitted(receipt)),
    }
}

/// Apply an editing key to one field. Keys that mean nothing for the
/// field's kind are ignored.
fn edit_field<F: WizardForm>(
    wizard: &mut WizardController<F>,
    field: F::Field,
    key: KeyEvent,
    today: NaiveDate,
) -> Result<(), WizardError> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return Ok(());
    }

    let spec = F::field_spec(field);
    let mut value = wizard.value(field);
    match (spec.kind, key.code) {
        (FieldKind::Text { .. }, KeyCode::Char(c)) => value.push_char(c),
        (FieldKind::Text { multiline: true }, KeyCode::Enter) => value.push_char('\n'),
        (_, KeyCode::Backspace) => value.pop_char(),
        (FieldKind::Choice(options), KeyCode::Right) => value.cycle_choice(options, true),
        (FieldKind::Choice(options), KeyCode::Left) => value.cycle_choice(options, false),
        (FieldKind::Date, KeyCode::Right) => value.shift_days(1, today),
        (FieldKind::Date, KeyCode::Left) => value.shift_days(-1, today),
        (FieldKind::Date, KeyCode::Char('t')) => {
            value = crate::state::FieldValue::Date(Some(today));
        }
        (FieldKind::Flag, KeyCode::Char(' ')) => value.toggle(),
        _ => return Ok(()),
    }
    wizard.set_value(field, value)
}
