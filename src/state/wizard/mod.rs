//! Multi-step form wizard
//!
//! [`WizardController`] owns one form for the length of a wizard session and
//! gates every forward move on the active step's validation.

mod controller;
mod error;

pub use controller::{StepStatus, Transition, WizardController};
pub use error::WizardError;
