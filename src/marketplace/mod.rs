//! Marketplace listings module
//!
//! The submission side of the wizards: the collaborator trait a finished form
//! is handed to, and the session-local board that implements it.

mod board;
mod traits;

pub use board::{ListingBoard, Posted};
pub use traits::{SubmissionError, SubmissionReceipt, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;
