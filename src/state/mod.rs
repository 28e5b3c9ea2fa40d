//! Application state module

mod app_state;
mod focus;
mod forms;
mod wizard;

pub use app_state::*;
pub use focus::FieldFocus;
pub use forms::*;
pub use wizard::*;

#[cfg(test)]
pub(crate) use forms::fixtures;
