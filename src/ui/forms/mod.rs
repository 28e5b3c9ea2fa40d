//! Form rendering module
//!
//! - `field_renderer`: one bordered field with its inline error
//! - `step_indicator`: breadcrumb row of wizard steps
//! - `wizard`: the page for the active step

mod field_renderer;
mod step_indicator;
mod wizard;

pub use wizard::draw_wizard;
