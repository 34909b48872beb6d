//! Text output for the `subnet-math` binary.
//!
//! - [`summary`] - rows describing one subnet
//! - [`terminal`] - field alignment helpers

mod summary;
mod terminal;

pub use summary::{print_summary, summary_rows, SummaryRow};
pub use terminal::format_row;
