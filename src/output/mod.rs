//! Output rendering for generated attractions.

mod csv;
mod table;

pub use csv::{render_csv, save_csv};
pub use table::{print_table, render_table};
