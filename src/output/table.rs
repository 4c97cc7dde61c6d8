//! Markdown table rendering for console display.

use crate::types::Attraction;

/// Shown when there is nothing to render.
const EMPTY_MESSAGE: &str = "No attractions to display.";

/// Render attractions as a Markdown table with a 1-based index column.
///
/// Returns a fixed message for an empty slice. Field values are written
/// as-is; a value containing `|` would break the table layout, but the
/// JSON shape requested from the model makes that unlikely.
#[must_use]
pub fn render_table(attractions: &[Attraction]) -> String {
    if attractions.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut table = String::new();
    table.push_str("| # | Attraction Name | Address | Description |\n");
    table.push_str("|----|-----------------|---------|-------------|");
    for (index, attraction) in attractions.iter().enumerate() {
        table.push_str(&format!(
            "\n| {} | {} | {} | {} |",
            index + 1,
            attraction.name,
            attraction.address,
            attraction.description
        ));
    }
    table
}

/// Print the rendered table to stdout.
pub fn print_table(attractions: &[Attraction]) {
    println!("{}", render_table(attractions));
}
