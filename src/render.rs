//! Plain-text and JSON rendering of scaling results for the command line.

use crate::ingredient_model::ScaledResult;
use anyhow::Result;

const HEADERS: [&str; 4] = ["Ingredient", "Original", "Scaled", "Grams"];

/// Render results as an aligned four-column table
///
/// Columns are ingredient, original amount, scaled amount and weight. Each
/// column is padded to its widest cell, measured in characters.
pub fn render_table(results: &[ScaledResult]) -> String {
    let rows: Vec<[String; 4]> = results
        .iter()
        .map(|r| {
            [
                r.ingredient.clone(),
                r.original_display.clone(),
                r.scaled_display.clone(),
                r.mass.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

/// Render results as pretty-printed JSON
pub fn render_json(results: &[ScaledResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
