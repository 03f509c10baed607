//! Plain-text rendering of table contents for debugging.

use std::fmt::Write;

use super::Table;

/// Renders one line per row as `NN. v0\tv1\t...`.
pub fn render_table(table: &dyn Table) -> String {
    let mut out = String::new();
    for r in 0..table.num_rows() {
        let _ = write!(out, "{:02}. ", r);
        let fields: Vec<String> = (0..table.num_cols())
            .map(|c| table.get_int_field(r, c).to_string())
            .collect();
        out.push_str(&fields.join("\t"));
        out.push('\n');
    }
    out
}
