//! Column-aligned text tables.
//!
//! Every column except the last is padded to its widest cell plus [`PADDING`] spaces. The last cell of each row is
//! written as-is, so rows never carry trailing whitespace.

use std::fmt::Write as _;

/// Spaces between a column's widest cell and the next column.
pub const PADDING: usize = 4;

#[derive(Debug, Default, Clone)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Render every row, each terminated by `\n`.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            // The last cell never contributes to a column width.
            let padded = row.len().saturating_sub(1);
            for (i, cell) in row.iter().take(padded).enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }

        let mut out = String::new();
        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                if i == last {
                    out.push_str(cell);
                } else {
                    let width = widths.get(i).copied().unwrap_or(0) + PADDING;
                    let _ = write!(out, "{cell:<width$}");
                }
            }
            out.push('\n');
        }
        out
    }
}
