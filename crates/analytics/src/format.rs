//! Report table → display-ready text grid.
//!
//! Percentages are rounded half-to-even (12.5 → "12", 13.5 → "14"), then every
//! cell that reads exactly `"0"` is blanked, whatever its column kind.

use serde::Serialize;

use crate::table::{Cell, ColumnKind, ReportTable};

/// A table where every cell is text, ready for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextGrid {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TextGrid {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text at (`key`, `column`), looking the row up by its first cell.
    pub fn get(&self, key: &str, column: &str) -> Option<&str> {
        let col = self.header.iter().position(|h| h == column)?;
        self.rows
            .iter()
            .find(|r| r.first().map(String::as_str) == Some(key))
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }
}

/// Render a percentage as its nearest integer.
pub fn round_percentage(value: f64) -> String {
    let rounded = value.round_ties_even();
    if rounded == 0.0 {
        // Drop the sign of -0.
        return "0".to_string();
    }
    format!("{rounded:.0}")
}

fn render(cell: &Cell, kind: ColumnKind) -> String {
    match (cell, kind) {
        (Cell::Number(v), ColumnKind::Percentage) => round_percentage(*v),
        (Cell::Number(v), _) => v.to_string(),
        (Cell::Text(s), _) => s.clone(),
        (Cell::Empty, _) => String::new(),
    }
}

pub fn format_table(table: &ReportTable) -> TextGrid {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&table.columns)
                .map(|(cell, column)| render(cell, column.kind))
                .map(|text| if text == "0" { String::new() } else { text })
                .collect()
        })
        .collect();

    TextGrid {
        name: table.name.clone(),
        header: table.columns.iter().map(|c| c.name.clone()).collect(),
        rows,
    }
}
