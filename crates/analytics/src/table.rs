//! Typed report tables produced by the aggregations.
//!
//! Each column carries a [`ColumnKind`] fixed when the table is built, so the
//! formatter never has to guess whether a column is numeric.

use serde::Serialize;

/// How a column's cells are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Key column (seller, customer). Rendered verbatim.
    Identifier,
    /// Presence marker ("X" or empty). Rendered verbatim.
    Marker,
    /// Real-valued percentage. Rounded to an integer when rendered.
    Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A named table: first column is the index/key column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len(), "row width must match header");
        self.rows.push(row);
    }

    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Key-column value of each row, in row order.
    pub fn row_keys(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|r| r.first().and_then(Cell::as_text).unwrap_or(""))
            .collect()
    }

    /// Cell at (`key`, `column`), looking the row up by its key column.
    pub fn cell(&self, key: &str, column: &str) -> Option<&Cell> {
        let col = self.column_index(column)?;
        self.rows
            .iter()
            .find(|r| r.first().and_then(Cell::as_text) == Some(key))
            .and_then(|r| r.get(col))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
