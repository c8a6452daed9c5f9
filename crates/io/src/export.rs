//! Report export: one file per formatted table inside a timestamped results folder.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDateTime;
use salesgrid_analytics::TextGrid;
use unicode_width::UnicodeWidthStr;

use crate::error::IoError;

/// Folder name pattern under the configured results path.
pub const RESULTS_DIR_FORMAT: &str = "Analysis_Results_%Y-%m-%d_%H-%M-%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("unknown export format '{other}' (expected csv, json or text)")),
        }
    }
}

// ── Results folder ──────────────────────────────────────────────────

pub fn results_dir_name(at: NaiveDateTime) -> String {
    at.format(RESULTS_DIR_FORMAT).to_string()
}

/// Create `<base>/Analysis_Results_<timestamp>` (and any missing parents).
pub fn create_results_dir(base: &Path, at: NaiveDateTime) -> Result<PathBuf, IoError> {
    let dir = base.join(results_dir_name(at));
    std::fs::create_dir_all(&dir).map_err(|source| IoError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

// ── Writers ─────────────────────────────────────────────────────────

pub fn write_csv(grid: &TextGrid, writer: impl Write) -> Result<(), String> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(&grid.header)
        .map_err(|e| format!("CSV write error: {e}"))?;
    for row in &grid.rows {
        csv.write_record(row)
            .map_err(|e| format!("CSV write error: {e}"))?;
    }

    csv.flush().map_err(|e| format!("CSV flush error: {e}"))?;
    Ok(())
}

pub fn write_json(grid: &TextGrid, mut writer: impl Write) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut writer, grid)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    writeln!(writer).map_err(|e| e.to_string())
}

/// Column-aligned plain text with a rule under the header.
pub fn render_text(grid: &TextGrid) -> String {
    let mut widths: Vec<usize> = grid.header.iter().map(|h| h.width()).collect();
    for row in &grid.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell}{}", " ".repeat(w.saturating_sub(cell.width()))))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&line(&grid.header));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &grid.rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

pub fn write_grid(grid: &TextGrid, format: ExportFormat, mut writer: impl Write) -> Result<(), String> {
    match format {
        ExportFormat::Csv => write_csv(grid, writer),
        ExportFormat::Json => write_json(grid, writer),
        ExportFormat::Text => writer
            .write_all(render_text(grid).as_bytes())
            .map_err(|e| e.to_string()),
    }
}

/// Write each grid to `<dir>/<grid name>.<ext>`. Returns the written paths in order.
pub fn export_grids(dir: &Path, grids: &[TextGrid], format: ExportFormat) -> Result<Vec<PathBuf>, IoError> {
    let mut written = Vec::with_capacity(grids.len());
    for grid in grids {
        let path = dir.join(format!("{}.{}", grid.name, format.extension()));
        let write_err = |message: String| IoError::Write {
            path: path.clone(),
            message,
        };
        let file = File::create(&path).map_err(|e| write_err(e.to_string()))?;
        let mut out = BufWriter::new(file);
        write_grid(grid, format, &mut out).map_err(write_err)?;
        out.flush().map_err(|e| write_err(e.to_string()))?;
        written.push(path);
    }
    Ok(written)
}
