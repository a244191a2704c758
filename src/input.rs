use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::errors::ScanError;
use crate::models::INPUT_COLUMN;

/// Reads the `IP` column from the first worksheet of a spreadsheet.
///
/// Row 1 is the header and must read exactly `IP`. Values are returned in row
/// order as text, unmodified; empty cells are skipped. Addresses are not
/// validated.
pub fn load_identifiers(path: &Path) -> Result<Vec<String>, ScanError> {
    load_column(path, INPUT_COLUMN)
}

/// Reads a named column from the first worksheet (xlsx, xls, xlsb, ods).
pub fn load_column(path: &Path, column: &str) -> Result<Vec<String>, ScanError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        ScanError::Input(format!("Failed to open '{}': {}", path.display(), e))
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ScanError::Input(format!("'{}' contains no sheets", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ScanError::Input(format!("Failed to read sheet '{}': {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| ScanError::MissingColumn(column.to_string()))?;
    let col_idx = header
        .iter()
        .position(|cell| cell_to_text(cell) == column)
        .ok_or_else(|| ScanError::MissingColumn(column.to_string()))?;

    let mut values = Vec::new();
    for (offset, row) in rows.enumerate() {
        let text = row.get(col_idx).map(cell_to_text).unwrap_or_default();
        if text.is_empty() {
            // Header is row 1, so data starts at row 2
            tracing::warn!("Skipping blank '{}' cell at row {}", column, offset + 2);
            continue;
        }
        values.push(text);
    }

    tracing::info!(
        "Loaded {} value(s) from column '{}' of {}",
        values.len(),
        column,
        path.display()
    );
    Ok(values)
}

fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            // Integers without decimals
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{:?}", e),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
