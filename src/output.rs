use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use std::path::{Path, PathBuf};

use crate::errors::ScanError;
use crate::models::{EnrichmentResult, FieldValue, COLUMN_HEADERS};
use crate::time::file_stamp;

/// Extra characters added to the widest value of each column.
pub const COLUMN_PADDING: usize = 2;

/// `output_results_<YYYY-MM-DD_HH-MM-SS>.xlsx`, stamped in Kolkata time.
pub fn output_file_name(now: DateTime<Utc>) -> String {
    format!("output_results_{}.xlsx", file_stamp(now))
}

pub fn output_path(dir: &Path, now: DateTime<Utc>) -> PathBuf {
    dir.join(output_file_name(now))
}

/// Width of each output column: longest rendered value (header included)
/// plus `COLUMN_PADDING`.
pub fn column_widths(results: &[EnrichmentResult]) -> Vec<usize> {
    let mut widths: Vec<usize> = COLUMN_HEADERS.iter().map(|h| h.chars().count()).collect();
    for result in results {
        for (idx, cell) in result.cells().iter().enumerate() {
            widths[idx] = widths[idx].max(cell.to_string().chars().count());
        }
    }
    widths.into_iter().map(|w| w + COLUMN_PADDING).collect()
}

/// Writes the header row and one row per result, every cell centered
/// horizontally and vertically, columns sized by [`column_widths`].
pub fn write_results(path: &Path, results: &[EnrichmentResult]) -> Result<(), ScanError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let centered = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (col, header) in COLUMN_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &centered)
            .map_err(|e| ScanError::Spreadsheet(format!("Failed to write header: {}", e)))?;
    }

    for (idx, result) in results.iter().enumerate() {
        let row = (idx + 1) as u32;
        for (col, cell) in result.cells().iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell, &centered)?;
        }
    }

    for (col, width) in column_widths(results).into_iter().enumerate() {
        worksheet
            .set_column_width(col as u16, width as f64)
            .map_err(|e| ScanError::Spreadsheet(format!("Failed to set column {} width: {}", col, e)))?;
    }

    workbook.save(path).map_err(|e| {
        ScanError::Spreadsheet(format!("Failed to save '{}': {}", path.display(), e))
    })?;

    tracing::info!("Wrote {} row(s) to {}", results.len(), path.display());
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &FieldValue,
    format: &Format,
) -> Result<(), ScanError> {
    let written = match cell {
        FieldValue::Text(s) if s.is_empty() => worksheet.write_blank(row, col, format),
        FieldValue::Text(s) => worksheet.write_string_with_format(row, col, s, format),
        FieldValue::Bool(b) => worksheet.write_boolean_with_format(row, col, *b, format),
        FieldValue::Integer(n) => worksheet.write_number_with_format(row, col, *n as f64, format),
        FieldValue::Float(n) => worksheet.write_number_with_format(row, col, *n, format),
    };
    written
        .map(|_| ())
        .map_err(|e| ScanError::Spreadsheet(format!("Failed to write cell ({}, {}): {}", row, col, e)))
}
