use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};

use super::domain::FieldValue;
use super::record::ScreeningBatch;

pub const DEFAULT_CSV_FILE_NAME: &str = "synthetic_ai_system.csv";
pub const DEFAULT_XLSX_FILE_NAME: &str = "synthetic_ai_system.xlsx";

const XLSX_MAX_ROWS: usize = 1_048_576;
const XLSX_MAX_COLUMNS: usize = 16_384;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no data generated; nothing to export")]
    NoData,
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("export io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("xlsx export failed: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("batch does not fit in a worksheet ({rows} rows, {columns} columns)")]
    SheetBounds { rows: usize, columns: usize },
}

/// Write the batch as CSV with one column per field seen in any record.
pub fn write_csv<W: Write>(batch: &ScreeningBatch, writer: W) -> Result<(), ExportError> {
    if batch.is_empty() {
        return Err(ExportError::NoData);
    }

    let (columns, rows) = batch.rows();
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&columns)?;

    for row in rows {
        csv_writer.write_record(
            row.iter()
                .map(|cell| cell.as_ref().map(ToString::to_string).unwrap_or_default()),
        )?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_bytes(batch: &ScreeningBatch) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    write_csv(batch, &mut buffer)?;
    Ok(buffer)
}

/// Single-sheet workbook with the same header and cell layout as the CSV export.
/// Counts are written as numbers and absent fields are left blank.
fn build_workbook(batch: &ScreeningBatch) -> Result<Workbook, ExportError> {
    if batch.is_empty() {
        return Err(ExportError::NoData);
    }

    let (columns, rows) = batch.rows();
    if rows.len() >= XLSX_MAX_ROWS || columns.len() > XLSX_MAX_COLUMNS {
        return Err(ExportError::SheetBounds {
            rows: rows.len(),
            columns: columns.len(),
        });
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, column) in (0..).zip(&columns) {
        worksheet.write_string(0, col, column.as_str())?;
    }

    for (row, cells) in (1..).zip(&rows) {
        for (col, cell) in (0..).zip(cells) {
            match cell {
                Some(FieldValue::Text(text)) => {
                    worksheet.write_string(row, col, text.as_str())?;
                }
                Some(FieldValue::Integer(value)) => {
                    worksheet.write_number(row, col, *value as f64)?;
                }
                None => {}
            }
        }
    }

    Ok(workbook)
}

pub fn write_xlsx(batch: &ScreeningBatch, path: impl AsRef<Path>) -> Result<(), ExportError> {
    build_workbook(batch)?.save(path)?;
    Ok(())
}

pub fn to_xlsx_bytes(batch: &ScreeningBatch) -> Result<Vec<u8>, ExportError> {
    Ok(build_workbook(batch)?.save_to_buffer()?)
}
