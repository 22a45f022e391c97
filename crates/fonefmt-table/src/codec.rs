use crate::delimited::{read_delimited, write_delimited};
use crate::error::Result;
use crate::format::TableFormat;
use crate::table::Table;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Accept rows whose length differs from the header row.
    pub flexible: bool,
}

pub fn read_table(bytes: &[u8], format: TableFormat, options: &ReadOptions) -> Result<Table> {
    let table = match format.delimiter() {
        Some(delimiter) => read_delimited(bytes, delimiter, options.flexible)?,
        None => read_workbook(bytes)?,
    };
    debug!(
        %format,
        columns = table.headers.len(),
        rows = table.rows.len(),
        "table read"
    );
    Ok(table)
}

pub fn read_table_path(path: &Path, format: TableFormat, options: &ReadOptions) -> Result<Table> {
    let bytes = fs::read(path)?;
    read_table(&bytes, format, options)
}

pub fn write_table<W: Write>(writer: W, table: &Table, format: TableFormat) -> Result<()> {
    match format.delimiter() {
        Some(delimiter) => write_delimited(writer, table, delimiter)?,
        None => write_workbook(writer, table)?,
    }
    debug!(%format, rows = table.rows.len(), "table written");
    Ok(())
}

#[cfg(feature = "xlsx")]
fn read_workbook(bytes: &[u8]) -> Result<Table> {
    crate::xlsx::read_xlsx(bytes)
}

#[cfg(not(feature = "xlsx"))]
fn read_workbook(_bytes: &[u8]) -> Result<Table> {
    Err(xlsx_unavailable())
}

#[cfg(feature = "xlsx")]
fn write_workbook<W: Write>(writer: W, table: &Table) -> Result<()> {
    crate::xlsx::write_xlsx(writer, table)
}

#[cfg(not(feature = "xlsx"))]
fn write_workbook<W: Write>(_writer: W, _table: &Table) -> Result<()> {
    Err(xlsx_unavailable())
}

#[cfg(not(feature = "xlsx"))]
fn xlsx_unavailable() -> crate::error::TableError {
    crate::error::TableError::UnsupportedFormat(
        "xlsx (built without the `xlsx` feature)".to_string(),
    )
}
