use crate::error::{Result, TableError};
use crate::table::{SheetLayout, Table, TypedCell};
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use chrono::{Duration, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use std::collections::HashMap;
use std::io::{Cursor, Write};

// Whole floats below this bound render exactly as integers.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Reads the first worksheet; its first used row becomes the header row.
///
/// The sheet name, the position of the first used cell, and every
/// number/boolean/date cell are kept in [`SheetLayout`] so the table can be
/// written back in place.
pub fn read_xlsx(bytes: &[u8]) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let sheet_name = workbook
        .sheet_names()
        .into_iter()
        .next()
        .ok_or(TableError::EmptyInput)?;
    let range = workbook.worksheet_range(&sheet_name)?;
    let (start_row, start_col) = range.start().ok_or(TableError::EmptyInput)?;
    let origin = (start_row, cast_col_num(start_col as usize)?);

    let mut typed = HashMap::new();
    let mut grid = Vec::with_capacity(range.height());
    for (row_index, row) in range.rows().enumerate() {
        let mut texts = Vec::with_capacity(row.len());
        for (col, cell) in row.iter().enumerate() {
            let (text, kind) = read_cell(cell);
            if let Some(kind) = kind {
                typed.insert((row_index, col), kind);
            }
            texts.push(text);
        }
        grid.push(texts);
    }

    let mut grid = grid.into_iter();
    let headers = grid.next().ok_or(TableError::EmptyInput)?;
    if headers.is_empty() {
        return Err(TableError::EmptyInput);
    }

    let mut table = Table::new(headers, grid.collect());
    table.layout = SheetLayout {
        sheet_name: Some(sheet_name),
        origin,
        typed,
    };
    Ok(table)
}

/// Writes a single worksheet at the table's recorded origin.
///
/// A typed cell whose text still matches its rendering is written back with
/// its type; any other non-empty cell is written as a string.
pub fn write_xlsx<W: Write>(mut writer: W, table: &Table) -> Result<()> {
    let layout = &table.layout;
    let date_format = Format::new().set_num_format(DATE_FORMAT);
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    if let Some(name) = &layout.sheet_name {
        worksheet.set_name(name.as_str())?;
    }

    let (origin_row, origin_col) = layout.origin;
    let lines = std::iter::once(&table.headers).chain(table.rows.iter());
    for (row_index, line) in lines.enumerate() {
        let row_num = cast_row_num(origin_row as usize + row_index)?;
        for (col, text) in line.iter().enumerate() {
            let col_num = cast_col_num(usize::from(origin_col) + col)?;
            match layout.typed.get(&(row_index, col)) {
                Some(&cell) if render_cell(cell) == *text => match cell {
                    TypedCell::Number(value) => {
                        worksheet.write_number(row_num, col_num, value)?;
                    }
                    TypedCell::Bool(value) => {
                        worksheet.write_boolean(row_num, col_num, value)?;
                    }
                    TypedCell::DateTime(serial) => {
                        let format = if serial.fract() == 0.0 {
                            &date_format
                        } else {
                            &datetime_format
                        };
                        worksheet.write_number_with_format(row_num, col_num, serial, format)?;
                    }
                },
                _ if text.is_empty() => {}
                _ => {
                    worksheet.write_string(row_num, col_num, text.as_str())?;
                }
            }
        }
    }

    let buffer = workbook.save_to_buffer()?;
    writer.write_all(&buffer)?;
    writer.flush()?;
    Ok(())
}

/// Text shown for a typed cell; dates render as ISO 8601.
pub fn render_cell(cell: TypedCell) -> String {
    match cell {
        TypedCell::Number(value) => render_number(value),
        TypedCell::Bool(value) => value.to_string(),
        TypedCell::DateTime(serial) => {
            render_serial(serial).unwrap_or_else(|| render_number(serial))
        }
    }
}

fn read_cell(cell: &Data) -> (String, Option<TypedCell>) {
    let kind = match cell {
        Data::Empty => return (String::new(), None),
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => {
            return (value.clone(), None)
        }
        Data::Int(value) => TypedCell::Number(*value as f64),
        Data::Float(value) => TypedCell::Number(*value),
        Data::Bool(value) => TypedCell::Bool(*value),
        Data::DateTime(value) => TypedCell::DateTime(value.as_f64()),
        other => return (other.to_string(), None),
    };
    (render_cell(kind), Some(kind))
}

fn render_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_FLOAT {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn render_serial(serial: f64) -> Option<String> {
    let seconds = (serial * SECONDS_PER_DAY).round();
    if !seconds.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let at = epoch.checked_add_signed(Duration::try_seconds(seconds as i64)?)?;
    if seconds % SECONDS_PER_DAY == 0.0 {
        Some(at.format("%Y-%m-%d").to_string())
    } else {
        Some(at.format("%Y-%m-%dT%H:%M:%S").to_string())
    }
}

fn cast_row_num(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| TableError::TooLarge(format!("row index {value}")))
}

fn cast_col_num(value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| TableError::TooLarge(format!("column index {value}")))
}
