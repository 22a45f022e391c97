use crate::error::{Result, TableError};
use std::collections::HashMap;

/// A header row plus data rows, all cells kept as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub layout: SheetLayout,
}

/// Where a table sat in a workbook and which cells were not plain text.
///
/// Delimited formats leave this at its default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetLayout {
    pub sheet_name: Option<String>,
    /// Zero-based (row, column) of the first header cell.
    pub origin: (u32, u16),
    /// Keyed by (row, column) with row 0 the header row and row `i + 1`
    /// the data row `rows[i]`.
    pub typed: HashMap<(usize, usize), TypedCell>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedCell {
    Number(f64),
    Bool(bool),
    /// Excel serial date, days since 1899-12-30.
    DateTime(f64),
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            layout: SheetLayout::default(),
        }
    }

    /// Finds a column by exact name, then by trimmed ASCII-case-insensitive name.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        if let Some(index) = self.headers.iter().position(|header| header == name) {
            return Ok(index);
        }
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }
}
