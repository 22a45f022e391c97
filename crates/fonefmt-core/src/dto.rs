use crate::domain::phone::classify_phone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneResultDto {
    pub input: String,
    pub output: String,
    pub formatted: bool,
}

impl PhoneResultDto {
    pub fn from_raw(raw: &str) -> Self {
        let outcome = classify_phone(raw);
        let formatted = outcome.is_formatted();
        Self {
            input: raw.to_string(),
            output: outcome.into_string_or(raw),
            formatted,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReportDto {
    pub column: String,
    pub rows: usize,
    pub formatted: usize,
    pub rejected: usize,
    pub skipped: usize,
}

impl ColumnReportDto {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, formatted: bool) {
        self.rows += 1;
        if formatted {
            self.formatted += 1;
        } else {
            self.rejected += 1;
        }
    }

    /// Counts a row that has no cell for the column.
    pub fn skip(&mut self) {
        self.rows += 1;
        self.skipped += 1;
    }
}
