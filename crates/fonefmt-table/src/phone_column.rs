use crate::error::Result;
use crate::table::Table;
use fonefmt_core::dto::ColumnReportDto;
use fonefmt_core::{classify_phone, PhoneOutcome};
use tracing::debug;

/// Rewrites every cell of `column` through the phone normalizer in place.
///
/// Rows too short to reach the column are left alone and counted as skipped.
pub fn format_phone_column(table: &mut Table, column: &str) -> Result<ColumnReportDto> {
    let index = table.column_index(column)?;
    debug!(column, index, "phone column resolved");

    let mut report = ColumnReportDto::new(table.headers[index].clone());
    for row in &mut table.rows {
        let Some(cell) = row.get_mut(index) else {
            report.skip();
            continue;
        };
        match classify_phone(cell) {
            PhoneOutcome::Formatted(value) => {
                *cell = value;
                report.record(true);
            }
            PhoneOutcome::Rejected => report.record(false),
        }
    }

    debug!(
        rows = report.rows,
        formatted = report.formatted,
        rejected = report.rejected,
        skipped = report.skipped,
        "phone column formatted"
    );
    Ok(report)
}
