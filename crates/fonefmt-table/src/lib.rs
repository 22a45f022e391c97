pub mod codec;
pub mod delimited;
pub mod error;
pub mod format;
pub mod paths;
pub mod phone_column;
pub mod table;
#[cfg(feature = "xlsx")]
pub mod xlsx;

pub use codec::{read_table, read_table_path, write_table, ReadOptions};
pub use error::{Result, TableError};
pub use format::TableFormat;
pub use phone_column::format_phone_column;
pub use table::{SheetLayout, Table, TypedCell};
