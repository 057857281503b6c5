pub mod csv_records;
pub mod error;
pub mod sheet;

pub use csv_records::{
    ColumnProfile, ColumnType, profile_columns, read_records, read_records_with_format,
};
pub use error::{IngestError, Result};
pub use sheet::SheetFormat;
