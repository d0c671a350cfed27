//! `tidykit_io_xlsx` v1:
//! Rust-side XLSX reader/writer kernel.
//!
//! - `conf`   : constants and default presets
//! - `spec`   : specs/models/options/errors
//! - `util`   : pure helper functions
//! - `reader` : xlsx bytes -> text DataFrame
//! - `writer` : DataFrame -> one styled, text-forced `Data` sheet as xlsx bytes
pub mod conf;
pub mod reader;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_MIME_XLSX, C_NUM_FORMAT_TEXT, C_PREFIX_FILE_NORMALIZED, C_SHEET_NAME_DEFAULT,
    N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
};
pub use reader::read_xlsx_bytes;
pub use spec::{
    EnumCellValue, SpecAutofitCellsPolicy, SpecCellFormat, SpecXlsxReport, XlsxIoError,
};
pub use util::derive_normalized_file_name;
pub use writer::{write_xlsx_bytes, write_xlsx_bytes_with_report};
