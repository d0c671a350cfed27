//! `tidykit_clean` v1:
//! Spreadsheet column normalizer.
//!
//! - `conf`      : keyword sets and cleaning constants
//! - `spec`      : field kinds/options/report/errors
//! - `classify`  : column name -> field kind
//! - `name`      : person-name cleaner
//! - `phone`     : phone-number cleaners (strict / suffix)
//! - `date`      : day-first date parser and `DD/MM/YYYY` renderer
//! - `normalize` : dispatch table and frame/bytes pipeline
pub mod classify;
pub mod conf;
pub mod date;
pub mod name;
pub mod normalize;
pub mod phone;
pub mod spec;

pub use classify::classify_column;
pub use date::{clean_date_column, format_date_column, parse_date_column, parse_date_dayfirst};
pub use name::clean_person_name;
pub use normalize::{derive_column_cleaner, normalize_dataframe, normalize_xlsx_bytes};
pub use phone::{clean_phone_number, clean_phone_number_suffix};
pub use spec::{
    CleanError, EnumFieldKind, EnumPhonePolicy, SpecColumnReport, SpecNormalizeOptions,
    SpecNormalizeReport,
};
