//! Normalizer specification models, report and error types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tidykit_io_xlsx::XlsxIoError;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Semantic field type derived from a column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumFieldKind {
    /// Person names: whitespace collapsed, title-cased.
    PersonName,
    /// Phone numbers: digits only, local leading zero.
    Phone,
    /// Dates: rendered `DD/MM/YYYY`, unparsable -> empty.
    Date,
    /// Passed through untouched.
    Other,
}

impl EnumFieldKind {
    /// Stable machine-readable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PersonName => "person_name",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EnumFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phone cleaning policy. The two policies are never mixed in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumPhonePolicy {
    /// Keep every digit; `84` prefix -> `0`; prepend `0` when missing; blank -> `""`.
    #[default]
    Strict,
    /// `84` prefix -> `0`; with >= 9 digits keep the last 9 behind one `0`;
    /// blank passes through unchanged.
    Suffix,
}

impl FromStr for EnumPhonePolicy {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "suffix" => Ok(Self::Suffix),
            other => Err(CleanError::InvalidOption(format!(
                "Unknown phone policy {other:?}; expected \"strict\" or \"suffix\"."
            ))),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Options for one normalize run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecNormalizeOptions {
    /// Phone policy applied to every phone column.
    pub phone_policy: EnumPhonePolicy,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Report

/// Per-column outcome of a normalize run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecColumnReport {
    /// Column name (unchanged by normalization).
    pub name: String,
    /// Classification used for the column.
    pub kind: EnumFieldKind,
    /// Number of cells whose text changed.
    pub cnt_changed: u64,
}

/// Aggregate outcome of a normalize run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecNormalizeReport {
    /// Data rows processed.
    pub n_rows: usize,
    /// Per-column outcomes, in column order.
    pub columns: Vec<SpecColumnReport>,
}

impl SpecNormalizeReport {
    /// Number of columns of the given kind.
    pub fn count_kind(&self, kind: EnumFieldKind) -> usize {
        self.columns.iter().filter(|col| col.kind == kind).count()
    }

    /// Total cells rewritten across all columns.
    pub fn cnt_changed_total(&self) -> u64 {
        self.columns.iter().map(|col| col.cnt_changed).sum()
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} rows={} cols={} name={} phone={} date={} changed={}",
            self.n_rows,
            self.columns.len(),
            self.count_kind(EnumFieldKind::PersonName),
            self.count_kind(EnumFieldKind::Phone),
            self.count_kind(EnumFieldKind::Date),
            self.cnt_changed_total()
        )
    }
}

impl fmt::Display for SpecNormalizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[NORMALIZE]"))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// "Normalize call failed" errors.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Reading the upload or writing the result failed.
    #[error(transparent)]
    Xlsx(#[from] XlsxIoError),
    /// Dataframe access failed.
    #[error("Dataframe error: {0}")]
    Frame(#[from] polars::prelude::PolarsError),
    /// An option value could not be parsed.
    #[error("{0}")]
    InvalidOption(String),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
