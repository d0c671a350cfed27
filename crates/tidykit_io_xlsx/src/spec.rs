//! Shared XLSX specification models and error types.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification, overlaid with right-side-wins semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,

    /// Number format code.
    pub num_format: Option<String>,
    /// Background fill color (`#RRGGBB`).
    pub bg_color: Option<String>,
    /// Font color (`#RRGGBB`).
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            border: other.border.or(self.border),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }

    /// Whether the number format forces Excel to keep the cell as text.
    pub fn is_text_forced(&self) -> bool {
        self.num_format.as_deref() == Some(crate::conf::C_NUM_FORMAT_TEXT)
    }
}

/// Normalized cell value during the write pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Autofit

/// Autofit bounds: width = longest cell + padding, clamped to `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAutofitCellsPolicy {
    /// Minimum final width.
    pub width_cell_min: usize,
    /// Maximum final width.
    pub width_cell_max: usize,
    /// Width padding added after inference.
    pub width_cell_padding: usize,
}

impl Default for SpecAutofitCellsPolicy {
    fn default() -> Self {
        Self {
            width_cell_min: 1,
            width_cell_max: crate::conf::N_WIDTH_CELL_MAX_DEFAULT,
            width_cell_padding: 2,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Outcome of writing the `Data` sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecXlsxReport {
    /// Number of data rows written (header excluded).
    pub n_rows: usize,
    /// Number of columns written.
    pub n_cols: usize,
    /// Final width applied to each column.
    pub widths: Vec<f64>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Errors raised while reading or writing workbooks.
#[derive(Debug, Error)]
pub enum XlsxIoError {
    /// Uploaded bytes are not a readable xlsx workbook.
    #[error("Failed to open Excel file: {0}")]
    Open(#[from] calamine::XlsxError),
    /// Workbook has no worksheet to read.
    #[error("No worksheet found in Excel file.")]
    NoWorksheet,
    /// Dataframe construction or access failed.
    #[error("Dataframe error: {0}")]
    Frame(#[from] polars::prelude::PolarsError),
    /// Workbook serialization failed.
    #[error("xlsx write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
    /// Frame exceeds worksheet limits.
    #[error("{0}")]
    Invalid(String),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
