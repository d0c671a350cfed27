//! XLSX writer kernel that serializes a DataFrame into in-memory workbook bytes.
//!
//! Output is one `Data` sheet: a styled header row, then every data cell
//! written as a string under a text (`@`) number format, so numeric-looking
//! values such as phone numbers keep their exact content.

use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use tracing::debug;

use crate::conf::{
    C_NUM_FORMAT_TEXT, C_SHEET_NAME_DEFAULT, EnumFmtKey, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    derive_default_xlsx_formats,
};
use crate::spec::{
    EnumCellValue, SpecAutofitCellsPolicy, SpecCellFormat, SpecXlsxReport, XlsxIoError,
};
use crate::util::{convert_cell_value_to_text, derive_column_width, estimate_unicode_string_width};

/// Serialize `df` into a single-sheet workbook using the default styling.
pub fn write_xlsx_bytes(df: &DataFrame) -> Result<Vec<u8>, XlsxIoError> {
    let (v_xlsx, report) = write_xlsx_bytes_with_report(df)?;
    debug!(
        n_rows = report.n_rows,
        n_cols = report.n_cols,
        widths = ?report.widths,
        n_bytes = v_xlsx.len(),
        "workbook serialized"
    );
    Ok(v_xlsx)
}

/// Same as [`write_xlsx_bytes`], also returning row/column counts and final widths.
pub fn write_xlsx_bytes_with_report(
    df: &DataFrame,
) -> Result<(Vec<u8>, SpecXlsxReport), XlsxIoError> {
    let dict_fmt = derive_default_xlsx_formats();
    let cfg_fmt_text = dict_fmt
        .get(&EnumFmtKey::Text)
        .cloned()
        .unwrap_or_default()
        .with_(SpecCellFormat {
            num_format: Some(C_NUM_FORMAT_TEXT.to_string()),
            ..Default::default()
        });
    let cfg_fmt_header = dict_fmt
        .get(&EnumFmtKey::Header)
        .cloned()
        .unwrap_or_default();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(C_SHEET_NAME_DEFAULT)?;
    let report = write_data_sheet(
        worksheet,
        df,
        &derive_rust_xlsx_format(&cfg_fmt_text),
        &derive_rust_xlsx_format(&cfg_fmt_header),
        &SpecAutofitCellsPolicy::default(),
    )?;

    let v_xlsx = workbook.save_to_buffer()?;
    Ok((v_xlsx, report))
}

/// Write header and body of `df` into `worksheet`, then autofit every column.
fn write_data_sheet(
    worksheet: &mut Worksheet,
    df: &DataFrame,
    fmt_text: &Format,
    fmt_header: &Format,
    policy_autofit: &SpecAutofitCellsPolicy,
) -> Result<SpecXlsxReport, XlsxIoError> {
    let n_width_df = df.width();
    let n_height_df = df.height();
    if n_width_df > N_NCOLS_EXCEL_MAX {
        return Err(XlsxIoError::Invalid(format!(
            "Too many columns: {n_width_df} exceeds Excel limit of {N_NCOLS_EXCEL_MAX}."
        )));
    }
    if n_height_df + 1 > N_NROWS_EXCEL_MAX {
        return Err(XlsxIoError::Invalid(format!(
            "Too many rows: {n_height_df} data rows exceed Excel limit of {}.",
            N_NROWS_EXCEL_MAX - 1
        )));
    }

    let mut report = SpecXlsxReport {
        n_rows: n_height_df,
        n_cols: n_width_df,
        widths: Vec::with_capacity(n_width_df),
    };

    for (n_idx_col, col) in df.get_columns().iter().enumerate() {
        let n_col = cast_col_num(n_idx_col)?;
        let c_name = col.name().as_str();

        worksheet.set_column_format(n_col, fmt_text)?;
        worksheet.write_string_with_format(0, n_col, c_name, fmt_header)?;
        let mut n_width_recorded = estimate_unicode_string_width(c_name);

        for n_idx_row in 0..n_height_df {
            let value = derive_cell_value_from_any_value(col.get(n_idx_row)?);
            let c_text = convert_cell_value_to_text(&value);
            if let Some(val) = &c_text {
                n_width_recorded = usize::max(n_width_recorded, estimate_unicode_string_width(val));
            }
            write_text_cell(worksheet, n_idx_row + 1, n_col, c_text.as_deref(), fmt_text)?;
        }

        let n_width_final = derive_column_width(n_width_recorded, policy_autofit) as f64;
        worksheet.set_column_width(n_col, n_width_final)?;
        report.widths.push(n_width_final);
    }

    Ok(report)
}

fn derive_cell_value_from_any_value(value: AnyValue<'_>) -> EnumCellValue {
    match value {
        AnyValue::Null => EnumCellValue::None,
        AnyValue::String(val) => EnumCellValue::String(val.to_string()),
        AnyValue::StringOwned(val) => EnumCellValue::String(val.to_string()),
        AnyValue::Boolean(val) => {
            EnumCellValue::String(if val { "True" } else { "False" }.to_string())
        }
        AnyValue::Float32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float64(val) => EnumCellValue::Number(val),
        _ => EnumCellValue::String(value.to_string()),
    }
}

fn write_text_cell(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_num: u16,
    value: Option<&str>,
    format: &Format,
) -> Result<(), XlsxIoError> {
    let n_row = cast_row_num(row_idx)?;
    match value {
        None => {
            worksheet.write_blank(n_row, col_num, format)?;
        }
        Some(val) => {
            worksheet.write_string_with_format(n_row, col_num, val, format)?;
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.clone());
    }
    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }
    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        5 => FormatBorder::Thick,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    match align.trim().to_ascii_lowercase().as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, XlsxIoError> {
    u32::try_from(value).map_err(|_| XlsxIoError::Invalid(format!("row index overflow: {value}")))
}

fn cast_col_num(value: usize) -> Result<u16, XlsxIoError> {
    u16::try_from(value)
        .map_err(|_| XlsxIoError::Invalid(format!("column index overflow: {value}")))
}
