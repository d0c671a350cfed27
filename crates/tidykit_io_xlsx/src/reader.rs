//! XLSX reader kernel: first worksheet of an in-memory workbook into a text DataFrame.
//!
//! Every cell is read as text so phone numbers and codes keep leading zeros
//! and no column is coerced to a numeric dtype before cleaning.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::{debug, warn};

use crate::spec::XlsxIoError;
use crate::util::{convert_number_to_text, derive_unique_column_names};

/// Read the first worksheet of `v_xlsx` into a DataFrame of nullable string columns.
///
/// The first row is the header. Blank cells become null.
pub fn read_xlsx_bytes(v_xlsx: &[u8]) -> Result<DataFrame, XlsxIoError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(v_xlsx))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(XlsxIoError::NoWorksheet)??;

    let mut rows = range.rows();
    let Some(row_header) = rows.next() else {
        debug!("worksheet is empty; returning empty frame");
        return Ok(DataFrame::empty());
    };

    let l_headers_raw: Vec<Option<String>> = row_header.iter().map(derive_text_from_cell).collect();
    let l_colnames = derive_unique_column_names(&l_headers_raw);
    for (c_raw, c_name) in l_headers_raw.iter().zip(&l_colnames) {
        if c_raw.as_deref().map(str::trim) != Some(c_name.as_str()) {
            warn!(header = ?c_raw, renamed = %c_name, "header renamed");
        }
    }

    // The calamine range is rectangular: a row ending early yields trailing
    // `Data::Empty` cells, which become nulls like any other blank.
    let n_width = l_colnames.len();
    let mut l_values_by_col: Vec<Vec<Option<String>>> = vec![Vec::new(); n_width];
    for row in rows {
        for (n_idx_col, l_values) in l_values_by_col.iter_mut().enumerate() {
            l_values.push(row.get(n_idx_col).and_then(derive_text_from_cell));
        }
    }

    let l_columns: Vec<Column> = l_colnames
        .into_iter()
        .zip(l_values_by_col)
        .map(|(c_name, l_values)| Column::from(Series::new(c_name.into(), l_values)))
        .collect();

    let df = DataFrame::new(l_columns)?;
    debug!(
        n_rows = df.height(),
        n_cols = df.width(),
        "read worksheet into frame"
    );
    Ok(df)
}

/// Render one cell as text, or `None` for blank/error cells.
fn derive_text_from_cell(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(val) if val.is_empty() => None,
        Data::String(val) => Some(val.clone()),
        Data::Int(val) => Some(val.to_string()),
        Data::Float(val) => Some(convert_number_to_text(*val)),
        Data::Bool(val) => Some(if *val { "True" } else { "False" }.to_string()),
        Data::DateTime(val) => Some(
            val.as_datetime()
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| convert_number_to_text(val.as_f64())),
        ),
        Data::DateTimeIso(val) | Data::DurationIso(val) => Some(val.clone()),
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::AnyValue;
    use rust_xlsxwriter::Workbook;

    use super::*;

    fn create_workbook_bytes() -> Vec<u8> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Họ tên").expect("header");
        worksheet.write_string(0, 1, "SĐT").expect("header");
        worksheet.write_string(0, 2, "SĐT").expect("header");
        worksheet.write_string(1, 0, "nguyễn văn a").expect("cell");
        worksheet.write_number(1, 1, 912345678.0).expect("cell");
        worksheet.write_string(1, 2, "0869611000").expect("cell");
        worksheet.write_string(2, 0, "trần thị b").expect("cell");
        worksheet.write_boolean(2, 2, true).expect("cell");
        workbook.save_to_buffer().expect("save")
    }

    #[test]
    fn test_read_xlsx_bytes_reads_all_cells_as_text() {
        let df = read_xlsx_bytes(&create_workbook_bytes()).expect("read");

        assert_eq!(df.get_column_names_str(), vec!["Họ tên", "SĐT", "SĐT.1"]);
        assert_eq!(df.height(), 2);

        let cols = df.get_columns();
        assert_eq!(cols[1].get(0).expect("cell"), AnyValue::String("912345678"));
        assert_eq!(cols[2].get(0).expect("cell"), AnyValue::String("0869611000"));
        assert_eq!(cols[1].get(1).expect("cell"), AnyValue::Null);
        assert_eq!(cols[2].get(1).expect("cell"), AnyValue::String("True"));
    }

    #[test]
    fn test_read_xlsx_bytes_reads_short_rows_as_trailing_nulls() {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Tên").expect("header");
        worksheet.write_string(0, 1, "SĐT").expect("header");
        worksheet.write_string(0, 2, "Ngày").expect("header");
        worksheet.write_string(1, 0, "a").expect("cell");
        worksheet.write_string(2, 0, "b").expect("cell");
        worksheet.write_string(2, 1, "0912345678").expect("cell");
        let df = read_xlsx_bytes(&workbook.save_to_buffer().expect("save")).expect("read");

        assert_eq!(df.height(), 2);
        let cols = df.get_columns();
        assert_eq!(cols[1].get(0).expect("cell"), AnyValue::Null);
        assert_eq!(cols[2].get(0).expect("cell"), AnyValue::Null);
        assert_eq!(cols[1].get(1).expect("cell"), AnyValue::String("0912345678"));
        assert_eq!(cols[2].get(1).expect("cell"), AnyValue::Null);
    }

    #[test]
    fn test_read_xlsx_bytes_rejects_garbage() {
        let err = read_xlsx_bytes(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, XlsxIoError::Open(_)));
    }

    #[test]
    fn test_derive_text_from_cell() {
        assert_eq!(derive_text_from_cell(&Data::Empty), None);
        assert_eq!(derive_text_from_cell(&Data::String(String::new())), None);
        assert_eq!(
            derive_text_from_cell(&Data::Float(1.5)),
            Some("1.5".to_string())
        );
        assert_eq!(derive_text_from_cell(&Data::Int(84)), Some("84".to_string()));
        assert_eq!(
            derive_text_from_cell(&Data::DateTimeIso("2024-12-31".to_string())),
            Some("2024-12-31".to_string())
        );
    }
}
