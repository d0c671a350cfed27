//! Normalizer pipeline: classify each column, dispatch its cleaner, rebuild the frame.

use polars::prelude::{Column, DataFrame, DataType, NamedFrom, Series};
use tidykit_io_xlsx::{read_xlsx_bytes, write_xlsx_bytes};
use tracing::{debug, info};

use crate::classify::classify_column;
use crate::date::clean_date_column;
use crate::name::clean_person_name_column;
use crate::phone::{clean_phone_column_strict, clean_phone_column_suffix};
use crate::spec::{
    CleanError, EnumFieldKind, EnumPhonePolicy, SpecColumnReport, SpecNormalizeOptions,
    SpecNormalizeReport,
};

/// Pure column transform: raw text cells in, cleaned text cells out (same length).
pub type FnColumnCleaner = fn(&[Option<&str>]) -> Vec<Option<String>>;

/// Dispatch table from field kind to its cleaner; `Other` has none.
pub fn derive_column_cleaner(
    kind: EnumFieldKind,
    phone_policy: EnumPhonePolicy,
) -> Option<FnColumnCleaner> {
    match (kind, phone_policy) {
        (EnumFieldKind::PersonName, _) => Some(clean_person_name_column as FnColumnCleaner),
        (EnumFieldKind::Phone, EnumPhonePolicy::Strict) => {
            Some(clean_phone_column_strict as FnColumnCleaner)
        }
        (EnumFieldKind::Phone, EnumPhonePolicy::Suffix) => {
            Some(clean_phone_column_suffix as FnColumnCleaner)
        }
        (EnumFieldKind::Date, _) => Some(clean_date_column as FnColumnCleaner),
        (EnumFieldKind::Other, _) => None,
    }
}

/// Return a cleaned copy of `df`; the input frame is left untouched.
///
/// Row count, column count, column names and column order are preserved.
pub fn normalize_dataframe(
    df: &DataFrame,
    options: &SpecNormalizeOptions,
) -> Result<(DataFrame, SpecNormalizeReport), CleanError> {
    let mut report = SpecNormalizeReport {
        n_rows: df.height(),
        columns: Vec::with_capacity(df.width()),
    };
    let mut l_columns = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        let c_name = col.name().to_string();
        let kind = classify_column(&c_name);
        debug!(column = %c_name, %kind, "column classified");

        let Some(fn_clean) = derive_column_cleaner(kind, options.phone_policy) else {
            l_columns.push(col.clone());
            report.columns.push(SpecColumnReport {
                name: c_name,
                kind,
                cnt_changed: 0,
            });
            continue;
        };

        let series_text = col.as_materialized_series().cast(&DataType::String)?;
        let l_values: Vec<Option<&str>> = series_text.str()?.into_iter().collect();
        let l_cleaned = fn_clean(&l_values);

        let cnt_changed = l_values
            .iter()
            .zip(&l_cleaned)
            .filter(|(raw, new)| **raw != new.as_deref())
            .count() as u64;

        l_columns.push(Column::from(Series::new(col.name().clone(), l_cleaned)));
        report.columns.push(SpecColumnReport {
            name: c_name,
            kind,
            cnt_changed,
        });
    }

    let df_clean = DataFrame::new(l_columns)?;
    info!(
        phone_policy = ?options.phone_policy,
        "{report}"
    );
    Ok((df_clean, report))
}

/// Full pipeline on uploaded bytes: read, normalize, serialize.
pub fn normalize_xlsx_bytes(
    v_xlsx: &[u8],
    options: &SpecNormalizeOptions,
) -> Result<(Vec<u8>, SpecNormalizeReport), CleanError> {
    let df = read_xlsx_bytes(v_xlsx)?;
    let (df_clean, report) = normalize_dataframe(&df, options)?;
    let v_out = write_xlsx_bytes(&df_clean)?;
    Ok((v_out, report))
}

#[cfg(test)]
mod tests {
    use polars::prelude::AnyValue;
    use rust_xlsxwriter::Workbook;

    use super::*;

    fn create_column(name: &str, values: &[Option<&str>]) -> Column {
        let l_values: Vec<Option<String>> = values.iter().map(|v| v.map(String::from)).collect();
        Column::from(Series::new(name.into(), l_values))
    }

    fn create_frame() -> DataFrame {
        DataFrame::new(vec![
            create_column("Họ tên", &[Some("  nguyễn   văn a "), None, Some("")]),
            create_column("SĐT", &[Some("84912345678"), Some("912345678"), None]),
            create_column(
                "Ngày sinh",
                &[Some("03/04/2024"), Some("2024-12-31"), Some("not a date")],
            ),
            create_column("Ghi chú", &[Some("  giữ nguyên  "), None, Some("0123")]),
        ])
        .expect("frame")
    }

    fn collect_text(df: &DataFrame, n_idx_col: usize) -> Vec<Option<String>> {
        let col = &df.get_columns()[n_idx_col];
        (0..df.height())
            .map(|n_idx_row| match col.get(n_idx_row).expect("cell") {
                AnyValue::Null => None,
                AnyValue::String(val) => Some(val.to_string()),
                AnyValue::StringOwned(val) => Some(val.to_string()),
                other => Some(other.to_string()),
            })
            .collect()
    }

    fn s(val: &str) -> Option<String> {
        Some(val.to_string())
    }

    #[test]
    fn test_normalize_dataframe_preserves_shape_and_names() {
        let df = create_frame();
        let (df_clean, report) =
            normalize_dataframe(&df, &SpecNormalizeOptions::default()).expect("normalize");

        assert_eq!(df_clean.height(), df.height());
        assert_eq!(df_clean.width(), df.width());
        assert_eq!(df_clean.get_column_names_str(), df.get_column_names_str());
        assert_eq!(report.n_rows, 3);
        assert_eq!(
            report.columns.iter().map(|c| c.kind).collect::<Vec<_>>(),
            vec![
                EnumFieldKind::PersonName,
                EnumFieldKind::Phone,
                EnumFieldKind::Date,
                EnumFieldKind::Other
            ]
        );
    }

    #[test]
    fn test_normalize_dataframe_cleans_classified_columns_only() {
        let df = create_frame();
        let (df_clean, report) =
            normalize_dataframe(&df, &SpecNormalizeOptions::default()).expect("normalize");

        assert_eq!(
            collect_text(&df_clean, 0),
            vec![s("Nguyễn Văn A"), None, s("")]
        );
        assert_eq!(
            collect_text(&df_clean, 1),
            vec![s("0912345678"), s("0912345678"), s("")]
        );
        assert_eq!(
            collect_text(&df_clean, 2),
            vec![s("03/04/2024"), s("31/12/2024"), s("")]
        );
        assert_eq!(collect_text(&df_clean, 3), collect_text(&df, 3));

        assert_eq!(report.columns[0].cnt_changed, 1);
        assert_eq!(report.columns[1].cnt_changed, 3);
        assert_eq!(report.columns[2].cnt_changed, 2);
        assert_eq!(report.columns[3].cnt_changed, 0);
    }

    #[test]
    fn test_normalize_dataframe_leaves_input_untouched() {
        let df = create_frame();
        let l_before = collect_text(&df, 0);
        let _ = normalize_dataframe(&df, &SpecNormalizeOptions::default()).expect("normalize");
        assert_eq!(collect_text(&df, 0), l_before);
    }

    #[test]
    fn test_normalize_dataframe_is_a_fixed_point_on_its_output() {
        let options = SpecNormalizeOptions::default();
        let (df_once, _) = normalize_dataframe(&create_frame(), &options).expect("once");
        let (df_twice, report) = normalize_dataframe(&df_once, &options).expect("twice");

        assert!(df_once.equals_missing(&df_twice));
        assert_eq!(report.cnt_changed_total(), 0);
    }

    #[test]
    fn test_normalize_dataframe_suffix_policy() {
        let df = DataFrame::new(vec![create_column(
            "Phone",
            &[Some("0123456789012"), None, Some("84912345678")],
        )])
        .expect("frame");
        let options = SpecNormalizeOptions {
            phone_policy: EnumPhonePolicy::Suffix,
        };

        let (df_clean, _) = normalize_dataframe(&df, &options).expect("normalize");
        assert_eq!(
            collect_text(&df_clean, 0),
            vec![s("0456789012"), None, s("0912345678")]
        );
    }

    #[test]
    fn test_normalize_dataframe_casts_numeric_columns_to_text() {
        let df = DataFrame::new(vec![Column::from(Series::new(
            "tel".into(),
            vec![Some(912345678i64), None],
        ))])
        .expect("frame");

        let (df_clean, _) =
            normalize_dataframe(&df, &SpecNormalizeOptions::default()).expect("normalize");
        assert_eq!(collect_text(&df_clean, 0), vec![s("0912345678"), s("")]);
    }

    #[test]
    fn test_derive_column_cleaner_dispatch() {
        assert!(derive_column_cleaner(EnumFieldKind::Other, EnumPhonePolicy::Strict).is_none());

        let fn_strict =
            derive_column_cleaner(EnumFieldKind::Phone, EnumPhonePolicy::Strict).expect("strict");
        let fn_suffix =
            derive_column_cleaner(EnumFieldKind::Phone, EnumPhonePolicy::Suffix).expect("suffix");
        assert_eq!(fn_strict(&[None]), vec![s("")]);
        assert_eq!(fn_suffix(&[None]), vec![None]);
    }

    #[test]
    fn test_normalize_xlsx_bytes_end_to_end() {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Tên khách hàng").expect("header");
        worksheet.write_string(0, 1, "Điện thoại").expect("header");
        worksheet.write_string(1, 0, "lê  thị b").expect("cell");
        worksheet.write_number(1, 1, 869611000.0).expect("cell");
        let v_in = workbook.save_to_buffer().expect("save");

        let (v_out, report) =
            normalize_xlsx_bytes(&v_in, &SpecNormalizeOptions::default()).expect("pipeline");
        assert_eq!(report.cnt_changed_total(), 2);

        let df_out = read_xlsx_bytes(&v_out).expect("read back");
        assert_eq!(
            df_out.get_column_names_str(),
            vec!["Tên khách hàng", "Điện thoại"]
        );
        assert_eq!(collect_text(&df_out, 0), vec![s("Lê Thị B")]);
        assert_eq!(collect_text(&df_out, 1), vec![s("0869611000")]);
    }

    #[test]
    fn test_normalize_xlsx_bytes_reports_unreadable_upload() {
        let err = normalize_xlsx_bytes(b"PK-not-really", &SpecNormalizeOptions::default())
            .unwrap_err();
        assert!(matches!(err, CleanError::Xlsx(_)));
    }
}
