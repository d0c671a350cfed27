//! Prompt construction.

use crate::conf::{C_PROMPT_PREFIX, C_PROMPT_STYLE_PREFIX};
use crate::spec::EnumContentStyle;

/// `"Viết bài quảng cáo cho {product}"`, plus `", phong cách {descriptor}"` when styled.
///
/// The product text is passed through as typed.
pub fn build_prompt(product: &str, style: Option<EnumContentStyle>) -> String {
    match style {
        Some(style) => format!(
            "{C_PROMPT_PREFIX} {product}, {C_PROMPT_STYLE_PREFIX} {}",
            style.descriptor()
        ),
        None => format!("{C_PROMPT_PREFIX} {product}"),
    }
}
