pub const TABLE_CELL_STYLE: &str = "border: 1px solid #bbb; padding: 4px;";

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ccc;"
}

pub fn table_header_cell_style(width: Option<&str>) -> String {
    let width = width
        .map(|width| format!(" width: {width};"))
        .unwrap_or_default();
    format!(
        "position: sticky; top: 0; z-index: 1; background: #f3f3f3; border: 1px solid #bbb; padding: 4px; text-align: left; cursor: pointer;{width}"
    )
}

pub fn modal_backdrop_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1200;"
}

/// Whole-number amount with thousands separators, e.g. `1,250,000`.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
