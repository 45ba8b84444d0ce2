//! Lenient number parsing for stat cells.

/// Parse a stat cell, ignoring surrounding whitespace, percent signs and
/// thousands separators. `"12.5%"` gives `12.5`, `"1,234"` gives `1234`.
pub fn parse_number(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .trim()
        .chars()
        .filter(|c| *c != '%' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole-number cell that may be negative (e.g. rushing yards).
pub fn parse_signed(cell: &str) -> Option<i32> {
    let value = parse_number(cell)?;
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }
    Some(value as i32)
}

/// Non-negative whole-number cell.
pub fn parse_count(cell: &str) -> Option<u32> {
    parse_signed(cell).and_then(|v| u32::try_from(v).ok())
}
