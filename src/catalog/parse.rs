// src/catalog/parse.rs
//! Field-level cleanup for the raw CSV columns.
//!
//! These parsers have no error channel on purpose: the source data is
//! export-quality at best, and a value we cannot read is worth exactly
//! as much as a missing one. Everything fails soft to 0.

/// Clean and convert the "Competing Products" column.
///
/// Handles values like `">1,000"`, `"826"`, `"n/a"` and blanks. A `>` prefix
/// marks a truncated count in the source export; we keep the stated bound.
pub fn parse_competing_products(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let s = raw.replace(',', "").replace('>', "");
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("n/a") {
        return 0;
    }
    s.parse().unwrap_or(0)
}

/// Clean and convert the "Search Volume" column.
///
/// Strips thousands separators and parses as a float. Missing, unparsable,
/// non-finite or negative values all land at 0.
pub fn parse_search_volume(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let cleaned = raw.replace(',', "");
    match cleaned.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Lowercase + trim, so category comparisons are exact string equality.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}
