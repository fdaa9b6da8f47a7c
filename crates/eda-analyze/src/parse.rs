//! Field-specific cleaning of raw cell values.
//!
//! Each parser is a pure function from a raw string to `Option<f64>`.
//! Failure is always signaled as `None`, never an error, so one malformed
//! cell never aborts a batch.

use eda_model::NumericParser;

/// Apply the given cleaning strategy to a raw cell value.
pub fn parse_value(parser: NumericParser, raw: &str) -> Option<f64> {
    match parser {
        NumericParser::Percentage | NumericParser::FreeTextQuantity => parse_numeric_run(raw),
        NumericParser::Price => parse_price(raw),
        NumericParser::Plain => parse_plain(raw),
    }
}

/// Extract the first maximal run of digits and decimal points and parse it.
///
/// Surrounding characters (a trailing `%`, unit text) are ignored. Free text
/// with more than one number uses only the first run; the listing dataset's
/// bathroom descriptions carry a single leading number.
pub fn parse_numeric_run(raw: &str) -> Option<f64> {
    let start = raw.find(|ch: char| ch.is_ascii_digit() || ch == '.')?;
    let rest = &raw[start..];
    let end = rest
        .find(|ch: char| !ch.is_ascii_digit() && ch != '.')
        .unwrap_or(rest.len());
    rest[..end].parse::<f64>().ok()
}

/// Strip the currency symbol and thousands separators, then parse.
pub fn parse_price(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    let cleaned: String = raw.chars().filter(|ch| *ch != '$' && *ch != ',').collect();
    cleaned.trim().parse::<f64>().ok()
}

/// Parse one field across a record batch, dropping unparsable cells.
pub fn parsed_values(
    records: &[eda_model::Record],
    field: &str,
    parser: NumericParser,
) -> Vec<f64> {
    records
        .iter()
        .filter_map(|record| parse_value(parser, record.get_or_empty(field)))
        .collect()
}

/// Direct float conversion of the trimmed string.
pub fn parse_plain(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
