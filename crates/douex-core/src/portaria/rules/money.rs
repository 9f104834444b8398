//! Brazilian monetary value parsing.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a Brazilian-formatted amount ("R$ 1.234,56", "12.345,67", "1000.00").
///
/// Currency symbol and whitespace are stripped. When a decimal comma is
/// present, dots are treated as thousands separators; otherwise a dot is
/// the decimal separator, so already-canonical values re-parse unchanged.
pub fn parse_brl(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .replace("R$", "")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{00a0}')
        .collect();

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.') {
        return None;
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };

    Decimal::from_str(&normalized).ok()
}

/// Canonical rendering of a cleaned monetary value.
pub fn format_canonical(amount: Decimal) -> String {
    amount.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_brl() {
        assert_eq!(parse_brl("12.345,67"), Some(Decimal::from_str("12345.67").unwrap()));
        assert_eq!(parse_brl("R$ 1.000,00"), Some(Decimal::from_str("1000.00").unwrap()));
        assert_eq!(parse_brl("1234,5"), Some(Decimal::from_str("1234.5").unwrap()));
        assert_eq!(parse_brl("500"), Some(Decimal::from_str("500").unwrap()));
    }

    #[test]
    fn test_parse_brl_rejects_garbage() {
        assert_eq!(parse_brl("abc"), None);
        assert_eq!(parse_brl(""), None);
        assert_eq!(parse_brl("R$"), None);
        assert_eq!(parse_brl("12,34abc"), None);
    }

    #[test]
    fn test_canonical_form_reparses_to_same_value() {
        let first = parse_brl("R$ 12.345,67").unwrap();
        let again = parse_brl(&format_canonical(first)).unwrap();
        assert_eq!(first, again);
    }
}
