//! Brazilian date validation and normalization.

use chrono::NaiveDate;

use super::patterns::{month_number, DATE_DMY, DATE_LONG};

/// Normalize a date to `DD/MM/YYYY`.
///
/// Accepts either the exact numeric form (validated as a real calendar
/// date) or a written-out Portuguese date like "13 de março de 2024".
/// Anything else is invalid.
pub fn normalize_date(s: &str) -> Option<String> {
    let s = s.trim();

    if let Some(caps) = DATE_DMY.captures(s) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)?;
        return Some(s.to_string());
    }

    parse_written_date(s)
}

/// Parse a written-out Portuguese date into `DD/MM/YYYY`.
pub fn parse_written_date(s: &str) -> Option<String> {
    let caps = DATE_LONG.captures(s)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day)?;
    Some(format!("{day:02}/{month}/{year}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_numeric_date_kept() {
        assert_eq!(normalize_date("05/03/2024"), Some("05/03/2024".to_string()));
        assert_eq!(normalize_date(" 13/01/2023 "), Some("13/01/2023".to_string()));
    }

    #[test]
    fn test_numeric_date_must_be_exact_and_real() {
        assert_eq!(normalize_date("5/3/2024"), None);
        assert_eq!(normalize_date("32/01/2024"), None);
        assert_eq!(normalize_date("2024-03-05"), None);
        assert_eq!(normalize_date("05/13/2024"), None);
    }

    #[test]
    fn test_written_date_normalized() {
        assert_eq!(normalize_date("13 de março de 2024"), Some("13/03/2024".to_string()));
        assert_eq!(normalize_date("5 DE MARCO DE 2024"), Some("05/03/2024".to_string()));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_date("1 de janeiro de 2022").unwrap();
        assert_eq!(normalize_date(&once), Some(once.clone()));
    }
}
