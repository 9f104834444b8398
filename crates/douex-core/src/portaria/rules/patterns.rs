//! Common regex patterns for portaria extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Portaria identification line, e.g.
    // "PORTARIA GM/MS Nº 1.234, DE 5 DE MARÇO DE 2024".
    // Number-indicator variants: Nº, N°, N., NUMERO, NÚMERO.
    pub static ref PORTARIA_PATTERN: Regex = Regex::new(
        r"(?i)PORTARIA\s+(?:GM/MS\s+)?(?:N[º°]|N[ÚU]MERO|N\.?)\s*([\d.,]+)\s*(?:,?\s*DE\s+)?(\d{1,2})\s+DE\s+(JANEIRO|FEVEREIRO|MAR[ÇC]O|ABRIL|MAIO|JUNHO|JULHO|AGOSTO|SETEMBRO|OUTUBRO|NOVEMBRO|DEZEMBRO)\s+DE\s+(\d{4})"
    ).unwrap();

    // Strict variant: the GM/MS issuing body is mandatory.
    pub static ref PORTARIA_STRICT: Regex = Regex::new(
        r"(?i)PORTARIA\s+GM/MS\s+(?:N[º°]|N[ÚU]MERO|N\.?)\s*([\d.,]+)\s*(?:,?\s*DE\s+)?(\d{1,2})\s+DE\s+(JANEIRO|FEVEREIRO|MAR[ÇC]O|ABRIL|MAIO|JUNHO|JULHO|AGOSTO|SETEMBRO|OUTUBRO|NOVEMBRO|DEZEMBRO)\s+DE\s+(\d{4})"
    ).unwrap();

    // Written-out Brazilian date: "13 de março de 2024".
    pub static ref DATE_LONG: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+DE\s+(JANEIRO|FEVEREIRO|MAR[ÇC]O|ABRIL|MAIO|JUNHO|JULHO|AGOSTO|SETEMBRO|OUTUBRO|NOVEMBRO|DEZEMBRO)\s+DE\s+(\d{4})\b"
    ).unwrap();

    // Numeric date, strict DD/MM/YYYY.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"^(\d{2})/(\d{2})/(\d{4})$"
    ).unwrap();

    // Punctuated CNPJ: NN.NNN.NNN/NNNN-NN.
    pub static ref CNPJ_PUNCTUATED: Regex = Regex::new(
        r"^\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}$"
    ).unwrap();
}

/// Marker elements retried when the whole-text portaria match fails.
pub const MARKER_SELECTORS: [&str; 3] =
    ["p.identifica", "div.identificacao", "span.numero-portaria"];

/// Map a Portuguese month name (accented or not) to its two-digit number.
pub fn month_number(month: &str) -> Option<&'static str> {
    match month.to_uppercase().as_str() {
        "JANEIRO" => Some("01"),
        "FEVEREIRO" => Some("02"),
        "MARÇO" | "MARCO" => Some("03"),
        "ABRIL" => Some("04"),
        "MAIO" => Some("05"),
        "JUNHO" => Some("06"),
        "JULHO" => Some("07"),
        "AGOSTO" => Some("08"),
        "SETEMBRO" => Some("09"),
        "OUTUBRO" => Some("10"),
        "NOVEMBRO" => Some("11"),
        "DEZEMBRO" => Some("12"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portaria_pattern_variants() {
        for text in [
            "PORTARIA GM/MS Nº 1.234, DE 5 DE MARÇO DE 2024",
            "PORTARIA Nº 55, DE 13 DE JANEIRO DE 2023",
            "Portaria n° 7 de 1 de maio de 2022",
            "PORTARIA NUMERO 90, DE 2 DE MARCO DE 2021",
        ] {
            assert!(PORTARIA_PATTERN.is_match(text), "no match: {text}");
        }
    }

    #[test]
    fn test_strict_requires_issuing_body() {
        assert!(PORTARIA_STRICT.is_match("PORTARIA GM/MS Nº 10, DE 2 DE ABRIL DE 2024"));
        assert!(!PORTARIA_STRICT.is_match("PORTARIA Nº 10, DE 2 DE ABRIL DE 2024"));
    }

    #[test]
    fn test_month_number_accents() {
        assert_eq!(month_number("março"), Some("03"));
        assert_eq!(month_number("MARCO"), Some("03"));
        assert_eq!(month_number("dezembro"), Some("12"));
        assert_eq!(month_number("smarch"), None);
    }
}
