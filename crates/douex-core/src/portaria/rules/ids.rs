//! Validation of Brazilian identifiers and geographic codes.

use super::patterns::CNPJ_PUNCTUATED;

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

/// CNES health-establishment code: exactly 7 digits.
pub fn validate_cnes(s: &str) -> bool {
    is_digits(s.trim(), 7)
}

/// CNPJ tax id: 14 raw digits or the punctuated NN.NNN.NNN/NNNN-NN form.
pub fn validate_cnpj(s: &str) -> bool {
    let s = s.trim();
    is_digits(s, 14) || CNPJ_PUNCTUATED.is_match(s)
}

/// CPF personal id: exactly 11 digits.
pub fn validate_cpf(s: &str) -> bool {
    is_digits(s.trim(), 11)
}

/// IBGE municipality code: exactly 6 digits.
pub fn validate_ibge(s: &str) -> bool {
    is_digits(s.trim(), 6)
}

/// UF state code: exactly 2 alphabetic characters.
///
/// Returns the uppercased code; case is not significant in the source.
pub fn validate_uf(s: &str) -> Option<String> {
    let s = s.trim();
    if s.chars().count() == 2 && s.chars().all(|c| c.is_alphabetic()) {
        Some(s.to_uppercase())
    } else {
        None
    }
}

/// Municipality or entity name: non-empty and not purely numeric.
pub fn validate_name(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && !s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cnes() {
        assert!(validate_cnes("1234567"));
        assert!(!validate_cnes("123456"));
        assert!(!validate_cnes("12345678"));
        assert!(!validate_cnes("12a4567"));
    }

    #[test]
    fn test_validate_cnpj_both_forms() {
        assert!(validate_cnpj("12345678000199"));
        assert!(validate_cnpj("12.345.678/0001-99"));
        assert!(!validate_cnpj("1234567800019"));
        assert!(!validate_cnpj("12.345.678/0001-9"));
        assert!(!validate_cnpj("12-345-678/0001-99"));
    }

    #[test]
    fn test_validate_cpf() {
        assert!(validate_cpf("12345678901"));
        assert!(!validate_cpf("1234567890"));
        assert!(!validate_cpf("123456789012"));
    }

    #[test]
    fn test_validate_ibge() {
        assert!(validate_ibge("330455"));
        assert!(!validate_ibge("3304557"));
        assert!(!validate_ibge("33045a"));
    }

    #[test]
    fn test_validate_uf() {
        assert_eq!(validate_uf("rj"), Some("RJ".to_string()));
        assert_eq!(validate_uf("SP"), Some("SP".to_string()));
        assert_eq!(validate_uf("R"), None);
        assert_eq!(validate_uf("RJO"), None);
        assert_eq!(validate_uf("R1"), None);
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Niterói"));
        assert!(!validate_name("  "));
        assert!(!validate_name("123456"));
        assert!(validate_name("3M do Brasil"));
    }
}
