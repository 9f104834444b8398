//! Field validation and cleaning of canonical records.
//!
//! Cleaning is a total function: an invalid value becomes null in place,
//! the schema never loses the field, and every downgrade is reported
//! through the validity report instead of disappearing silently.

use serde::Serialize;
use tracing::warn;

use crate::models::{CanonicalField, CanonicalRecord};

use super::rules::{
    dates::normalize_date,
    ids::{validate_cnes, validate_cnpj, validate_ibge, validate_name, validate_uf},
    money::{format_canonical, parse_brl},
};

/// One value downgraded to null during cleaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidValue {
    /// Zero-based index of the record within the cleaned batch.
    pub row: usize,
    /// The canonical field that failed validation.
    pub field: CanonicalField,
    /// The rejected source value.
    pub value: String,
}

/// Cleaned records plus the parallel validity report.
#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    pub records: Vec<CanonicalRecord>,
    pub invalid: Vec<InvalidValue>,
}

/// Validate and clean a batch of canonical records.
///
/// Idempotent: cleaning already-clean records changes nothing.
pub fn clean(records: Vec<CanonicalRecord>) -> CleanOutcome {
    let mut outcome = CleanOutcome::default();

    for (row, mut record) in records.into_iter().enumerate() {
        for field in CanonicalField::ALL {
            let Some(value) = record.get(field) else {
                continue;
            };

            match clean_value(field, value) {
                Cleaned::Keep => {}
                Cleaned::Replace(new) => record.set(field, Some(new)),
                Cleaned::Invalid => {
                    warn!(row, field = field.name(), value, "invalid field value");
                    outcome.invalid.push(InvalidValue {
                        row,
                        field,
                        value: value.to_string(),
                    });
                    record.set(field, None);
                }
            }
        }
        outcome.records.push(record);
    }

    outcome
}

enum Cleaned {
    Keep,
    Replace(String),
    Invalid,
}

fn clean_value(field: CanonicalField, value: &str) -> Cleaned {
    if field.is_monetary() {
        return match parse_brl(value) {
            Some(amount) => Cleaned::Replace(format_canonical(amount)),
            None => Cleaned::Invalid,
        };
    }

    match field {
        CanonicalField::CodigoCnes => keep_if(validate_cnes(value)),
        CanonicalField::Cnpj | CanonicalField::CnpjEstabelecimento => keep_if(validate_cnpj(value)),
        CanonicalField::CodigoIbge => keep_if(validate_ibge(value)),
        CanonicalField::Uf => match validate_uf(value) {
            Some(upper) => Cleaned::Replace(upper),
            None => Cleaned::Invalid,
        },
        CanonicalField::Municipio | CanonicalField::NomeFundo | CanonicalField::NomeEstabelecimento => {
            keep_if(validate_name(value))
        }
        CanonicalField::Data => match normalize_date(value) {
            Some(normalized) => Cleaned::Replace(normalized),
            None => Cleaned::Invalid,
        },
        // Free-form fields carry no validation rule.
        _ => Cleaned::Keep,
    }
}

fn keep_if(valid: bool) -> Cleaned {
    if valid { Cleaned::Keep } else { Cleaned::Invalid }
}
