//! Header normalization onto the canonical schema.
//!
//! Header names in the corpus are free-form: spelling variants,
//! abbreviations, currency annotations. An ordered rule list maps each
//! header to its canonical field; the first matching rule wins. Rule order
//! is part of the contract - the specific "valor por ..." rules must run
//! before the generic "valor" rule - so do not reorder without checking
//! the overlap cases in the tests below.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{CanonicalField, CanonicalRecord, OrderIdentifier, RawDocument};

use super::tables::RawTable;

lazy_static! {
    /// Ordered (pattern, canonical field) dispatch table.
    static ref HEADER_RULES: Vec<(Regex, CanonicalField)> = vec![
        rule(r"(?i)CNPJ\s*DO\s*ESTABELECIMENTO", CanonicalField::CnpjEstabelecimento),
        rule(r"(?i)VALOR\s*POR\s*EMENDA", CanonicalField::ValorPorEmenda),
        rule(r"(?i)VALOR\s*POR\s*PARLAMENTAR", CanonicalField::ValorPorParlamentar),
        rule(r"(?i)C[ÓO]D(\.|IGO)?\s*(DA\s*)?EMENDA", CanonicalField::CodigoEmenda),
        rule(r"(?i)COD(\.|IGO)?\s*IBGE|IBGE", CanonicalField::CodigoIbge),
        rule(r"(?i)N[ÚU]MERO\s*DA\s*PORTARIA", CanonicalField::NumeroPortaria),
        rule(
            r"(?i)N[º°ÚU]M?E?R?O?\s*DA\s*PROPOSTA|PROPOSTA\s*SAIPS",
            CanonicalField::NumeroProposta,
        ),
        rule(r"(?i)FUNCIONAL\s*PROGRAM[ÁA]TIC[AO]", CanonicalField::FuncionalProgramatico),
        rule(r"(?i)CNES", CanonicalField::CodigoCnes),
        rule(r"(?i)ESTABELECIMENTO|NOME\s*FANTASIA", CanonicalField::NomeEstabelecimento),
        rule(r"(?i)ENTIDADE|FUNDO|RAZ[ÃA]O\s*SOCIAL", CanonicalField::NomeFundo),
        rule(r"(?i)CNPJ", CanonicalField::Cnpj),
        rule(r"(?i)MUNIC[IÍ]PIO", CanonicalField::Municipio),
        rule(r"(?i)\bUF\b|\bESTADO\b", CanonicalField::Uf),
        rule(r"(?i)VALOR", CanonicalField::Valor),
        rule(r"(?i)DATA", CanonicalField::Data),
    ];
}

fn rule(pattern: &str, field: CanonicalField) -> (Regex, CanonicalField) {
    (Regex::new(pattern).expect("static header rule"), field)
}

/// Map one free-form header onto its canonical field, if any rule matches.
pub fn map_header(header: &str) -> Option<CanonicalField> {
    HEADER_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(header))
        .map(|(_, field)| *field)
}

/// Normalize a recovered table into canonical records, one per data row.
///
/// Unmatched headers are dropped. Order number and date are backfilled in
/// precedence order: table-native value, then the extracted identifier,
/// then (when present) the source row's publication metadata.
pub fn normalize(
    table: &RawTable,
    identifier: &OrderIdentifier,
    source: Option<&RawDocument>,
) -> Vec<CanonicalRecord> {
    let mapping: Vec<Option<CanonicalField>> =
        table.headers.iter().map(|h| map_header(h)).collect();

    table
        .rows
        .iter()
        .map(|row| {
            let mut record = CanonicalRecord::default();

            for (cell, field) in row.iter().zip(mapping.iter()) {
                let Some(field) = field else { continue };
                // First mapped column wins when two headers collide.
                if record.get(*field).is_some() {
                    continue;
                }
                let value = cell
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string);
                record.set(*field, value);
            }

            backfill_identity(&mut record, identifier, source);
            record
        })
        .collect()
}

fn backfill_identity(
    record: &mut CanonicalRecord,
    identifier: &OrderIdentifier,
    source: Option<&RawDocument>,
) {
    if record.numero_portaria.is_none() {
        record.numero_portaria = identifier
            .numero
            .clone()
            .or_else(|| source.and_then(|s| s.pub_name.clone()));
    }
    if record.data.is_none() {
        record.data = identifier
            .data
            .clone()
            .or_else(|| source.and_then(|s| s.pub_date.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| Some(c.to_string())).collect())
                .collect(),
        }
    }

    #[test]
    fn test_specific_rules_win_over_generic_valor() {
        assert_eq!(map_header("VALOR POR EMENDA (R$)"), Some(CanonicalField::ValorPorEmenda));
        assert_eq!(
            map_header("Valor por Parlamentar (R$)"),
            Some(CanonicalField::ValorPorParlamentar)
        );
        assert_eq!(map_header("VALOR TOTAL DA PROPOSTA (R$)"), Some(CanonicalField::Valor));
        assert_eq!(map_header("VALOR"), Some(CanonicalField::Valor));
    }

    #[test]
    fn test_overlapping_header_variants() {
        assert_eq!(
            map_header("CNPJ DO ESTABELECIMENTO"),
            Some(CanonicalField::CnpjEstabelecimento)
        );
        assert_eq!(map_header("CNPJ"), Some(CanonicalField::Cnpj));
        assert_eq!(map_header("CÓDIGO IBGE DO MUNICÍPIO"), Some(CanonicalField::CodigoIbge));
        assert_eq!(map_header("Município"), Some(CanonicalField::Municipio));
        assert_eq!(map_header("CÓD. EMENDA"), Some(CanonicalField::CodigoEmenda));
        assert_eq!(map_header("ESTADO"), Some(CanonicalField::Uf));
        assert_eq!(map_header("Nº DA PROPOSTA"), Some(CanonicalField::NumeroProposta));
    }

    #[test]
    fn test_unmatched_header_dropped() {
        assert_eq!(map_header("OBSERVAÇÕES"), None);

        let t = table(&["UF", "OBSERVAÇÕES"], &[&["RJ", "nada"]]);
        let records = normalize(&t, &OrderIdentifier::default(), None);
        assert_eq!(records[0].uf.as_deref(), Some("RJ"));
        assert!(records[0].municipio.is_none());
    }

    #[test]
    fn test_canonical_headers_map_to_themselves() {
        for field in CanonicalField::ALL {
            assert_eq!(map_header(field.name()), Some(field), "header {:?}", field.name());
        }
    }

    #[test]
    fn test_idempotent_on_canonical_table() {
        let headers: Vec<&str> = CanonicalField::ALL.iter().map(|f| f.name()).collect();
        let row: Vec<&str> = vec![
            "RJ", "Niterói", "330330", "Fundo Municipal", "12345678000199",
            "Hospital Central", "1234567", "98765432000155", "81000000",
            "1000.00", "2000.00", "3000.00", "10.302.5018", "123456",
            "1234", "05/03/2024",
        ];
        let t = table(&headers, &[&row]);

        let first = normalize(&t, &OrderIdentifier::default(), None);
        let roundtrip = RawTable {
            headers: t.headers.clone(),
            rows: vec![first[0]
                .as_row()
                .iter()
                .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
                .collect()],
        };
        let second = normalize(&roundtrip, &OrderIdentifier::default(), None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_identifier_backfill_precedence() {
        let identifier = OrderIdentifier {
            numero: Some("1234".to_string()),
            data: Some("05/03/2024".to_string()),
        };

        // Table-native values win over the identifier.
        let t = table(&["numero da portaria", "data"], &[&["999", "01/01/2020"]]);
        let records = normalize(&t, &identifier, None);
        assert_eq!(records[0].numero_portaria.as_deref(), Some("999"));
        assert_eq!(records[0].data.as_deref(), Some("01/01/2020"));

        // The identifier fills in when the table is silent.
        let t = table(&["UF"], &[&["RJ"]]);
        let records = normalize(&t, &identifier, None);
        assert_eq!(records[0].numero_portaria.as_deref(), Some("1234"));
        assert_eq!(records[0].data.as_deref(), Some("05/03/2024"));
    }

    #[test]
    fn test_source_metadata_is_last_resort() {
        let source = RawDocument {
            pub_name: Some("PORTARIA GM/MS Nº 77".to_string()),
            pub_date: Some("02/02/2024".to_string()),
            ..RawDocument::default()
        };

        let t = table(&["UF"], &[&["RJ"]]);
        let records = normalize(&t, &OrderIdentifier::default(), Some(&source));
        assert_eq!(records[0].numero_portaria.as_deref(), Some("PORTARIA GM/MS Nº 77"));
        assert_eq!(records[0].data.as_deref(), Some("02/02/2024"));

        // Identifier beats source metadata.
        let identifier = OrderIdentifier {
            numero: Some("1234".to_string()),
            data: None,
        };
        let records = normalize(&t, &identifier, Some(&source));
        assert_eq!(records[0].numero_portaria.as_deref(), Some("1234"));
        assert_eq!(records[0].data.as_deref(), Some("02/02/2024"));
    }
}
