//! Canonical record model for normalized portaria table rows.

use serde::{Deserialize, Serialize};

/// The fixed canonical field set, in output order.
///
/// Every normalized record exposes exactly these fields; anything a source
/// table carries that does not map onto one of them is dropped during
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Uf,
    Municipio,
    CodigoIbge,
    NomeFundo,
    Cnpj,
    NomeEstabelecimento,
    CodigoCnes,
    CnpjEstabelecimento,
    CodigoEmenda,
    ValorPorEmenda,
    ValorPorParlamentar,
    Valor,
    FuncionalProgramatico,
    NumeroProposta,
    NumeroPortaria,
    Data,
}

impl CanonicalField {
    /// All canonical fields in their fixed output order.
    pub const ALL: [CanonicalField; 16] = [
        CanonicalField::Uf,
        CanonicalField::Municipio,
        CanonicalField::CodigoIbge,
        CanonicalField::NomeFundo,
        CanonicalField::Cnpj,
        CanonicalField::NomeEstabelecimento,
        CanonicalField::CodigoCnes,
        CanonicalField::CnpjEstabelecimento,
        CanonicalField::CodigoEmenda,
        CanonicalField::ValorPorEmenda,
        CanonicalField::ValorPorParlamentar,
        CanonicalField::Valor,
        CanonicalField::FuncionalProgramatico,
        CanonicalField::NumeroProposta,
        CanonicalField::NumeroPortaria,
        CanonicalField::Data,
    ];

    /// Canonical column name as published in the output schema.
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalField::Uf => "UF",
            CanonicalField::Municipio => "município",
            CanonicalField::CodigoIbge => "código IBGE do município",
            CanonicalField::NomeFundo => "nome do fundo",
            CanonicalField::Cnpj => "CNPJ",
            CanonicalField::NomeEstabelecimento => "nome do estabelecimento",
            CanonicalField::CodigoCnes => "código CNES",
            CanonicalField::CnpjEstabelecimento => "CNPJ do estabelecimento",
            CanonicalField::CodigoEmenda => "código da emenda parlamentar",
            CanonicalField::ValorPorEmenda => "valor por emenda",
            CanonicalField::ValorPorParlamentar => "valor por parlamentar",
            CanonicalField::Valor => "valor",
            CanonicalField::FuncionalProgramatico => "funcional programático",
            CanonicalField::NumeroProposta => "numero da proposta",
            CanonicalField::NumeroPortaria => "numero da portaria",
            CanonicalField::Data => "data",
        }
    }

    /// Whether the field carries a monetary value.
    pub fn is_monetary(&self) -> bool {
        matches!(
            self,
            CanonicalField::ValorPorEmenda
                | CanonicalField::ValorPorParlamentar
                | CanonicalField::Valor
        )
    }
}

/// One normalized table row.
///
/// All fields are nullable; a field the source table never carried is
/// `None`, which is a valid terminal state rather than an error. Monetary
/// fields hold the canonical decimal rendering (`"12345.67"`) once cleaned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub uf: Option<String>,
    pub municipio: Option<String>,
    pub codigo_ibge: Option<String>,
    pub nome_fundo: Option<String>,
    pub cnpj: Option<String>,
    pub nome_estabelecimento: Option<String>,
    pub codigo_cnes: Option<String>,
    pub cnpj_estabelecimento: Option<String>,
    pub codigo_emenda: Option<String>,
    pub valor_por_emenda: Option<String>,
    pub valor_por_parlamentar: Option<String>,
    pub valor: Option<String>,
    pub funcional_programatico: Option<String>,
    pub numero_proposta: Option<String>,
    pub numero_portaria: Option<String>,
    pub data: Option<String>,
}

impl CanonicalRecord {
    /// Read a field by its canonical name.
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        match field {
            CanonicalField::Uf => self.uf.as_deref(),
            CanonicalField::Municipio => self.municipio.as_deref(),
            CanonicalField::CodigoIbge => self.codigo_ibge.as_deref(),
            CanonicalField::NomeFundo => self.nome_fundo.as_deref(),
            CanonicalField::Cnpj => self.cnpj.as_deref(),
            CanonicalField::NomeEstabelecimento => self.nome_estabelecimento.as_deref(),
            CanonicalField::CodigoCnes => self.codigo_cnes.as_deref(),
            CanonicalField::CnpjEstabelecimento => self.cnpj_estabelecimento.as_deref(),
            CanonicalField::CodigoEmenda => self.codigo_emenda.as_deref(),
            CanonicalField::ValorPorEmenda => self.valor_por_emenda.as_deref(),
            CanonicalField::ValorPorParlamentar => self.valor_por_parlamentar.as_deref(),
            CanonicalField::Valor => self.valor.as_deref(),
            CanonicalField::FuncionalProgramatico => self.funcional_programatico.as_deref(),
            CanonicalField::NumeroProposta => self.numero_proposta.as_deref(),
            CanonicalField::NumeroPortaria => self.numero_portaria.as_deref(),
            CanonicalField::Data => self.data.as_deref(),
        }
    }

    /// Write a field by its canonical name.
    pub fn set(&mut self, field: CanonicalField, value: Option<String>) {
        let slot = match field {
            CanonicalField::Uf => &mut self.uf,
            CanonicalField::Municipio => &mut self.municipio,
            CanonicalField::CodigoIbge => &mut self.codigo_ibge,
            CanonicalField::NomeFundo => &mut self.nome_fundo,
            CanonicalField::Cnpj => &mut self.cnpj,
            CanonicalField::NomeEstabelecimento => &mut self.nome_estabelecimento,
            CanonicalField::CodigoCnes => &mut self.codigo_cnes,
            CanonicalField::CnpjEstabelecimento => &mut self.cnpj_estabelecimento,
            CanonicalField::CodigoEmenda => &mut self.codigo_emenda,
            CanonicalField::ValorPorEmenda => &mut self.valor_por_emenda,
            CanonicalField::ValorPorParlamentar => &mut self.valor_por_parlamentar,
            CanonicalField::Valor => &mut self.valor,
            CanonicalField::FuncionalProgramatico => &mut self.funcional_programatico,
            CanonicalField::NumeroProposta => &mut self.numero_proposta,
            CanonicalField::NumeroPortaria => &mut self.numero_portaria,
            CanonicalField::Data => &mut self.data,
        };
        *slot = value;
    }

    /// Values in fixed canonical order, for delimited export.
    pub fn as_row(&self) -> Vec<&str> {
        CanonicalField::ALL
            .iter()
            .map(|f| self.get(*f).unwrap_or(""))
            .collect()
    }

    /// True when every field is null.
    pub fn is_empty(&self) -> bool {
        CanonicalField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// The merged output of one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Deduplicated, ordered records.
    pub records: Vec<CanonicalRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names in fixed canonical order.
    pub fn header() -> Vec<&'static str> {
        CanonicalField::ALL.iter().map(|f| f.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_stable() {
        let names = Dataset::header();
        assert_eq!(names.first(), Some(&"UF"));
        assert_eq!(names.last(), Some(&"data"));
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut record = CanonicalRecord::default();
        assert!(record.is_empty());

        record.set(CanonicalField::Municipio, Some("Niterói".to_string()));
        assert_eq!(record.get(CanonicalField::Municipio), Some("Niterói"));
        assert!(record.get(CanonicalField::Uf).is_none());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_as_row_blanks_missing_fields() {
        let mut record = CanonicalRecord::default();
        record.set(CanonicalField::Uf, Some("RJ".to_string()));

        let row = record.as_row();
        assert_eq!(row.len(), 16);
        assert_eq!(row[0], "RJ");
        assert!(row[1..].iter().all(|v| v.is_empty()));
    }
}
