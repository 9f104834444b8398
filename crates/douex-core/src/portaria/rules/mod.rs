//! Rule-based validators and parsers for portaria fields.

pub mod dates;
pub mod ids;
pub mod money;
pub mod patterns;

pub use dates::{normalize_date, parse_written_date};
pub use ids::{validate_cnes, validate_cnpj, validate_cpf, validate_ibge, validate_name, validate_uf};
pub use money::{format_canonical, parse_brl};
