//! Portaria extraction pipeline.

pub mod aggregate;
pub mod clean;
pub mod correction;
pub mod identifier;
pub mod normalize;
pub mod processor;
pub mod rules;
pub mod tables;

pub use aggregate::merge;
pub use clean::{clean, CleanOutcome, InvalidValue};
pub use correction::{parse_corrected, TableCorrector};
pub use identifier::{extract_identifier, IdentifierExtractor};
pub use normalize::{map_header, normalize};
pub use processor::{GazetteProcessor, ProcessOutcome};
pub use tables::{extract_tables, extract_tables_with, flatten_to_text, RawTable};
