//! Merging of cleaned record sets into the final dataset.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{CanonicalRecord, Dataset};

/// Merge record sets into one dataset.
///
/// Concatenates preserving relative order, removes exact-duplicate records
/// (all fields equal, first occurrence kept), then sorts for presentation:
/// order number numeric ascending with nulls last, municipality as the
/// tie-breaker.
pub fn merge(record_sets: Vec<Vec<CanonicalRecord>>) -> Dataset {
    let mut seen: HashSet<CanonicalRecord> = HashSet::new();
    let mut records: Vec<CanonicalRecord> = Vec::new();

    for set in record_sets {
        for record in set {
            if seen.insert(record.clone()) {
                records.push(record);
            }
        }
    }

    records.sort_by(compare_for_presentation);

    Dataset { records }
}

fn compare_for_presentation(a: &CanonicalRecord, b: &CanonicalRecord) -> Ordering {
    order_number_key(a)
        .cmp(&order_number_key(b))
        .then_with(|| match (&a.municipio, &b.municipio) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Numeric sort key; non-numeric or absent order numbers sort last.
fn order_number_key(record: &CanonicalRecord) -> (bool, Decimal) {
    match record
        .numero_portaria
        .as_deref()
        .and_then(|n| Decimal::from_str(n.trim()).ok())
    {
        Some(n) => (false, n),
        None => (true, Decimal::ZERO),
    }
}
