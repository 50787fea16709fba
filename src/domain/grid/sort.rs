use std::cmp::Ordering;

use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::entities::view::SortDirection;

enum SortKey {
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
}

impl SortKey {
    fn cmp_ascending(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
            (SortKey::Missing, _) => Ordering::Less,
            (_, SortKey::Missing) => Ordering::Greater,
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::Int(a), SortKey::Float(b)) => (*a as f64).total_cmp(b),
            (SortKey::Float(a), SortKey::Int(b)) => a.total_cmp(&(*b as f64)),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            // keys of one run are either all numbers or all text
            (SortKey::Text(_), _) => Ordering::Greater,
            (_, SortKey::Text(_)) => Ordering::Less,
        }
    }
}

// Numeric only when every non-null value of the column is numeric, else
// lower-cased text. Nulls first ascending, last descending.
pub fn sort_indices<R: Record>(
    records: &[R],
    indices: &mut Vec<usize>,
    key: &str,
    direction: SortDirection,
) {
    let values: Vec<(usize, FieldValue)> = indices
        .iter()
        .map(|&idx| {
            let value = records[idx].value(key).unwrap_or(FieldValue::Null);
            (idx, value)
        })
        .collect();

    let numeric = values
        .iter()
        .all(|(_, value)| value.is_null() || value.as_number().is_some());

    let mut keyed: Vec<(SortKey, usize)> = values
        .into_iter()
        .map(|(idx, value)| {
            let sort_key = match (value, numeric) {
                (FieldValue::Null, _) => SortKey::Missing,
                (FieldValue::Int(v), true) => SortKey::Int(v),
                (FieldValue::Float(v), true) => SortKey::Float(v),
                (other, _) => SortKey::Text(other.to_string().to_lowercase()),
            };
            (sort_key, idx)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Asc => a.cmp_ascending(b),
        SortDirection::Desc => b.cmp_ascending(a),
    });

    *indices = keyed.into_iter().map(|(_, idx)| idx).collect();
}
