use crate::domain::entities::column::Column;
use crate::domain::entities::record::Record;

pub fn filter_indices<R: Record>(records: &[R], columns: &[Column<R>], term: &str) -> Vec<usize> {
    if term.trim().is_empty() {
        return (0..records.len()).collect();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_any_column(*record, columns, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

fn matches_any_column<R: Record>(record: &R, columns: &[Column<R>], needle: &str) -> bool {
    columns.iter().any(|column| {
        record
            .value(&column.key)
            .and_then(|value| value.search_text())
            .is_some_and(|text| text.contains(needle))
    })
}
