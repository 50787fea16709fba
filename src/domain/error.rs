#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridConfigError {
    #[error("a grid needs at least one column")]
    NoColumns,

    #[error("column `{title}` has an empty field key")]
    EmptyKey { title: String },

    #[error("column key `{key}` is declared more than once")]
    DuplicateColumn { key: String },

    #[error("column `{title}` refers to field `{key}`, which record {record} does not have")]
    UnknownField {
        key: String,
        title: String,
        record: String,
    },
}
