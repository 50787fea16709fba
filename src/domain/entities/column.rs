use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::error::GridConfigError;

pub type Renderer<R> = Arc<dyn Fn(&FieldValue, &R) -> String + Send + Sync>;

pub struct Column<R> {
    pub key: String,
    pub title: String,
    pub sortable: bool,
    pub width: Option<String>,
    renderer: Option<Renderer<R>>,
}

impl<R> Column<R> {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: true,
            width: None,
            renderer: None,
        }
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn render<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&FieldValue, &R) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }
}

impl<R: Record> Column<R> {
    pub fn display(&self, record: &R) -> String {
        let value = record.value(&self.key).unwrap_or(FieldValue::Null);
        match &self.renderer {
            Some(renderer) => renderer(&value, record),
            None => value.to_string(),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            sortable: self.sortable,
            width: self.width.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

pub struct ColumnSchema<R> {
    columns: Vec<Column<R>>,
}

impl<R> ColumnSchema<R> {
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, GridConfigError> {
        if columns.is_empty() {
            return Err(GridConfigError::NoColumns);
        }

        let mut seen = BTreeSet::new();
        for column in &columns {
            if column.key.trim().is_empty() {
                return Err(GridConfigError::EmptyKey {
                    title: column.title.clone(),
                });
            }
            if !seen.insert(column.key.as_str()) {
                return Err(GridConfigError::DuplicateColumn {
                    key: column.key.clone(),
                });
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn get(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|column| column.key == key)
    }
}

impl<R: Record> ColumnSchema<R> {
    pub fn validate_record(&self, record: &R) -> Result<(), GridConfigError> {
        match self
            .columns
            .iter()
            .find(|column| record.value(&column.key).is_none())
        {
            Some(column) => Err(GridConfigError::UnknownField {
                key: column.key.clone(),
                title: column.title.clone(),
                record: format!("{:?}", record.id()),
            }),
            None => Ok(()),
        }
    }

    pub fn validate_records(&self, records: &[R]) -> Result<(), GridConfigError> {
        records
            .iter()
            .try_for_each(|record| self.validate_record(record))
    }
}

impl<R> Clone for ColumnSchema<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnSchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.columns).finish()
    }
}
