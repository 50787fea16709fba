use std::num::NonZeroUsize;

use crate::domain::entities::column::{Column, ColumnSchema};
use crate::domain::entities::record::Record;
use crate::domain::entities::view::{DerivedView, SortDirection, SortSpec, ViewOptions, ViewState};
use crate::domain::error::GridConfigError;
use crate::domain::grid::actions::RowActions;
use crate::domain::grid::filter::filter_indices;
use crate::domain::grid::paginate::{clamp_page, page_range, total_pages};
use crate::domain::grid::sort::sort_indices;

/// Pure: an out-of-range page in `state` yields an empty window, it is not
/// clamped.
pub fn compose<R: Record>(
    records: &[R],
    schema: &ColumnSchema<R>,
    state: &ViewState,
    options: &ViewOptions,
) -> DerivedView {
    let mut derived = order(records, schema, state, options);
    window(&mut derived, state.current_page, options.page_size);
    derived
}

fn order<R: Record>(
    records: &[R],
    schema: &ColumnSchema<R>,
    state: &ViewState,
    options: &ViewOptions,
) -> DerivedView {
    let filtered = if options.searchable {
        filter_indices(records, schema.columns(), &state.search_term)
    } else {
        (0..records.len()).collect()
    };

    let mut sorted = filtered.clone();
    if options.sortable {
        if let Some(spec) = state.sort.as_ref() {
            if schema.get(&spec.key).is_some_and(|column| column.sortable) {
                sort_indices(records, &mut sorted, &spec.key, spec.direction);
            }
        }
    }

    let total_items = sorted.len();
    DerivedView {
        filtered,
        sorted,
        page: 0..0,
        total_items,
        total_pages: 0,
    }
}

fn window(derived: &mut DerivedView, page: usize, page_size: NonZeroUsize) {
    derived.total_pages = total_pages(derived.total_items, page_size);
    derived.page = page_range(derived.sorted.len(), page, page_size);
}

// Records, search and sort changes rebuild the ordering; paging only moves
// the window.
pub struct GridView<R: Record> {
    records: Vec<R>,
    schema: ColumnSchema<R>,
    options: ViewOptions,
    state: ViewState,
    actions: RowActions<R>,
    derived: DerivedView,
}

impl<R: Record> GridView<R> {
    pub fn new(schema: ColumnSchema<R>, options: ViewOptions) -> Self {
        Self {
            records: Vec::new(),
            schema,
            options,
            state: ViewState::default(),
            actions: RowActions::default(),
            derived: DerivedView::default(),
        }
    }

    pub fn set_actions(&mut self, actions: RowActions<R>) {
        self.actions = actions;
    }

    pub fn columns(&self) -> &[Column<R>] {
        self.schema.columns()
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn total_items(&self) -> usize {
        self.derived.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.derived.total_pages
    }

    pub fn sort_direction_of(&self, key: &str) -> Option<SortDirection> {
        self.state
            .sort
            .as_ref()
            .filter(|spec| spec.key == key)
            .map(|spec| spec.direction)
    }

    pub fn is_loading(&self) -> bool {
        self.options.loading
    }

    pub fn is_empty(&self) -> bool {
        !self.options.loading && self.derived.total_items == 0
    }

    pub fn page_rows(&self) -> Vec<&R> {
        self.rows(self.derived.paged())
    }

    fn rows(&self, indices: &[usize]) -> Vec<&R> {
        indices.iter().map(|&idx| &self.records[idx]).collect()
    }

    // On error the previous records stay in place.
    pub fn set_records(&mut self, records: Vec<R>) -> Result<(), GridConfigError> {
        self.schema.validate_records(&records)?;
        log::debug!("grid received {} records", records.len());
        self.records = records;
        self.state.current_page = 1;
        self.reorder();
        Ok(())
    }

    pub fn upsert_record(&mut self, record: R) -> Result<(), GridConfigError> {
        self.schema.validate_record(&record)?;
        let id = record.id();
        match self.position(&id) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
        self.reorder();
        Ok(())
    }

    pub fn remove_record(&mut self, id: &R::Id) -> Option<R> {
        let pos = self.position(id)?;
        let removed = self.records.remove(pos);
        self.reorder();
        Some(removed)
    }

    pub fn search(&mut self, term: &str) {
        if !self.options.searchable || self.state.search_term == term {
            return;
        }
        self.state.search_term = term.to_string();
        self.state.current_page = 1;
        self.reorder();
    }

    /// Same key flips the direction, a new key starts ascending. False when
    /// the column cannot be sorted.
    pub fn sort(&mut self, key: &str) -> bool {
        if !self.options.sortable || !self.schema.get(key).is_some_and(|column| column.sortable) {
            return false;
        }

        let direction = match self.state.sort.as_ref() {
            Some(spec) if spec.key == key => spec.direction.toggled(),
            _ => SortDirection::Asc,
        };
        self.state.sort = Some(SortSpec {
            key: key.to_string(),
            direction,
        });
        self.state.current_page = 1;
        self.reorder();
        true
    }

    pub fn set_page(&mut self, page: usize) -> usize {
        self.state.current_page = page;
        self.rewindow();
        self.state.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.state.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> usize {
        self.set_page(self.state.current_page.saturating_sub(1))
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        if self.options.page_size == page_size {
            return;
        }
        self.options.page_size = page_size;
        self.rewindow();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.options.loading = loading;
    }

    pub fn can_add(&self) -> bool {
        self.actions.can_add()
    }

    pub fn can_edit(&self) -> bool {
        self.actions.can_edit()
    }

    pub fn can_delete(&self) -> bool {
        self.actions.can_delete()
    }

    pub fn add(&mut self) -> bool {
        self.actions.fire_add()
    }

    pub fn edit(&mut self, id: &R::Id) -> bool {
        match self.position(id) {
            Some(pos) => self.actions.fire_edit(&self.records[pos]),
            None => false,
        }
    }

    pub fn delete(&mut self, id: &R::Id) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.actions.fire_delete(id.clone())
    }

    fn position(&self, id: &R::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == *id)
    }

    fn reorder(&mut self) {
        self.derived = compose(&self.records, &self.schema, &self.state, &self.options);
        self.rewindow();
    }

    fn rewindow(&mut self) {
        let pages = total_pages(self.derived.total_items, self.options.page_size);
        self.state.current_page = clamp_page(self.state.current_page, pages);
        window(
            &mut self.derived,
            self.state.current_page,
            self.options.page_size,
        );
    }
}

#[cfg(test)]
impl<R: Record> GridView<R> {
    pub fn with_records(
        schema: ColumnSchema<R>,
        options: ViewOptions,
        records: Vec<R>,
    ) -> Result<Self, GridConfigError> {
        let mut view = Self::new(schema, options);
        view.set_records(records)?;
        Ok(view)
    }

    pub fn with_actions(mut self, actions: RowActions<R>) -> Self {
        self.set_actions(actions);
        self
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filtered_rows(&self) -> Vec<&R> {
        self.rows(&self.derived.filtered)
    }

    pub fn sorted_rows(&self) -> Vec<&R> {
        self.rows(&self.derived.sorted)
    }
}
