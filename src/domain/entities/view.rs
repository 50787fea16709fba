use std::num::NonZeroUsize;
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub current_page: usize,
    pub search_term: String,
    pub sort: Option<SortSpec>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            search_term: String::new(),
            sort: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub page_size: NonZeroUsize,
    pub searchable: bool,
    pub sortable: bool,
    pub loading: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            searchable: true,
            sortable: true,
            loading: false,
        }
    }
}

impl ViewOptions {
    #[cfg(test)]
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// Output of one composition run. Indices point into the source records;
/// `page` is a window into `sorted`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedView {
    pub filtered: Vec<usize>,
    pub sorted: Vec<usize>,
    pub page: Range<usize>,
    pub total_items: usize,
    pub total_pages: usize,
}

impl DerivedView {
    pub fn paged(&self) -> &[usize] {
        &self.sorted[self.page.clone()]
    }
}
