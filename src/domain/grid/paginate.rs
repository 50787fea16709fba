use std::num::NonZeroUsize;
use std::ops::Range;

pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Window of 1-based `page` over `len` items. Pages past the end (and page 0)
/// give an empty range.
pub fn page_range(len: usize, page: usize, page_size: NonZeroUsize) -> Range<usize> {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|zero_based| zero_based.checked_mul(page_size.get()))
        .filter(|start| *start < len)
    else {
        return len..len;
    };
    let end = start.saturating_add(page_size.get()).min(len);
    start..end
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}
