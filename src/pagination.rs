//! Fixed-size pages over a view.

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page_index: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    First,
    Last,
    Next,
    Prev,
}

/// Where a navigation request left the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moved {
    To(usize),
    Boundary(usize),
}

impl Moved {
    pub fn index(self) -> usize {
        match self {
            Moved::To(index) | Moved::Boundary(index) => index,
        }
    }
}

/// Number of pages for `len` items. Never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slices page `page_index` out of `view`. Indices past the end land on the
/// last page, and a `page_size` of zero counts as one.
pub fn page<T>(view: &[T], page_index: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(view.len(), page_size);
    let page_index = page_index.min(total_pages - 1);

    let start = (page_index * page_size).min(view.len());
    let end = (start + page_size).min(view.len());

    Page {
        items: &view[start..end],
        page_index,
        total_pages,
        has_prev: page_index > 0,
        has_next: page_index + 1 < total_pages,
    }
}

pub fn navigate(current: usize, total_pages: usize, nav: Navigation) -> Moved {
    let last = total_pages.max(1) - 1;
    let current = current.min(last);

    match nav {
        Navigation::First => Moved::To(0),
        Navigation::Last => Moved::To(last),
        Navigation::Next if current < last => Moved::To(current + 1),
        Navigation::Prev if current > 0 => Moved::To(current - 1),
        Navigation::Next | Navigation::Prev => Moved::Boundary(current),
    }
}
