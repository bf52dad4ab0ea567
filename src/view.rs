use crate::{
    applications::ApplicationDatabase,
    pagination::{self, Moved, Navigation, Page},
    query::{self, SortKey, SortState, ViewRow},
};

/// What the list currently shows: search text, column order and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter: String,
    pub sort: SortState,
    pub page_index: usize,
    pub page_size: usize,
}

/// A change made to the store since the view was last drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Deleted,
    /// An edit that kept the record in place in the view.
    EditedInPlace,
    /// An edit touching a filtered or sorted column.
    EditedReordering,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: String::new(),
            sort: SortState::default(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page_index = 0;
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        self.page_index = 0;
    }

    pub fn record_mutation(&mut self, mutation: Mutation) {
        if mutation != Mutation::EditedInPlace {
            self.page_index = 0;
        }
    }

    /// Recomputes the filtered and sorted view of `db`.
    pub fn rows<'a>(&self, db: &'a ApplicationDatabase) -> Vec<ViewRow<'a>> {
        query::apply(
            &db.applications,
            &self.filter,
            self.sort.key,
            self.sort.ascending,
        )
    }

    pub fn current_page<'v, 'a>(&self, rows: &'v [ViewRow<'a>]) -> Page<'v, ViewRow<'a>> {
        pagination::page(rows, self.page_index, self.page_size)
    }

    pub fn navigate(&mut self, rows_len: usize, nav: Navigation) -> Moved {
        let total = pagination::total_pages(rows_len, self.page_size);
        let moved = pagination::navigate(self.page_index, total, nav);
        self.page_index = moved.index();

        moved
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(pagination::DEFAULT_PAGE_SIZE)
    }
}
