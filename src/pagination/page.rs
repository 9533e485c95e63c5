use serde::{Deserialize, Serialize};

/// Paginator totals a page needs for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub count: usize,
    pub per_page: usize,
    pub num_pages: usize,
}

/// One page of a paginated collection
///
/// Holds the slice for this page plus a copy of the paginator totals, so it
/// does not borrow the paginator that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<S> {
    object_list: S,
    number: usize,
    len: usize,
    bounds: PageBounds,
}

impl<S> Page<S> {
    pub(crate) fn new(object_list: S, number: usize, len: usize, bounds: PageBounds) -> Self {
        Self {
            object_list,
            number,
            len,
            bounds,
        }
    }

    pub fn object_list(&self) -> &S {
        &self.object_list
    }

    pub fn into_object_list(self) -> S {
        self.object_list
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn count(&self) -> usize {
        self.bounds.count
    }

    pub fn num_pages(&self) -> usize {
        self.bounds.num_pages
    }

    pub fn has_next(&self) -> bool {
        self.number < self.bounds.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    /// Not validated; check `has_next` first.
    pub fn next_page_number(&self) -> usize {
        self.number + 1
    }

    /// Not validated; check `has_previous` first.
    pub fn previous_page_number(&self) -> usize {
        self.number.saturating_sub(1)
    }

    /// 1-based position of the first item on this page, 0 when the page is empty
    pub fn start_index(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.bounds.per_page * (self.number - 1) + 1
    }

    /// 1-based position of the last item on this page, 0 when the page is empty
    pub fn end_index(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        // The last page may hold orphans from the page that would follow it.
        if self.number == self.bounds.num_pages {
            return self.bounds.count;
        }
        self.number * self.bounds.per_page
    }

    pub fn summary<'x, T>(&self) -> PageSummary<T>
    where
        S: Clone + IntoIterator<Item = &'x T>,
        T: Clone + 'x,
    {
        PageSummary {
            items: self.object_list.clone().into_iter().cloned().collect(),
            page: self.number,
            page_size: self.bounds.per_page,
            total: self.bounds.count,
            num_pages: self.bounds.num_pages,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            start_index: self.start_index(),
            end_index: self.end_index(),
        }
    }
}

/// Serializable snapshot of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub num_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub start_index: usize,
    pub end_index: usize,
}
