//! Paginate stage.

/// One page of an ordered row list, with its position in the whole.
///
/// Page numbers are 1-based. The visible range is the 1-based, inclusive
/// span of entries shown, and is `0..=0` when there are no entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<'a, R> {
    rows: Vec<&'a R>,
    page: usize,
    page_size: usize,
    total_pages: usize,
    total_entries: usize,
}

impl<'a, R> PageSlice<'a, R> {
    /// Returns the rows on this page.
    pub fn rows(&self) -> &[&'a R] {
        &self.rows
    }

    /// Consumes the page and returns its rows.
    pub fn into_rows(self) -> Vec<&'a R> {
        self.rows
    }

    /// Returns the effective (clamped) page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the effective (clamped) page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of pages, at least 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the number of entries across all pages.
    pub fn total_entries(&self) -> usize {
        self.total_entries
    }

    /// Returns the 1-based index of the first visible entry, or 0 when empty.
    pub fn range_start(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// Returns the 1-based index of the last visible entry, or 0 when empty.
    pub fn range_end(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + self.rows.len()
        }
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows on this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns `true` if an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Number of pages needed for `len` entries, never less than 1.
///
/// A zero page size is treated as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a page number into `[1, total_pages(len, page_size)]`.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size))
}

/// Slices the ordered rows into one page.
///
/// `page_size` is clamped to at least 1 and `page` into the valid range
/// before slicing, so a stale page number yields the last real page instead
/// of an empty one.
pub fn paginate<'a, R>(rows: &[&'a R], page: usize, page_size: usize) -> PageSlice<'a, R> {
    let page_size = page_size.max(1);
    let total_entries = rows.len();
    let total_pages = total_pages(total_entries, page_size);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_entries);
    let visible = rows.get(start..end).unwrap_or_default().to_vec();

    PageSlice {
        rows: visible,
        page,
        page_size,
        total_pages,
        total_entries,
    }
}
