// web_app/state/pagination.rs - Client-side sorting and pagination
//
// PaginationSort only holds (current_page, sort_option, per_page). Sorted
// items, the visible page and the display range are recomputed from the
// item list on demand, so there is nothing to invalidate.
//
// The current page mirrors the `page` query parameter: page 1 is the
// canonical form and has no parameter at all.

use url::form_urlencoded;

use crate::web_app::model::{SortKeys, SortOption};

/// Query parameter carrying the current page
pub const PAGE_PARAM: &str = "page";

/// Sort and page position over a client-side item list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationSort {
    current_page: u32,
    sort_option: SortOption,
    per_page: usize,
}

/// One rendered page plus the numbers the pager displays
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub display_start: usize,
    pub display_end: usize,
    pub total: usize,
    pub page_count: u32,
}

impl PaginationSort {
    /// Starts on page 1 with the default order; a zero page size becomes 1
    pub fn new(per_page: usize) -> Self {
        Self {
            current_page: 1,
            sort_option: SortOption::Default,
            per_page: per_page.max(1),
        }
    }

    /// Starts on the page named by `query` (see [`page_from_query`])
    pub fn from_query(query: &str, per_page: usize) -> Self {
        let mut pagination = Self::new(per_page);
        pagination.current_page = page_from_query(query);
        pagination
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Moves to `page` without checking it against the item count
    ///
    /// Pages are 1-based; 0 is read as 1.
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Changes the order and goes back to the first page
    pub fn set_sort(&mut self, option: SortOption) {
        self.sort_option = option;
        self.current_page = 1;
    }

    /// Copy of `items` in the current sort order
    pub fn sorted_items<T: SortKeys + Clone>(&self, items: &[T]) -> Vec<T> {
        sort_items(items, self.sort_option)
    }

    /// The current page of the sorted items (empty past the end)
    pub fn paginated_items<T: SortKeys + Clone>(&self, items: &[T]) -> Vec<T> {
        self.page_slice(&self.sorted_items(items)).to_vec()
    }

    /// The current page of an already sorted slice
    pub fn page_slice<'a, T>(&self, sorted: &'a [T]) -> &'a [T] {
        let start = self.offset();
        if start >= sorted.len() {
            return &[];
        }
        let end = start.saturating_add(self.per_page).min(sorted.len());
        &sorted[start..end]
    }

    /// 1-based index of the first item on the page, 0 when there are no items
    pub fn display_start(&self, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            self.offset().saturating_add(1)
        }
    }

    /// 1-based index of the last item on the page, clamped to `total`
    pub fn display_end(&self, total: usize) -> usize {
        (self.current_page as usize)
            .saturating_mul(self.per_page)
            .min(total)
    }

    pub fn display_range(&self, total: usize) -> (usize, usize) {
        (self.display_start(total), self.display_end(total))
    }

    /// Number of pages needed for `total` items
    pub fn page_count(&self, total: usize) -> u32 {
        u32::try_from(total.div_ceil(self.per_page)).unwrap_or(u32::MAX)
    }

    /// Sorts, slices and measures `items` in one pass
    pub fn view<T: SortKeys + Clone>(&self, items: &[T]) -> PageView<T> {
        let sorted = self.sorted_items(items);
        let total = sorted.len();
        PageView {
            items: self.page_slice(&sorted).to_vec(),
            display_start: self.display_start(total),
            display_end: self.display_end(total),
            total,
            page_count: self.page_count(total),
        }
    }

    /// Applies an external change of the query string
    ///
    /// Returns true when the current page changed.
    pub fn sync_from_query(&mut self, query: &str) -> bool {
        let page = page_from_query(query);
        if page == self.current_page {
            return false;
        }
        tracing::debug!("Page {} -> {} from URL", self.current_page, page);
        self.current_page = page;
        true
    }

    /// `query` rewritten to carry the current page
    pub fn rewrite_query(&self, query: &str) -> String {
        query_with_page(query, self.current_page)
    }

    fn offset(&self) -> usize {
        (self.current_page.saturating_sub(1) as usize).saturating_mul(self.per_page)
    }
}

/// Stable sort of a copy of `items`; `Default` keeps the input order
pub fn sort_items<T: SortKeys + Clone>(items: &[T], option: SortOption) -> Vec<T> {
    let mut sorted = items.to_vec();
    match option {
        SortOption::Default => {}
        SortOption::PriceAsc => sorted.sort_by(|a, b| a.price().total_cmp(&b.price())),
        SortOption::PriceDesc => sorted.sort_by(|a, b| b.price().total_cmp(&a.price())),
        SortOption::RatingAsc => {
            sorted.sort_by(|a, b| a.rating_rate().total_cmp(&b.rating_rate()))
        }
        SortOption::RatingDesc => {
            sorted.sort_by(|a, b| b.rating_rate().total_cmp(&a.rating_rate()))
        }
    }
    sorted
}

/// Page named by the `page` parameter of `query`
///
/// Absent, empty, non-numeric and zero values all mean page 1. A leading
/// `?` is accepted.
pub fn page_from_query(query: &str) -> u32 {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == PAGE_PARAM)
        .and_then(|(_, value)| value.trim().parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

/// `query` with `page` set to `page`, or removed when `page` is 1
///
/// Every other `&`-separated piece is kept byte for byte and in order; only
/// keys are decoded, to recognise `page`. An existing `page` is replaced in
/// place (duplicates dropped), a new one is appended. Empty pieces are
/// dropped. Returns `""` or a string starting with `?`.
pub fn query_with_page(query: &str, page: u32) -> String {
    let page_piece = (page > 1).then(|| format!("{PAGE_PARAM}={page}"));
    let mut pieces: Vec<&str> = Vec::new();
    let mut placed = false;

    let raw = query.strip_prefix('?').unwrap_or(query);
    for piece in raw.split('&').filter(|p| !p.is_empty()) {
        if !is_page_piece(piece) {
            pieces.push(piece);
            continue;
        }
        if !placed {
            pieces.extend(page_piece.as_deref());
            placed = true;
        }
    }
    if !placed {
        pieces.extend(page_piece.as_deref());
    }

    if pieces.is_empty() {
        String::new()
    } else {
        format!("?{}", pieces.join("&"))
    }
}

fn is_page_piece(piece: &str) -> bool {
    let key = piece.split('=').next().unwrap_or_default();
    form_urlencoded::parse(key.as_bytes())
        .next()
        .is_some_and(|(key, _)| key == PAGE_PARAM)
}
