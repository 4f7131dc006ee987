//! Result pagination — pure slicing over the ordered hit list, never fails.

/// Slice window over `total` ordered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub total_pages: usize,
}

/// Computes the half-open window for a 1-based `page` and `limit`.
/// An out-of-range page yields an empty window, not an error.
/// Zero total yields zero pages.
pub fn page_window(total: usize, page: usize, limit: usize) -> PageWindow {
    let page = page.max(1);
    let limit = limit.max(1);
    let total_pages = total.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit);
    if start >= total {
        return PageWindow {
            start: total,
            end: total,
            total_pages,
        };
    }
    PageWindow {
        start,
        end: start.saturating_add(limit).min(total),
        total_pages,
    }
}

/// Slices `items` to the requested page, returning the page and the total
/// page count. Order is preserved.
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> (Vec<T>, usize) {
    let window = page_window(items.len(), page, limit);
    (items[window.start..window.end].to_vec(), window.total_pages)
}
