//! Pagination arithmetic shared by every listing page.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Maximum page buttons shown at once.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// `ceil(total / page_size)`; zero rows or a zero page size give zero pages.
#[must_use]
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

/// Page numbers to render: a window of up to `max_visible` pages centered on
/// `current`, shifted left when it would run past the last page.
#[must_use]
pub fn page_window(current: u32, total_pages: u32, max_visible: u32) -> Vec<u32> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = total_pages.min(start + max_visible - 1);
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    (start..=end).collect()
}

/// 1-based inclusive row range `(first, last)` shown on `page`.
/// `(0, 0)` when there are no rows.
#[must_use]
pub fn visible_range(page: u32, page_size: u32, total: u64) -> (u64, u64) {
    if total == 0 || page_size == 0 {
        return (0, 0);
    }
    let start = u64::from(page.max(1) - 1) * u64::from(page_size);
    let first = (start + 1).min(total);
    let last = (start + u64::from(page_size)).min(total);
    (first, last)
}

/// "Showing 11 to 20 of 23 results".
#[must_use]
pub fn range_label(page: u32, page_size: u32, total: u64) -> String {
    let (first, last) = visible_range(page, page_size, total);
    format!("Showing {first} to {last} of {total} results")
}

/// Whether `target` is a page the user can move to.
#[must_use]
pub fn can_go_to(target: u32, total_pages: u32) -> bool {
    target >= 1 && target <= total_pages
}

/// Page to show after removing one row from `page` that held `rows_on_page`.
/// Steps back when the last row of a non-first page disappears.
#[must_use]
pub fn page_after_removal(page: u32, rows_on_page: usize) -> u32 {
    if rows_on_page <= 1 && page > 1 { page - 1 } else { page }
}

/// Slice `items` for client-side pagination.
#[must_use]
pub fn slice_page<T: Clone>(items: &[T], page: u32, page_size: u32) -> Vec<T> {
    let start = (page.max(1) as usize - 1).saturating_mul(page_size as usize);
    items.iter().skip(start).take(page_size as usize).cloned().collect()
}
