/// Listing page size.
pub const PAGE_SIZE: usize = 20;

/// Returns the `[start, start + per_page)` window for a 1-based page,
/// clamped to the slice. Pages past the end yield an empty slice.
pub fn page_window<T>(items: &[T], page: u32, per_page: usize) -> &[T] {
    let page = page.max(1) as usize;
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

pub fn total_pages(total: usize, per_page: usize) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page) as u32
}
