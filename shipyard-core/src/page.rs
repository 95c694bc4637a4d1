//! Listing pagination.

/// Page returned when no page number is requested.
pub const DEFAULT_PAGE_NUMBER: usize = 0;
/// Page size used when none is requested.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Return the zero-indexed page `page_number` of `page_size` items.
///
/// The window is clamped to the input; a page starting past the end is
/// empty.
pub fn paginate<T>(items: Vec<T>, page_number: Option<usize>, page_size: Option<usize>) -> Vec<T> {
    let page_number = page_number.unwrap_or(DEFAULT_PAGE_NUMBER);
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let start = page_number.saturating_mul(page_size);
    items.into_iter().skip(start).take(page_size).collect()
}
