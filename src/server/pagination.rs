/// Fixed page size of the public API.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page slice over an ordered selection. Page 0 and pages past the
/// end come back empty instead of failing.
pub fn paginate<T>(selection: &[T], page: usize) -> &[T] {
    let start = match page.checked_sub(1) {
        Some(n) => n.saturating_mul(QUESTIONS_PER_PAGE),
        None => return &[],
    };
    if start >= selection.len() {
        return &[];
    }
    let end = selection.len().min(start + QUESTIONS_PER_PAGE);
    &selection[start..end]
}
