//! Truncate-on-assignment helpers for bounded string fields.
//!
//! Bounds count bytes. A cut that would land inside a multi-byte UTF-8
//! sequence moves back to the previous char boundary, so results are always
//! valid UTF-8 and never longer than the bound.

/// Borrow the longest prefix of `s` that fits in `max` bytes.
#[inline]
pub fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Owned variant of [`truncate`], reusing the allocation.
pub fn truncate_owned(mut s: String, max: usize) -> String {
    let keep = truncate(&s, max).len();
    s.truncate(keep);
    s
}
