// src/select/rotation.rs
//! Circular window extraction over a sorted band.

/// Take up to `want` items starting at `start`, wrapping to the front of the
/// slice when the window runs past the end.
///
/// Both the head and the wrapped tail are clamped to the slice length, so a
/// band smaller than the window contributes each element at most twice in a
/// single call. Repeats within one window are intended behavior for
/// undersized bands, not a bug: the weekly rotation contract is defined by
/// this exact slicing.
pub fn circular_window<T: Copy>(items: &[T], start: usize, want: usize) -> Vec<T> {
    let n = items.len();
    if n == 0 || want == 0 {
        return Vec::new();
    }
    debug_assert!(start < n, "start index must already be reduced mod len");

    let end = start + want;
    if end <= n {
        return items[start..end].to_vec();
    }

    let mut out = Vec::with_capacity(want.min(2 * n));
    out.extend_from_slice(&items[start..]);
    out.extend_from_slice(&items[..(end - n).min(n)]);
    out
}
