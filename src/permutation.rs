//! Lexicographic permutation stepping.

use crate::sort::IndexedAccess;

/// Rearranges `a` into its lexicographically next permutation.
///
/// Returns `false`, leaving `a` unchanged, if `a` is already the last
/// permutation, i.e. non-increasing from front to back. Sequences of fewer
/// than two elements have no successor.
///
/// ```
/// use strided_view::next_permutation;
///
/// let mut x = vec![4, 5, 3, 2, 1];
/// assert!(next_permutation(&mut x));
/// assert_eq!(x, [5, 1, 2, 3, 4]);
///
/// let mut last = vec![5, 4, 2, 0];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [5, 4, 2, 0]);
/// ```
#[inline]
pub fn next_permutation<T, A>(a: &mut A) -> bool
where
    T: Ord,
    A: IndexedAccess<T> + ?Sized,
{
    next_permutation_by(a, &mut |x: &T, y: &T| x < y)
}

/// [`next_permutation`] under the ordering given by `is_less`.
pub fn next_permutation_by<T, A, F>(a: &mut A, is_less: &mut F) -> bool
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = a.len();
    if len < 2 {
        return false;
    }

    // Rightmost ascent: the suffix after `pivot` is non-increasing.
    let mut i = len - 1;
    while !is_less(a.get_ref(i - 1), a.get_ref(i)) {
        i -= 1;
        if i == 0 {
            return false;
        }
    }
    let pivot = i - 1;

    // Rightmost element of the suffix greater than the pivot. One exists:
    // the element right after the pivot is.
    let mut j = len - 1;
    while !is_less(a.get_ref(pivot), a.get_ref(j)) {
        j -= 1;
    }

    a.swap_elements(pivot, j);
    a.reverse_range(pivot + 1, len);
    true
}
