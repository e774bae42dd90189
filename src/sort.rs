//! Shell sort over anything indexable.
//!
//! The algorithms here never touch memory directly; every read, comparison
//! and exchange goes through [`IndexedAccess`], so the same code sorts a plain
//! slice or the translated positions of a strided view.

use std::collections::VecDeque;

/// Trait for indexed access to a collection.
///
/// This abstraction allows the sorting, heap and permutation algorithms to
/// work through an index translation instead of contiguous memory.
pub trait IndexedAccess<T> {
    /// Number of addressable elements.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a reference to the element at index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get_ref(&self, index: usize) -> &T;

    /// Get a mutable reference to the element at index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get_ref_mut(&mut self, index: usize) -> &mut T;

    /// Swap elements at two indices.
    fn swap_elements(&mut self, a: usize, b: usize);

    /// Reverses the elements in `start..end` by pairwise swaps.
    fn reverse_range(&mut self, start: usize, end: usize) {
        let (mut lo, mut hi) = (start, end);
        while lo + 1 < hi {
            hi -= 1;
            self.swap_elements(lo, hi);
            lo += 1;
        }
    }
}

impl<T> IndexedAccess<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get_ref(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn get_ref_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap_elements(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T> IndexedAccess<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get_ref(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn get_ref_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap_elements(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> IndexedAccess<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get_ref(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn get_ref_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap_elements(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// The gap sequence used by [`shell_sort`].
///
/// Starts at `len / 2`; each following gap is `gap * 5 / 11`, except that a
/// gap of 2 is followed by 1. Ends after 1.
#[derive(Clone, Debug)]
pub struct ShellGaps {
    gap: usize,
}

impl ShellGaps {
    #[inline]
    pub fn new(len: usize) -> Self {
        Self { gap: len / 2 }
    }
}

impl Iterator for ShellGaps {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let gap = self.gap;
        if gap == 0 {
            return None;
        }
        // floor(gap * 5 / 11) without overflowing on huge gaps.
        self.gap = if gap == 2 {
            1
        } else {
            gap / 11 * 5 + gap % 11 * 5 / 11
        };
        Some(gap)
    }
}

impl std::iter::FusedIterator for ShellGaps {}

/// Sorts `v[start..end]` in place using Shell sort.
///
/// Each pass is a gapped insertion sort: the element at `i` sinks past every
/// element `gap`, `2 * gap`, ... positions before it that is greater. Uses no
/// extra memory and is not stable.
pub fn shell_sort<T, A, F>(v: &mut A, start: usize, end: usize, is_less: &mut F)
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(start <= end && end <= v.len());
    let len = end - start;

    for gap in ShellGaps::new(len) {
        for i in (start + gap)..end {
            let mut j = i;
            while j >= start + gap && is_less(v.get_ref(j), v.get_ref(j - gap)) {
                v.swap_elements(j, j - gap);
                j -= gap;
            }
        }
    }
}

/// Returns `true` if `v[start..end]` is non-decreasing under `is_less`.
pub fn is_sorted_by<T, A, F>(v: &A, start: usize, end: usize, is_less: &mut F) -> bool
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    (start + 1..end).all(|i| !is_less(v.get_ref(i), v.get_ref(i - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps() {
        assert_eq!(ShellGaps::new(0).collect::<Vec<_>>(), Vec::<usize>::new());
        assert_eq!(ShellGaps::new(1).collect::<Vec<_>>(), Vec::<usize>::new());
        assert_eq!(ShellGaps::new(2).collect::<Vec<_>>(), vec![1]);
        assert_eq!(ShellGaps::new(5).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(ShellGaps::new(100).collect::<Vec<_>>(), vec![50, 22, 10, 4, 1]);
        assert_eq!(ShellGaps::new(11).collect::<Vec<_>>(), vec![5, 2, 1]);
    }

    #[test]
    fn test_gaps_end_in_one() {
        for len in 2..2000 {
            assert_eq!(ShellGaps::new(len).last(), Some(1), "len {len}");
        }
    }

    #[test]
    fn test_gaps_huge() {
        let mut gaps = ShellGaps::new(usize::MAX);
        let first = gaps.next().unwrap();
        assert_eq!(first, usize::MAX / 2);
        assert!(gaps.next().unwrap() < first);
    }

    #[test]
    fn test_shell_sort_slice() {
        let mut v = [22, 7, 2, -5, 8, 4];
        let len = v.len();
        shell_sort(&mut v[..], 0, len, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [-5, 2, 4, 7, 8, 22]);
    }

    #[test]
    fn test_shell_sort_subrange() {
        let mut v = vec![9, 8, 7, 6, 5, 4, 3];
        shell_sort(&mut v, 2, 6, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [9, 8, 4, 5, 6, 7, 3]);
    }

    #[test]
    fn test_shell_sort_descending_comparator() {
        let mut v: VecDeque<i32> = (0..20).collect();
        shell_sort(&mut v, 0, 20, &mut |a: &i32, b: &i32| a > b);
        assert!(v.iter().zip(v.iter().skip(1)).all(|(a, b)| a >= b));
    }

    #[test]
    fn test_shell_sort_many() {
        for len in 0..64 {
            let mut v: Vec<u32> = (0..len).map(|i| (i * 7919 + 13) % 31).collect();
            let mut expected = v.clone();
            expected.sort();
            shell_sort(&mut v, 0, len as usize, &mut |a: &u32, b: &u32| a < b);
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn test_reverse_range() {
        let mut v = vec![1, 2, 3, 4, 5];
        v.reverse_range(1, 5);
        assert_eq!(v, [1, 5, 4, 3, 2]);
        v.reverse_range(2, 2);
        assert_eq!(v, [1, 5, 4, 3, 2]);
    }

    #[test]
    fn test_is_sorted_by() {
        let v = [1, 2, 2, 5];
        assert!(is_sorted_by(&v[..], 0, 4, &mut |a: &i32, b: &i32| a < b));
        let v = [1, 3, 2];
        assert!(!is_sorted_by(&v[..], 0, 3, &mut |a: &i32, b: &i32| a < b));
        assert!(is_sorted_by(&v[..], 2, 3, &mut |a: &i32, b: &i32| a < b));
    }
}
