//! Binary heap primitives and partial sorting.
//!
//! Every heap here is a max-heap with respect to the `is_less` it is given,
//! laid out over `v[start..end]` with node `k` at `start + k` and its
//! children at `start + 2k + 1` and `start + 2k + 2`. Passing a reversed
//! comparator turns it into a min-heap.

use crate::sort::{shell_sort, IndexedAccess};

/// Rearranges `v[start..end]` into a heap.
pub fn heapify<T, A, F>(v: &mut A, start: usize, end: usize, is_less: &mut F)
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = end - start;
    for node in (0..len / 2).rev() {
        sift_down(v, start, node, len, is_less);
    }
}

/// The child of `node` that belongs above its sibling, or `None` for a leaf.
#[inline]
fn greater_child<T, A, F>(
    v: &A,
    start: usize,
    node: usize,
    size: usize,
    is_less: &mut F,
) -> Option<usize>
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let left = 2 * node + 1;
    if left >= size {
        return None;
    }
    let right = left + 1;
    if right < size && is_less(v.get_ref(start + left), v.get_ref(start + right)) {
        Some(right)
    } else {
        Some(left)
    }
}

/// Moves the element at `node` down the heap `v[start..start + size]` until
/// neither child is greater.
pub fn sift_down<T, A, F>(v: &mut A, start: usize, mut node: usize, size: usize, is_less: &mut F)
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    while let Some(child) = greater_child(v, start, node, size, is_less) {
        let (parent, child_at) = (start + node, start + child);
        if !is_less(v.get_ref(parent), v.get_ref(child_at)) {
            return;
        }
        v.swap_elements(parent, child_at);
        node = child;
    }
}

/// Sift up element at `node` in heap rooted at `start`.
pub fn sift_up<T, A, F>(v: &mut A, start: usize, mut node: usize, is_less: &mut F)
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    while node > 0 {
        let parent = (node - 1) / 2;
        if !is_less(v.get_ref(start + parent), v.get_ref(start + node)) {
            break;
        }
        v.swap_elements(start + parent, start + node);
        node = parent;
    }
}

/// Grows the heap `v[start..end]` by the element already sitting at `end`.
///
/// Afterwards `v[start..end + 1]` is a heap.
pub fn push<T, A, F>(v: &mut A, start: usize, end: usize, is_less: &mut F)
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    sift_up(v, start, end - start, is_less);
}

/// Moves the top of the heap `v[start..end]` to `end - 1`.
///
/// Afterwards `v[start..end - 1]` is a heap. Does nothing on an empty heap.
pub fn pop<T, A, F>(v: &mut A, start: usize, end: usize, is_less: &mut F)
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    if end <= start {
        return;
    }
    let last = end - 1;
    v.swap_elements(start, last);
    sift_down(v, start, 0, last - start, is_less);
}

/// Pushes the element at `item` into the heap `v[start..end]` and pops the
/// greatest of the two back into `item`, as one operation.
///
/// `item` must lie outside `start..end`. Returns `true` if the heap top was
/// exchanged, `false` if `item` already held the greatest value.
pub fn push_pop<T, A, F>(v: &mut A, start: usize, end: usize, item: usize, is_less: &mut F) -> bool
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(item < start || item >= end);
    if end <= start || !is_less(v.get_ref(item), v.get_ref(start)) {
        return false;
    }
    v.swap_elements(item, start);
    sift_down(v, start, 0, end - start, is_less);
    true
}

/// Returns `true` if `v[start..end]` satisfies the heap invariant.
pub fn is_heap<T, A, F>(v: &A, start: usize, end: usize, is_less: &mut F) -> bool
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = end - start;
    (1..len).all(|node| !is_less(v.get_ref(start + (node - 1) / 2), v.get_ref(start + node)))
}

/// Moves the `k` smallest elements of `v` into `v[..k]`, sorted ascending.
///
/// The tail `v[k..]` is used as a min-heap of candidates: each front element
/// greater than the smallest candidate is exchanged with it. The order left
/// in the tail is unspecified. Costs O(n log n) comparisons at most, without
/// sorting the tail.
///
/// # Panics
///
/// Panics if `k > v.len()`.
pub fn partial_sort<T, A, F>(v: &mut A, k: usize, is_less: &mut F)
where
    A: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(k <= len, "partial sort length {k} exceeds length {len}");

    let mut is_greater = |a: &T, b: &T| is_less(b, a);
    heapify(v, k, len, &mut is_greater);
    for i in 0..k {
        push_pop(v, k, len, i, &mut is_greater);
    }

    shell_sort(v, 0, k, is_less);
}

/// Like [`partial_sort`], but the front and the candidates live in two
/// different sequences.
///
/// Afterwards `front` holds the `front.len()` smallest elements of both,
/// sorted ascending, and `back` holds the rest in unspecified order.
pub fn partial_sort_split<T, A, B, F>(front: &mut A, back: &mut B, is_less: &mut F)
where
    A: IndexedAccess<T> + ?Sized,
    B: IndexedAccess<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let (front_len, back_len) = (front.len(), back.len());
    let mut is_greater = |a: &T, b: &T| is_less(b, a);

    heapify(back, 0, back_len, &mut is_greater);
    if back_len > 0 {
        for i in 0..front_len {
            if is_greater(front.get_ref(i), back.get_ref(0)) {
                std::mem::swap(front.get_ref_mut(i), back.get_ref_mut(0));
                sift_down(back, 0, 0, back_len, &mut is_greater);
            }
        }
    }

    shell_sort(front, 0, front_len, is_less);
}
