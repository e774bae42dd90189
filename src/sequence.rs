//! The storage contract a view resolves its positions against.

use std::collections::VecDeque;

use allocator_api2::alloc::Allocator;

/// A mutable, indexable, resizable ordered sequence.
///
/// Positions passed to these methods are physical positions. `get` and
/// `get_mut` return `None` past the end; `insert`, `remove` and `swap` panic
/// on out-of-bounds positions, as `Vec` does. Random access is not assumed to
/// be O(1).
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Inserts `item` at `index`, shifting everything after it up by one.
    fn insert(&mut self, index: usize, item: Self::Item);

    /// Removes and returns the item at `index`, shifting everything after it down by one.
    fn remove(&mut self, index: usize) -> Self::Item;

    fn swap(&mut self, a: usize, b: usize);
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline]
    fn insert(&mut self, index: usize, item: T) {
        Vec::insert(self, index, item);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> T {
        Vec::remove(self, index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    #[inline]
    fn insert(&mut self, index: usize, item: T) {
        VecDeque::insert(self, index, item);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> T {
        VecDeque::remove(self, index).expect("removal index out of bounds")
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// Vectors placed in a custom allocator can be viewed like any other.
impl<T, A: Allocator> Sequence for allocator_api2::vec::Vec<T, A> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        allocator_api2::vec::Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline]
    fn insert(&mut self, index: usize, item: T) {
        allocator_api2::vec::Vec::insert(self, index, item);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> T {
        allocator_api2::vec::Vec::remove(self, index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}
