//! Iterator implementation for `View`.

use crate::range::Translator;
use crate::sequence::Sequence;

/// An iterator over references to the elements of a [`View`](crate::View).
///
/// Created by [`View::iter`](crate::View::iter). It captures the view's
/// translator and length when created; if the origin turns out to be
/// shorter than that snapshot the iterator stops early.
pub struct Iter<'v, S: Sequence + ?Sized> {
    pub(crate) origin: &'v S,
    pub(crate) translator: Translator,
    /// Next logical index from the front
    pub(crate) front: usize,
    /// One past the next logical index from the back
    pub(crate) back: usize,
}

impl<'v, S: Sequence + ?Sized> Iter<'v, S> {
    #[inline]
    fn resolve(&mut self, index: usize) -> Option<&'v S::Item> {
        let origin: &'v S = self.origin;
        let item = origin.get(self.translator.translate(index));
        if item.is_none() {
            self.front = self.back;
        }
        item
    }
}

impl<'v, S: Sequence + ?Sized> Iterator for Iter<'v, S> {
    type Item = &'v S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        self.resolve(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'v, S: Sequence + ?Sized> DoubleEndedIterator for Iter<'v, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let index = self.back;
        self.resolve(index)
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Iter<'_, S> {}

impl<S: Sequence + ?Sized> std::iter::FusedIterator for Iter<'_, S> {}

impl<S: Sequence + ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            origin: self.origin,
            translator: self.translator,
            front: self.front,
            back: self.back,
        }
    }
}
