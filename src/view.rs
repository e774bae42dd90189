//! Live, copy-free views over a sequence.
//!
//! A [`View`] borrows its origin and a chain of [`SliceRange`] layers. Every
//! logical position it exposes is mapped onto a physical position of the
//! origin by one fused [`Translator`], so reads and writes through the view
//! are reads and writes of the origin itself.

use core::cmp::Ordering;
use core::fmt;
use core::num::NonZeroIsize;
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

use crate::heap;
use crate::iter::Iter;
use crate::permutation::next_permutation_by;
use crate::range::{Indices, SliceRange, Translator};
use crate::sequence::Sequence;
use crate::sort::{shell_sort, IndexedAccess};
use crate::ViewError;

const UNIT_STEP: NonZeroIsize = match NonZeroIsize::new(1) {
    Some(step) => step,
    None => unreachable!(),
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Layer {
    range: SliceRange,
    step: NonZeroIsize,
}

impl Layer {
    #[inline]
    fn new(range: SliceRange) -> Result<Self, ViewError> {
        Ok(Self {
            step: range.checked_step()?,
            range,
        })
    }
}

/// The slice ranges of a view, without the borrow of its origin.
///
/// The first range applies to the origin, every following range to the
/// result of the one before it. Obtained from [`View::detach`] and turned
/// back into a view with [`Layers::attach`], which re-aligns against the
/// origin as it is at that point.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Layers {
    layers: Vec<Layer>,
}

impl Layers {
    /// A single layer covering the whole origin.
    pub fn full() -> Self {
        Self {
            layers: vec![Layer {
                range: SliceRange::full(),
                step: UNIT_STEP,
            }],
        }
    }

    /// # Errors
    ///
    /// Returns [`ViewError::ZeroStep`] if the range has a zero step.
    pub fn new(range: impl Into<SliceRange>) -> Result<Self, ViewError> {
        Ok(Self {
            layers: vec![Layer::new(range.into())?],
        })
    }

    /// The ranges, outermost first.
    pub fn ranges(&self) -> impl ExactSizeIterator<Item = SliceRange> + '_ {
        self.layers.iter().map(|layer| layer.range)
    }

    /// Number of layers.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Re-slices: replaces a full innermost layer, otherwise nests a new one.
    pub fn push(&mut self, range: impl Into<SliceRange>) -> Result<(), ViewError> {
        let layer = Layer::new(range.into())?;
        match self.layers.last_mut() {
            Some(last) if last.range.is_full() => *last = layer,
            _ => self.layers.push(layer),
        }
        Ok(())
    }

    /// Binds these layers to `origin` and aligns them.
    pub fn attach<S: Sequence + ?Sized>(self, origin: &mut S) -> View<'_, S> {
        let mut view = View {
            origin,
            layers: self,
            indices: Vec::new(),
            translator: Translator::identity(),
            len: 0,
        };
        view.align();
        view
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::full()
    }
}

/// A live view over a strided sub-range of a [`Sequence`].
///
/// The view never copies elements. Its length and translator are computed
/// by [`align`](View::align) from the current length of the origin, at
/// construction and after every structural edit made through the view. If
/// the origin is resized some other way (see [`origin_mut`](View::origin_mut)),
/// the view keeps addressing the old geometry until it is aligned again.
///
/// # Example
///
/// ```
/// use strided_view::{SliceRange, View};
///
/// let mut x = vec![22, 7, 2, -5, 8, 4];
///
/// View::new(&mut x).into_slice(1..)?.sort()?;
/// assert_eq!(x, [22, -5, 2, 4, 7, 8]);
///
/// View::with_range(&mut x, SliceRange::full().step_by(2))?.reverse()?;
/// assert_eq!(x, [7, -5, 2, 4, 22, 8]);
/// # Ok::<(), strided_view::ViewError>(())
/// ```
pub struct View<'a, S: Sequence + ?Sized> {
    origin: &'a mut S,
    layers: Layers,
    /// Normalized indices of each layer, as of the last alignment
    indices: Vec<Indices>,
    /// Logical to physical map, as of the last alignment
    translator: Translator,
    /// Logical length, as of the last alignment
    len: usize,
}

impl<'a, S: Sequence + ?Sized> View<'a, S> {
    /// Creates a view of the whole of `origin`.
    #[inline]
    pub fn new(origin: &'a mut S) -> Self {
        Layers::full().attach(origin)
    }

    /// Creates a view of `range` within `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ZeroStep`] if the range has a zero step.
    pub fn with_range(origin: &'a mut S, range: impl Into<SliceRange>) -> Result<Self, ViewError> {
        Ok(Layers::new(range)?.attach(origin))
    }

    /// Recomputes the length and translator against the origin's current length.
    pub fn align(&mut self) {
        let mut len = self.origin.len();
        let mut translator = Translator::identity();

        self.indices.clear();
        for layer in &self.layers.layers {
            let indices = layer.range.normalize(len, layer.step);
            translator = translator.compose(indices.translator());
            len = indices.len();
            self.indices.push(indices);
        }

        self.translator = translator;
        self.len = len;
        tracing::trace!(
            offset = translator.offset(),
            stride = translator.stride(),
            len,
            depth = self.indices.len(),
            "aligned view"
        );
    }

    /// Returns `true` if the view addresses a position its origin no longer has.
    ///
    /// Only a shrunk origin is detected; an origin that changed length but
    /// still covers every translated position looks fresh.
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.check_fresh().is_err()
    }

    fn check_fresh(&self) -> Result<(), ViewError> {
        if self.len == 0 {
            return Ok(());
        }
        // Translation is monotone, so the ends bound every position.
        let first = self.translator.translate(0);
        let last = self.translator.translate(self.len - 1);
        let physical = first.max(last);
        let origin_len = self.origin.len();
        if physical < origin_len {
            Ok(())
        } else {
            Err(ViewError::Stale {
                physical,
                origin_len,
            })
        }
    }

    /// Returns the number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The normalized indices of each layer, outermost first.
    #[inline]
    pub fn indices(&self) -> &[Indices] {
        &self.indices
    }

    /// The fused logical to physical translator.
    #[inline]
    pub fn translator(&self) -> Translator {
        self.translator
    }

    #[inline]
    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    #[inline]
    pub fn origin(&self) -> &S {
        &*self.origin
    }

    /// Direct access to the origin.
    ///
    /// Changes made here bypass the view; call [`align`](View::align)
    /// afterwards if the origin's length changed.
    #[inline]
    pub fn origin_mut(&mut self) -> &mut S {
        &mut *self.origin
    }

    /// Gives the borrow of the origin back.
    #[inline]
    pub fn into_origin(self) -> &'a mut S {
        self.origin
    }

    /// Releases the origin, keeping the slice ranges for a later [`Layers::attach`].
    #[inline]
    pub fn detach(self) -> Layers {
        self.layers
    }

    // --- Index resolution ---

    fn logical(&self, index: isize) -> Result<usize, ViewError> {
        let len = self.len as isize;
        let wrapped = if index < 0 { index + len } else { index };
        if (0..len).contains(&wrapped) {
            Ok(wrapped as usize)
        } else {
            Err(ViewError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn physical(&self, logical: usize) -> Result<usize, ViewError> {
        let physical = self.translator.translate(logical);
        let origin_len = self.origin.len();
        if physical < origin_len {
            Ok(physical)
        } else {
            Err(ViewError::Stale {
                physical,
                origin_len,
            })
        }
    }

    /// Physical position in the origin of logical position `index`.
    ///
    /// Negative indices count from the end of the view.
    #[inline]
    pub fn physical_index(&self, index: isize) -> Result<usize, ViewError> {
        self.physical(self.logical(index)?)
    }

    fn slot(&self, logical: usize) -> Result<&S::Item, ViewError> {
        let physical = self.physical(logical)?;
        let origin_len = self.origin.len();
        self.origin.get(physical).ok_or(ViewError::Stale {
            physical,
            origin_len,
        })
    }

    fn slot_mut(&mut self, logical: usize) -> Result<&mut S::Item, ViewError> {
        let physical = self.physical(logical)?;
        let origin_len = self.origin.len();
        self.origin.get_mut(physical).ok_or(ViewError::Stale {
            physical,
            origin_len,
        })
    }

    // --- Element access ---

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ViewError::IndexOutOfRange`] if `index` is outside `-len..len`,
    /// [`ViewError::Stale`] if it translates past the end of the origin.
    #[inline]
    pub fn get(&self, index: isize) -> Result<&S::Item, ViewError> {
        self.slot(self.logical(index)?)
    }

    #[inline]
    pub fn get_mut(&mut self, index: isize) -> Result<&mut S::Item, ViewError> {
        let logical = self.logical(index)?;
        self.slot_mut(logical)
    }

    /// Writes `value` to position `index` of the origin, through the view.
    #[inline]
    pub fn set(&mut self, index: isize, value: S::Item) -> Result<(), ViewError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Like [`set`](View::set), returning the previous value.
    #[inline]
    pub fn replace(&mut self, index: isize, value: S::Item) -> Result<S::Item, ViewError> {
        Ok(core::mem::replace(self.get_mut(index)?, value))
    }

    #[inline]
    pub fn first(&self) -> Option<&S::Item> {
        self.get(0).ok()
    }

    #[inline]
    pub fn last(&self) -> Option<&S::Item> {
        self.get(-1).ok()
    }

    /// Swaps two elements of the view.
    pub fn swap(&mut self, a: isize, b: isize) -> Result<(), ViewError> {
        let pa = self.physical_index(a)?;
        let pb = self.physical_index(b)?;
        self.origin.swap(pa, pb);
        Ok(())
    }

    /// Returns an iterator over the view.
    ///
    /// The iterator works from the translator and length as they are now.
    #[inline]
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            origin: &*self.origin,
            translator: self.translator,
            front: 0,
            back: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    // --- Slicing ---

    /// Returns a view of `range` within this view.
    ///
    /// If this view's innermost range selects everything, the new view
    /// replaces it; otherwise the new range is layered on top. Either way the
    /// result resolves through a single translator.
    pub fn slice(&mut self, range: impl Into<SliceRange>) -> Result<View<'_, S>, ViewError> {
        let mut layers = self.layers.clone();
        layers.push(range)?;
        Ok(layers.attach(&mut *self.origin))
    }

    /// Like [`slice`](View::slice), consuming this view.
    pub fn into_slice(self, range: impl Into<SliceRange>) -> Result<View<'a, S>, ViewError> {
        let mut layers = self.layers;
        layers.push(range)?;
        Ok(layers.attach(self.origin))
    }

    /// Same as [`slice`](View::slice).
    #[inline]
    pub fn get_range(&mut self, range: impl Into<SliceRange>) -> Result<View<'_, S>, ViewError> {
        self.slice(range)
    }

    /// Assigns `values` one-to-one to the positions `range` selects.
    ///
    /// All-or-nothing: the values are counted before anything is written.
    ///
    /// # Errors
    ///
    /// [`ViewError::LengthMismatch`] if the number of values differs from the
    /// length of the range.
    pub fn set_range<I>(&mut self, range: impl Into<SliceRange>, values: I) -> Result<(), ViewError>
    where
        I: IntoIterator<Item = S::Item>,
    {
        let values: Vec<S::Item> = values.into_iter().collect();
        let mut target = self.slice(range)?;
        if values.len() != target.len {
            tracing::debug!(
                expected = target.len,
                found = values.len(),
                "rejected range assignment"
            );
            return Err(ViewError::LengthMismatch {
                expected: target.len,
                found: values.len(),
            });
        }
        target.check_fresh()?;
        for (logical, value) in values.into_iter().enumerate() {
            *target.slot_mut(logical)? = value;
        }
        Ok(())
    }

    /// Assigns `values` to every position of the view.
    #[inline]
    pub fn assign<I>(&mut self, values: I) -> Result<(), ViewError>
    where
        I: IntoIterator<Item = S::Item>,
    {
        self.set_range(SliceRange::full(), values)
    }

    /// Writes a clone of `value` to every position of the view.
    pub fn fill(&mut self, value: S::Item) -> Result<(), ViewError>
    where
        S::Item: Clone,
    {
        self.check_fresh()?;
        for logical in 0..self.len {
            *self.slot_mut(logical)? = value.clone();
        }
        Ok(())
    }

    // --- Searching ---

    /// Returns `true` if the view has an element equal to `value`.
    pub fn contains(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Logical position of the first element equal to `value`.
    pub fn position(&self, value: &S::Item) -> Option<usize>
    where
        S::Item: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    pub fn count(&self, value: &S::Item) -> usize
    where
        S::Item: PartialEq,
    {
        self.iter().filter(|&item| item == value).count()
    }

    // --- Structural edits ---

    /// Inserts `value` just past the last element of the view, as
    /// [`insert`](View::insert) at `len` does.
    #[inline]
    pub fn push(&mut self, value: S::Item) -> Result<(), ViewError> {
        let end = self.len as isize;
        self.insert(end, value)
    }

    /// Pushes each of `values` in turn, re-aligning after every one.
    ///
    /// A view with a fixed stop does not grow, so later values land in front
    /// of earlier ones.
    pub fn extend<I>(&mut self, values: I) -> Result<(), ViewError>
    where
        I: IntoIterator<Item = S::Item>,
    {
        for value in values {
            self.push(value)?;
        }
        Ok(())
    }

    /// Removes and returns the last element of the view.
    ///
    /// # Errors
    ///
    /// [`ViewError::IndexOutOfRange`] if the view is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<S::Item, ViewError> {
        self.delete(-1)
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// # Errors
    ///
    /// [`ViewError::NotFound`] if there is none.
    pub fn remove_value(&mut self, value: &S::Item) -> Result<S::Item, ViewError>
    where
        S::Item: PartialEq,
    {
        match self.position(value) {
            Some(logical) => self.delete(logical as isize),
            None => Err(ViewError::NotFound),
        }
    }

    /// Removes the element at `index` from the origin and re-aligns.
    pub fn delete(&mut self, index: isize) -> Result<S::Item, ViewError> {
        let physical = self.physical_index(index)?;
        let item = self.origin.remove(physical);
        tracing::debug!(index, physical, "deleted through view");
        self.align();
        Ok(item)
    }

    /// Inserts `value` into the origin at the position of `index` and re-aligns.
    ///
    /// `index == len` inserts right after the last element of the view, in
    /// view order. Whether the new element is inside the view afterwards
    /// depends on the view's bounds.
    pub fn insert(&mut self, index: isize, value: S::Item) -> Result<(), ViewError> {
        let len = self.len as isize;
        let wrapped = if index < 0 { index + len } else { index };
        if !(0..=len).contains(&wrapped) {
            return Err(ViewError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let physical = if wrapped < len {
            self.physical(wrapped as usize)?
        } else {
            self.end_position()
        };
        self.origin.insert(physical, value);
        tracing::debug!(index, physical, "inserted through view");
        self.align();
        Ok(())
    }

    /// Physical position just past the last logical element.
    fn end_position(&self) -> usize {
        let stride = self.translator.stride();
        let anchor = if self.len == 0 {
            self.translator.offset()
        } else {
            self.translator.translate(self.len - 1) as isize
        };
        // A descending view continues physically before its last element.
        let position = match (self.len == 0, stride > 0) {
            (true, true) | (false, false) => anchor,
            _ => anchor + 1,
        };
        position.clamp(0, self.origin.len() as isize) as usize
    }

    /// Deletes by key. Ranges are rejected.
    ///
    /// # Errors
    ///
    /// [`ViewError::Unsupported`] for a range key: removing a strided set of
    /// positions would leave other views of the same origin inconsistent.
    pub fn delete_key(&mut self, key: impl Into<Key>) -> Result<S::Item, ViewError> {
        match key.into() {
            Key::Index(index) => self.delete(index),
            Key::Range(_) => Err(ViewError::Unsupported("deleting a range through a view")),
        }
    }

    /// Assigns by key: one value to an index, or many values to a range.
    ///
    /// # Errors
    ///
    /// [`ViewError::KeyKind`] if the key and the assignment disagree, and
    /// otherwise whatever [`set`](View::set) or [`set_range`](View::set_range)
    /// return.
    pub fn assign_key(
        &mut self,
        key: impl Into<Key>,
        assignment: Assignment<S::Item>,
    ) -> Result<(), ViewError> {
        match (key.into(), assignment) {
            (Key::Index(index), Assignment::One(value)) => self.set(index, value),
            (Key::Range(range), Assignment::Many(values)) => self.set_range(range, values),
            (Key::Index(_), Assignment::Many(_)) => Err(ViewError::KeyKind {
                expected: "range",
                found: "index",
            }),
            (Key::Range(_), Assignment::One(_)) => Err(ViewError::KeyKind {
                expected: "index",
                found: "range",
            }),
        }
    }

    // --- Reordering ---

    /// A table of every physical position, for algorithms that revisit them.
    fn translated(&mut self) -> Result<Translated<'_, S>, ViewError> {
        self.check_fresh()?;
        let slots = (0..self.len)
            .map(|logical| self.translator.translate(logical))
            .collect();
        Ok(Translated {
            origin: &mut *self.origin,
            slots,
        })
    }

    /// Reverses the order of the view's elements in the origin.
    pub fn reverse(&mut self) -> Result<(), ViewError> {
        self.check_fresh()?;
        let n = self.len;
        for k in 0..n / 2 {
            let a = self.translator.translate(k);
            let b = self.translator.translate(n - 1 - k);
            self.origin.swap(a, b);
        }
        Ok(())
    }

    /// Sorts the view's elements in ascending order, in the origin.
    ///
    /// Shell sort over the translated positions: not stable, no allocation
    /// beyond one table of positions.
    #[inline]
    pub fn sort(&mut self) -> Result<(), ViewError>
    where
        S::Item: Ord,
    {
        self.sort_by(Ord::cmp)
    }

    pub fn sort_by<F>(&mut self, mut compare: F) -> Result<(), ViewError>
    where
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        let mut table = self.translated()?;
        let len = table.slots.len();
        shell_sort(&mut table, 0, len, &mut |a: &S::Item, b: &S::Item| {
            compare(a, b) == Ordering::Less
        });
        Ok(())
    }

    pub fn sort_by_key<K, F>(&mut self, mut f: F) -> Result<(), ViewError>
    where
        F: FnMut(&S::Item) -> K,
        K: Ord,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)))
    }

    /// Returns `true` if the view's elements are in non-decreasing order.
    pub fn is_sorted(&self) -> bool
    where
        S::Item: PartialOrd,
    {
        self.iter().zip(self.iter().skip(1)).all(|(a, b)| a <= b)
    }

    /// Moves the `k` smallest elements of the view to its first `k`
    /// positions, in ascending order. The rest end up in unspecified order.
    ///
    /// # Errors
    ///
    /// [`ViewError::IndexOutOfRange`] if `k > len`.
    pub fn partial_sort(&mut self, k: usize) -> Result<(), ViewError>
    where
        S::Item: Ord,
    {
        self.partial_sort_by(k, Ord::cmp)
    }

    pub fn partial_sort_by<F>(&mut self, k: usize, mut compare: F) -> Result<(), ViewError>
    where
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        if k > self.len {
            return Err(ViewError::IndexOutOfRange {
                index: k as isize,
                len: self.len,
            });
        }
        let mut table = self.translated()?;
        heap::partial_sort(&mut table, k, &mut |a: &S::Item, b: &S::Item| {
            compare(a, b) == Ordering::Less
        });
        Ok(())
    }

    /// Rearranges the view into the next lexicographic permutation.
    ///
    /// Returns `Ok(false)` and leaves the elements alone if they are already
    /// in the last permutation (non-increasing order).
    pub fn next_permutation(&mut self) -> Result<bool, ViewError>
    where
        S::Item: Ord,
    {
        let mut table = self.translated()?;
        Ok(next_permutation_by(&mut table, &mut |a: &S::Item, b: &S::Item| {
            a < b
        }))
    }
}

/// A view, re-addressed through a precomputed table of physical positions.
struct Translated<'v, S: Sequence + ?Sized> {
    origin: &'v mut S,
    slots: Vec<usize>,
}

impl<S: Sequence + ?Sized> IndexedAccess<S::Item> for Translated<'_, S> {
    #[inline]
    fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn get_ref(&self, index: usize) -> &S::Item {
        self.origin
            .get(self.slots[index])
            .expect("translated position out of bounds")
    }

    #[inline]
    fn get_ref_mut(&mut self, index: usize) -> &mut S::Item {
        self.origin
            .get_mut(self.slots[index])
            .expect("translated position out of bounds")
    }

    #[inline]
    fn swap_elements(&mut self, a: usize, b: usize) {
        self.origin.swap(self.slots[a], self.slots[b]);
    }
}

/// Algorithms from [`sort`](crate::sort), [`heap`](crate::heap) and
/// [`permutation`](crate::permutation) accept views directly; indices are logical.
impl<S: Sequence + ?Sized> IndexedAccess<S::Item> for View<'_, S> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get_ref(&self, index: usize) -> &S::Item {
        &self[index]
    }

    #[inline]
    fn get_ref_mut(&mut self, index: usize) -> &mut S::Item {
        &mut self[index]
    }

    #[inline]
    fn swap_elements(&mut self, a: usize, b: usize) {
        let (pa, pb) = (self.translator.translate(a), self.translator.translate(b));
        self.origin.swap(pa, pb);
    }
}

impl<S: Sequence + ?Sized> Index<usize> for View<'_, S> {
    type Output = S::Item;

    #[inline]
    fn index(&self, index: usize) -> &S::Item {
        if index >= self.len {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            );
        }
        match self.slot(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<S: Sequence + ?Sized> IndexMut<usize> for View<'_, S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut S::Item {
        if index >= self.len {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            );
        }
        match self.slot_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'v, S: Sequence + ?Sized> IntoIterator for &'v View<'_, S> {
    type Item = &'v S::Item;
    type IntoIter = Iter<'v, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S, U> PartialEq<[U]> for View<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<S, U, const N: usize> PartialEq<[U; N]> for View<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        *self == other[..]
    }
}

impl<S, U> PartialEq<Vec<U>> for View<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        *self == other[..]
    }
}

impl<S: Sequence + ?Sized> fmt::Debug for View<'_, S>
where
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `View[1:7:2] of 0x...`: the normalized indices of each layer and the
/// address of the origin.
impl<S: Sequence + ?Sized> fmt::Display for View<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("View")?;
        for indices in &self.indices {
            write!(f, "[{indices}]")?;
        }
        let origin: *const S = &*self.origin;
        write!(f, " of {:p}", origin.cast::<()>())
    }
}

/// What a view is indexed by: one position, or a range of positions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Index(isize),
    Range(SliceRange),
}

impl From<isize> for Key {
    #[inline]
    fn from(index: isize) -> Self {
        Key::Index(index)
    }
}

impl From<SliceRange> for Key {
    #[inline]
    fn from(range: SliceRange) -> Self {
        Key::Range(range)
    }
}

macro_rules! impl_key_from_range {
    ($($RangeType:ty),*) => {
        $(
            impl From<$RangeType> for Key {
                #[inline]
                fn from(range: $RangeType) -> Self {
                    Key::Range(range.into())
                }
            }
        )*
    };
}

impl_key_from_range!(
    Range<isize>,
    RangeFrom<isize>,
    RangeTo<isize>,
    RangeFull,
    RangeInclusive<isize>,
    RangeToInclusive<isize>
);

/// The value side of [`View::assign_key`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Assignment<T> {
    One(T),
    Many(Vec<T>),
}
