//! Slice ranges and the index arithmetic behind every view.
//!
//! A [`SliceRange`] is the unresolved `start:stop:step` triple a caller hands
//! to a view. Resolving it against a concrete length yields [`Indices`], and
//! [`Indices::translator`] turns those into the linear map from logical to
//! physical positions.

use core::fmt;
use core::num::NonZeroIsize;
use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::ViewError;

/// An unresolved, possibly negative, possibly strided range.
///
/// Omitted parts take the defaults for the direction of the step, and
/// negative bounds count from the end, so `SliceRange::new(Some(1), Some(-1), Some(2))`
/// addresses every other element between the first and the last.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct SliceRange {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceRange {
    /// The range covering everything, in order.
    #[inline]
    pub const fn full() -> Self {
        Self {
            start: None,
            stop: None,
            step: None,
        }
    }

    #[inline]
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Returns the same bounds with `step` as the stride.
    ///
    /// ```
    /// use strided_view::SliceRange;
    ///
    /// let odd = SliceRange::from(1..).step_by(2);
    /// assert_eq!(odd.to_string(), "1::2");
    /// ```
    #[inline]
    pub const fn step_by(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Returns `true` if this range selects every element in order.
    #[inline]
    pub const fn is_full(&self) -> bool {
        matches!(
            (self.start, self.stop, self.step),
            (None, None, None | Some(1))
        )
    }

    /// Returns the step, rejecting zero.
    #[inline]
    pub fn checked_step(&self) -> Result<NonZeroIsize, ViewError> {
        NonZeroIsize::new(self.step.unwrap_or(1)).ok_or(ViewError::ZeroStep)
    }

    /// Resolves this range against a sequence of length `len`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ZeroStep`] if the step is zero.
    pub fn indices(&self, len: usize) -> Result<Indices, ViewError> {
        let step = self.checked_step()?;
        Ok(self.normalize(len, step))
    }

    /// Normalization with the step already validated.
    pub(crate) fn normalize(&self, len: usize, step: NonZeroIsize) -> Indices {
        let step = step.get();
        let len = len as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let start = match self.start {
            Some(start) => clamp_bound(start, len, lower, upper),
            None if step < 0 => upper,
            None => lower,
        };
        let stop = match self.stop {
            Some(stop) => clamp_bound(stop, len, lower, upper),
            None if step < 0 => lower,
            None => upper,
        };

        Indices { start, stop, step }
    }
}

#[inline]
fn clamp_bound(bound: isize, len: isize, lower: isize, upper: isize) -> isize {
    if bound < 0 {
        bound.saturating_add(len).max(lower)
    } else {
        bound.min(upper)
    }
}

impl fmt::Display for SliceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_str(":")?;
        if let Some(stop) = self.stop {
            write!(f, "{stop}")?;
        }
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

// --- Conversions from std ranges ---

impl From<Range<isize>> for SliceRange {
    #[inline]
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceRange {
    #[inline]
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceRange {
    #[inline]
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeFull> for SliceRange {
    #[inline]
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<RangeInclusive<isize>> for SliceRange {
    #[inline]
    fn from(range: RangeInclusive<isize>) -> Self {
        Self::new(Some(*range.start()), inclusive_stop(*range.end()), None)
    }
}

impl From<RangeToInclusive<isize>> for SliceRange {
    #[inline]
    fn from(range: RangeToInclusive<isize>) -> Self {
        Self::new(None, inclusive_stop(range.end), None)
    }
}

// `..=-1` reaches the last element, which an exclusive stop can only say by omission.
#[inline]
fn inclusive_stop(end: isize) -> Option<isize> {
    match end {
        -1 | isize::MAX => None,
        end => Some(end + 1),
    }
}

/// A range resolved against a concrete length.
///
/// `start` and `stop` are concrete positions (no negative wraparound left):
/// for a positive step `0 <= start, stop <= len`, for a negative step
/// `-1 <= start, stop <= len - 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Indices {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
}

impl Indices {
    /// Number of positions the range visits.
    #[inline]
    pub fn len(&self) -> usize {
        let stride = self.step.unsigned_abs();
        if self.step > 0 && self.stop > self.start {
            (self.stop - self.start - 1) as usize / stride + 1
        } else if self.step < 0 && self.start > self.stop {
            (self.start - self.stop - 1) as usize / stride + 1
        } else {
            0
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn translator(&self) -> Translator {
        Translator {
            offset: self.start,
            stride: self.step,
        }
    }
}

impl fmt::Display for Indices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.stop, self.step)
    }
}

/// Linear map from logical to physical positions: `i -> offset + i * stride`.
///
/// Performs no bounds checking; the view owning it does.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Translator {
    offset: isize,
    stride: isize,
}

impl Translator {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            offset: 0,
            stride: 1,
        }
    }

    #[inline]
    pub const fn offset(&self) -> isize {
        self.offset
    }

    #[inline]
    pub const fn stride(&self) -> isize {
        self.stride
    }

    /// Physical position of logical position `index`.
    ///
    /// Positions that would be negative come out as huge values, which every
    /// caller rejects as out of bounds.
    #[inline]
    pub fn translate(&self, index: usize) -> usize {
        self.offset
            .wrapping_add((index as isize).wrapping_mul(self.stride)) as usize
    }

    /// Fuses `self` applied after `inner` into one translator.
    ///
    /// Wrapping arithmetic is exact for every position that lands in bounds.
    #[inline]
    pub fn compose(self, inner: Translator) -> Translator {
        Translator {
            offset: self
                .offset
                .wrapping_add(inner.offset.wrapping_mul(self.stride)),
            stride: self.stride.wrapping_mul(inner.stride),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Physical positions a stride-slice visits, walked one step at a time.
    fn walk(indices: Indices) -> Vec<isize> {
        let mut out = Vec::new();
        let mut i = indices.start;
        while (indices.step > 0 && i < indices.stop) || (indices.step < 0 && i > indices.stop) {
            out.push(i);
            i += indices.step;
        }
        out
    }

    #[test]
    fn test_defaults() {
        let idx = SliceRange::full().indices(6).unwrap();
        assert_eq!(
            idx,
            Indices {
                start: 0,
                stop: 6,
                step: 1
            }
        );
        assert_eq!(idx.len(), 6);

        let idx = SliceRange::full().step_by(-1).indices(6).unwrap();
        assert_eq!(
            idx,
            Indices {
                start: 5,
                stop: -1,
                step: -1
            }
        );
        assert_eq!(walk(idx), vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_negative_bounds() {
        let idx = SliceRange::from(1..-1).step_by(2).indices(8).unwrap();
        assert_eq!(
            idx,
            Indices {
                start: 1,
                stop: 7,
                step: 2
            }
        );
        assert_eq!(idx.len(), 3);
        assert_eq!(walk(idx), vec![1, 3, 5]);
    }

    #[test]
    fn test_clamping() {
        let idx = SliceRange::from(-100..100).indices(5).unwrap();
        assert_eq!((idx.start, idx.stop), (0, 5));

        let idx = SliceRange::new(Some(100), Some(-100), Some(-1))
            .indices(5)
            .unwrap();
        assert_eq!((idx.start, idx.stop), (4, -1));
        assert_eq!(idx.len(), 5);
    }

    #[test]
    fn test_empty_ranges() {
        assert!(SliceRange::from(4..2).indices(8).unwrap().is_empty());
        assert!(SliceRange::from(2..4)
            .step_by(-1)
            .indices(8)
            .unwrap()
            .is_empty());
        assert!(SliceRange::full().indices(0).unwrap().is_empty());
        assert!(SliceRange::full().step_by(-3).indices(0).unwrap().is_empty());
    }

    #[test]
    fn test_len_matches_walk() {
        for len in 0..12usize {
            for start in -14..14isize {
                for stop in -14..14isize {
                    for step in [-5, -3, -2, -1, 1, 2, 3, 7] {
                        let range = SliceRange::new(Some(start), Some(stop), Some(step));
                        let idx = range.indices(len).unwrap();
                        let walked = walk(idx);
                        assert_eq!(idx.len(), walked.len(), "{range} over {len}");
                        assert!(walked.iter().all(|&p| 0 <= p && p < len as isize));
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_step() {
        assert_eq!(
            SliceRange::full().step_by(0).indices(3),
            Err(ViewError::ZeroStep)
        );
    }

    #[test]
    fn test_inclusive() {
        assert_eq!(
            SliceRange::from(1..=3),
            SliceRange::new(Some(1), Some(4), None)
        );
        assert_eq!(SliceRange::from(..=-1), SliceRange::full());
        assert_eq!(SliceRange::from(..=-2), SliceRange::from(..-1));
    }

    #[test]
    fn test_display() {
        assert_eq!(SliceRange::full().to_string(), ":");
        assert_eq!(SliceRange::from(1..-1).step_by(2).to_string(), "1:-1:2");
        assert_eq!(SliceRange::full().step_by(-1).to_string(), "::-1");
    }

    #[test]
    fn test_translate() {
        let t = SliceRange::from(1..).step_by(3).indices(10).unwrap().translator();
        assert_eq!(t.translate(0), 1);
        assert_eq!(t.translate(2), 7);

        let t = SliceRange::full().step_by(-2).indices(10).unwrap().translator();
        assert_eq!(t.translate(0), 9);
        assert_eq!(t.translate(4), 1);
    }

    #[test]
    fn test_compose() {
        // x[1::2] then [::-1] over a length-10 origin.
        let outer = SliceRange::from(1..).step_by(2).indices(10).unwrap();
        let inner = SliceRange::full().step_by(-1).indices(outer.len()).unwrap();
        let fused = outer.translator().compose(inner.translator());

        let expected: Vec<usize> = (0..inner.len())
            .map(|i| outer.translator().translate(inner.translator().translate(i)))
            .collect();
        let actual: Vec<usize> = (0..inner.len()).map(|i| fused.translate(i)).collect();
        assert_eq!(actual, expected);
        assert_eq!(actual, vec![9, 7, 5, 3, 1]);
    }
}
