//! Live, copy-free strided views over mutable sequences.
//!
//! A [`View`] lets you read, write, reorder and re-slice an arbitrary strided
//! sub-range of a sequence without copying it. Every access is index
//! arithmetic translated back onto the original storage, so changes made
//! through a view are changes to the original, and nested views fuse into a
//! single translation.
//!
//! # Example
//!
//! ```
//! use strided_view::{SliceRange, View};
//!
//! let mut x: Vec<i32> = (0..8).collect();
//! let mut view = View::with_range(&mut x, SliceRange::from(1..-1).step_by(2))?;
//! assert_eq!(view, [1, 3, 5]);
//!
//! // Writes go straight to `x`.
//! view.set(-1, 50)?;
//! view.slice(SliceRange::full().step_by(-1))?.sort()?;
//! assert_eq!(x, [0, 50, 2, 3, 4, 1, 6, 7]);
//! # Ok::<(), strided_view::ViewError>(())
//! ```
//!
//! The view caches its length and translation. Structural edits made through
//! the view re-align it automatically; after changing the origin's length
//! any other way, call [`View::align`].

mod error;
pub mod heap;
mod iter;
mod permutation;
mod range;
mod sequence;
pub mod sort;
mod view;

pub use error::ViewError;
pub use heap::{partial_sort, partial_sort_split};
pub use iter::Iter;
pub use permutation::{next_permutation, next_permutation_by};
pub use range::{Indices, SliceRange, Translator};
pub use sequence::Sequence;
pub use sort::{shell_sort, IndexedAccess, ShellGaps};
pub use view::{Assignment, Key, Layers, View};
