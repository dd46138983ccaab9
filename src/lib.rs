//! # An ordered set backed by an AA-tree
//!
//! `aa-set` provides [`AaSet`], a sorted set of unique elements kept in an
//! [AA-tree](https://en.wikipedia.org/wiki/AA_tree).  Insertion, removal,
//! membership and lower-bound queries take `O(log n)` time.
//!
//! Besides the usual iterators, the set hands out [`Cursor`]s: positions that
//! step forwards and backwards through the set by following parent links,
//! with a distinct end position one past the last element.
//!
//! ```
//! use aa_set::AaSet;
//!
//! let mut s = AaSet::from([5, 3, 8, 1, 4]);
//! s.remove(&3);
//!
//! let mut c = s.lower_bound(&6);
//! assert_eq!(c.get(), Some(&8));
//! c.move_prev();
//! assert_eq!(c.get(), Some(&5));
//! ```
#![warn(missing_docs)]

mod aa;
pub use aa::{AaSet, Cursor, IntoIter, InvariantViolation, Iter, Range};
