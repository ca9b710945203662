//! Bounded top-N selection.
//!
//! [`TopN`] keeps the `N` greatest elements of a stream under a caller supplied ordering
//! using at most `N` slots of memory, then yields them greatest first:
//!
//! ```
//! use topn::TopN;
//!
//! let mut top = TopN::by_ord(3);
//! top.extend([5, 1, 9, 3, 7, 2]);
//! assert_eq!(top.take(), vec![9, 7, 5]);
//! ```
//!
//! Adding is O(1) while the buffer fills and O(log N) afterwards, with a single comparison
//! for elements below the current minimum. An accumulator is single owner and is reused by
//! calling [`TopN::take`] which empties it.
mod heap;
pub mod iter;
mod top;

pub use iter::TopNExt;
pub use top::{OrdFn, TopN};

#[cfg(test)]
mod tests;
